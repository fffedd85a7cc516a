//! Table-to-series preparation shared by the charts
//!
//! Rows with a missing category or a missing value are skipped. Groups keep
//! the order in which their category first appears.

use crate::{Error, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::ops::Range;

/// Values of one category
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub values: Vec<f64>,
}

/// (x, y) points of one category
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Per-group densities over a common set of bins
#[derive(Debug, Clone, PartialEq)]
pub struct DensityOverlay {
    /// `bins + 1` increasing bin edges
    pub edges: Vec<f64>,
    pub series: Vec<Group>,
}

impl DensityOverlay {
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Bin midpoints, one per density value
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }
}

fn labels(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::ColumnNotFound(name.to_string()))?;
    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

fn floats(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::ColumnNotFound(name.to_string()))?;
    let values = column.cast(&DataType::Float64)?;
    // NaN cannot be placed on an axis
    Ok(values
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect())
}

/// Collect items into groups keyed by label, in first-occurrence order
fn bucket<T>(rows: impl Iterator<Item = (String, T)>) -> Vec<(String, Vec<T>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for (label, item) in rows {
        match index.get(&label) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push((label, vec![item]));
            }
        }
    }
    groups
}

/// Values of `value` split by `category`
pub fn grouped_values(df: &DataFrame, category: &str, value: &str) -> Result<Vec<Group>> {
    let labels = labels(df, category)?;
    let values = floats(df, value)?;

    let rows = labels
        .into_iter()
        .zip(values)
        .filter_map(|(label, value)| Some((label?, value?)));
    let groups: Vec<Group> = bucket(rows)
        .into_iter()
        .map(|(label, values)| Group { label, values })
        .collect();

    if groups.is_empty() {
        return Err(Error::Data(format!("{value} by {category} has no complete rows")));
    }
    Ok(groups)
}

/// Points (`x`, `y`) split by `category`
pub fn grouped_points(df: &DataFrame, category: &str, x: &str, y: &str) -> Result<Vec<PointGroup>> {
    let labels = labels(df, category)?;
    let xs = floats(df, x)?;
    let ys = floats(df, y)?;

    let rows = labels
        .into_iter()
        .zip(xs.into_iter().zip(ys))
        .filter_map(|(label, (x, y))| Some((label?, (x?, y?))));
    let groups: Vec<PointGroup> = bucket(rows)
        .into_iter()
        .map(|(label, points)| PointGroup { label, points })
        .collect();

    if groups.is_empty() {
        return Err(Error::Data(format!("{y} against {x} has no complete rows")));
    }
    Ok(groups)
}

/// Data range widened by 5% on each side; a single value gets a unit margin
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
    let (min, max) = values
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    Some(min - pad..max + pad)
}

/// Histogram densities of every group over shared, equal-width bins
///
/// Each series integrates to one over the bins.
pub fn density_overlay_data(groups: &[Group], bins: usize) -> Result<DensityOverlay> {
    if bins == 0 {
        return Err(Error::InvalidOption("bins must be positive".to_string()));
    }
    let all = groups.iter().flat_map(|g| g.values.iter().copied());
    let (mut lo, mut hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        return Err(Error::Data("density overlay has no values".to_string()));
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let series = groups
        .iter()
        .filter(|g| !g.values.is_empty())
        .map(|g| {
            let mut counts = vec![0usize; bins];
            for &v in &g.values {
                // The top edge belongs to the last bin
                let idx = (((v - lo) / width) as usize).min(bins - 1);
                counts[idx] += 1;
            }
            let scale = 1.0 / (g.values.len() as f64 * width);
            Group {
                label: g.label.clone(),
                values: counts.into_iter().map(|c| c as f64 * scale).collect(),
            }
        })
        .collect();

    Ok(DensityOverlay { edges, series })
}
