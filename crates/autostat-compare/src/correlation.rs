//! Pearson correlation and correlation matrices
//!
//! Columns may contain missing observations (`None`). Each pair of columns is
//! correlated over the rows where both values are present. NaN and infinite
//! values count as missing.

use autostat_core::{Error, Result};
use serde::Serialize;

/// Symmetric matrix of Pearson coefficients indexed by column name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Column names in row/column order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row-major coefficients
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Coefficient for a pair of columns
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Calculate the Pearson correlation coefficient of two equal-length samples
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "paired samples"));
    }

    if x.len() < 2 {
        return Err(Error::too_small(2, x.len()));
    }

    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(Error::non_finite("paired samples"));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();

    if denominator == 0.0 {
        return Err(Error::InsufficientVariance(
            "paired sample".to_string(),
        ));
    }

    Ok((numerator / denominator).clamp(-1.0, 1.0))
}

fn finite(v: &Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Keep the rows where both observations are present and finite
pub fn pairwise_complete(x: &[Option<f64>], y: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y)
        .filter_map(|(a, b)| Some((finite(a)?, finite(b)?)))
        .unzip()
}

/// Build the correlation matrix of named columns
///
/// Fails with [`Error::InsufficientVariance`] naming the first column whose
/// present values are all equal.
pub fn correlation_matrix(columns: &[(&str, &[Option<f64>])]) -> Result<CorrelationMatrix> {
    let Some((_, first)) = columns.first() else {
        return Err(Error::InvalidInput("No columns to correlate".to_string()));
    };

    for (name, values) in columns {
        if values.len() != first.len() {
            return Err(Error::size_mismatch(first.len(), values.len(), name));
        }
        let mut present = values.iter().filter_map(finite);
        if let Some(head) = present.next() {
            if present.all(|v| v == head) {
                return Err(Error::InsufficientVariance(name.to_string()));
            }
        }
    }

    let n = columns.len();
    let mut values = vec![vec![1.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let (x, y) = pairwise_complete(columns[i].1, columns[j].1);
            let r = pearson_correlation(&x, &y).map_err(|e| match e {
                Error::InsufficientVariance(_) => Error::InsufficientVariance(format!(
                    "{} x {} over complete rows",
                    columns[i].0, columns[j].0
                )),
                other => other,
            })?;
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    })
}
