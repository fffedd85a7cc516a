//! Descriptive statistics over samples with missing values already removed
//!
//! All functions take the non-missing observations of a single column. An
//! undefined statistic (mean of nothing, spread of one value) is reported as
//! `None` rather than `NaN` so callers can render it as missing.

use crate::{Error, Result};
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};

/// Count/mean/median/std/min/max of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Column the summary was computed from
    pub column: String,
    /// Number of non-missing values
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (n - 1 denominator)
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    /// Summarize `values`, the non-missing observations of `column`
    pub fn from_values(column: impl Into<String>, values: &[f64]) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("summary input"));
        }

        let column = column.into();
        if values.is_empty() {
            return Ok(Self {
                column,
                count: 0,
                mean: None,
                median: None,
                std: None,
                min: None,
                max: None,
            });
        }

        Ok(Self {
            column,
            count: values.len(),
            mean: Some(mean(values)?),
            median: Some(median(values)?),
            std: sample_std(values).ok(),
            min: Some(Statistics::min(values.iter())),
            max: Some(Statistics::max(values.iter())),
        })
    }
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::too_small(1, 0));
    }
    Ok(values.iter().mean())
}

/// Median (average of the two central values for even-length samples)
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::too_small(1, 0));
    }
    Ok(Data::new(values.to_vec()).median())
}

/// Unbiased sample variance
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(Error::too_small(2, values.len()));
    }
    Ok(values.iter().variance())
}

/// Sample standard deviation
pub fn sample_std(values: &[f64]) -> Result<f64> {
    sample_variance(values).map(f64::sqrt)
}
