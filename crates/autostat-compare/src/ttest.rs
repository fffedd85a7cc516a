//! Two-sample t-tests
//!
//! Compares the means of two independent samples. The pooled (Student)
//! variant assumes equal variances; the Welch variant does not and uses the
//! Welch-Satterthwaite approximation for the degrees of freedom.

use autostat_core::{mean, sample_variance, Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Variance assumption used by [`TwoSampleTest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TTestMethod {
    /// Pooled variance, n1 + n2 - 2 degrees of freedom
    Student,
    /// Separate variances, Welch-Satterthwaite degrees of freedom
    #[default]
    Welch,
}

impl TTestMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Welch => "Welch",
        }
    }
}

/// Outcome of a two-sample comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TTestOutcome {
    pub mean1: f64,
    pub mean2: f64,
    pub n1: usize,
    pub n2: usize,
    /// `mean1 - mean2`
    pub mean_difference: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Cohen's d using the pooled standard deviation, `None` if it is zero
    pub cohen_d: Option<f64>,
}

/// Two-sample t-test estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSampleTest {
    method: TTestMethod,
}

impl TwoSampleTest {
    /// Create a test with Welch's correction, same as `default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pooled-variance test
    pub fn student() -> Self {
        Self::with_method(TTestMethod::Student)
    }

    /// Create a test using the given variance assumption
    pub fn with_method(method: TTestMethod) -> Self {
        Self { method }
    }

    /// Switch to Welch's correction for unequal variances
    pub fn with_welch_correction(mut self) -> Self {
        self.method = TTestMethod::Welch;
        self
    }

    pub fn method(&self) -> TTestMethod {
        self.method
    }

    /// Compare `group1` against `group2`
    pub fn compute(&self, group1: &[f64], group2: &[f64]) -> Result<TTestOutcome> {
        for group in [group1, group2] {
            if group.len() < 2 {
                return Err(Error::too_small(2, group.len()));
            }
            if group.iter().any(|v| !v.is_finite()) {
                return Err(Error::non_finite("group sample"));
            }
        }

        let n1 = group1.len() as f64;
        let n2 = group2.len() as f64;
        let mean1 = mean(group1)?;
        let mean2 = mean(group2)?;
        let var1 = sample_variance(group1)?;
        let var2 = sample_variance(group2)?;

        let pooled_variance = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);

        let (std_error, df) = match self.method {
            TTestMethod::Student => (
                (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt(),
                n1 + n2 - 2.0,
            ),
            TTestMethod::Welch => {
                let a = var1 / n1;
                let b = var2 / n2;
                let df = (a + b).powi(2) / (a * a / (n1 - 1.0) + b * b / (n2 - 1.0));
                ((a + b).sqrt(), df)
            }
        };

        if std_error <= 0.0 || !df.is_finite() {
            return Err(Error::InsufficientVariance("both groups".to_string()));
        }

        let mean_difference = mean1 - mean2;
        let t_statistic = mean_difference / std_error;

        let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        let p_value = (2.0 * (1.0 - t_dist.cdf(t_statistic.abs()))).clamp(0.0, 1.0);

        let pooled_std = pooled_variance.sqrt();
        let cohen_d = (pooled_std > 0.0).then(|| mean_difference / pooled_std);

        Ok(TTestOutcome {
            mean1,
            mean2,
            n1: group1.len(),
            n2: group2.len(),
            mean_difference,
            t_statistic,
            degrees_of_freedom: df,
            p_value,
            cohen_d,
        })
    }
}
