//! Comparative statistics for autostat
//!
//! Slice-level comparisons used by the table layer:
//!
//! - **Two-sample t-test** (pooled Student or Welch) with Cohen's d
//! - **Pearson correlation**, pairwise-complete correlation matrices
//!
//! # Example
//!
//! ```rust
//! use autostat_compare::TwoSampleTest;
//!
//! let usa = [300.0, 350.0, 400.0, 310.0];
//! let non_usa = [180.0, 210.0, 240.0, 200.0];
//!
//! let outcome = TwoSampleTest::new().compute(&usa, &non_usa).unwrap();
//! assert!(outcome.t_statistic > 0.0);
//! ```

mod correlation;
mod ttest;

pub use correlation::{correlation_matrix, pairwise_complete, pearson_correlation, CorrelationMatrix};
pub use ttest::{TTestMethod, TTestOutcome, TwoSampleTest};

pub use autostat_core::{Error, Result};
