//! Core types for autostat
//!
//! Slice-level building blocks shared by the comparison and table crates:
//! the common [`Error`] type and descriptive statistics over samples whose
//! missing values have already been dropped.
//!
//! # Example
//!
//! ```rust
//! use autostat_core::NumericSummary;
//!
//! let summary = NumericSummary::from_values("Horsepower", &[200.0, 300.0, 400.0]).unwrap();
//! assert_eq!(summary.count, 3);
//! assert_eq!(summary.median, Some(300.0));
//! ```

pub mod descriptive;
pub mod error;

pub use descriptive::{mean, median, sample_std, sample_variance, NumericSummary};
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
