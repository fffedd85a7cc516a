//! Polars table layer for the automobile analysis pipeline
//!
//! Loads the dataset into a [`DataFrame`](polars::prelude::DataFrame) and
//! exposes every analysis step through a single extension trait,
//! [`CarFrameExt`]. Operations never mutate their input.
//!
//! # Example
//!
//! ```rust,ignore
//! use autostat_polars::{load, CarFrameExt, HighPowerFilter, TierThresholds, BUNDLED_CARS};
//! use autostat_polars::schema::POWER_TO_WEIGHT;
//!
//! let cars = load(BUNDLED_CARS)?;
//! let derived = cars.derive_all(&HighPowerFilter::default(), &TierThresholds::default())?;
//! let top = derived.sort_by(POWER_TO_WEIGHT, true)?.top_n(10);
//! ```

mod config;
mod error;
mod methods;
pub mod schema;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use traits::*;

pub use methods::aggregate::summary_by_type_metrics;
pub use methods::compare::{
    comparisons_to_frame, correlation_to_frame, GroupMean, TwoSampleResult, NON_USA, USA,
};
pub use methods::inspect::{ColumnInfo, SchemaReport};
pub use methods::loader::{load, load_reader, records_to_frame, BUNDLED_CARS};
pub use methods::summary::{summaries_to_frame, CategoryCount, FrequencyTable};

// Re-export the statistics types that appear in this crate's API
pub use autostat_compare::{CorrelationMatrix, TTestMethod};
pub use autostat_core::NumericSummary;
