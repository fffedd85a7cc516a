//! Exploratory and comparative analysis of automobile datasets
//!
//! This crate ties together the autostat workspace:
//!
//! - [`autostat_polars`]: loading, summaries, the filter and derivation
//!   pipeline, comparisons, aggregation and ranking over polars DataFrames
//! - [`autostat_viz`]: SVG charts
//! - [`autostat_report`]: HTML, PDF and CSV reports
//!
//! # Example
//!
//! ```rust,ignore
//! use autostat::{run, write_outputs, RunConfig};
//!
//! let config = RunConfig::default();
//! let analysis = run(&config)?;
//! let files = write_outputs(&analysis.report, &config.report)?;
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
mod error;

pub use analysis::{ranking_title, run, write_outputs, Analysis};
pub use config::{AnalysisConfig, DataConfig, ReportConfig, RunConfig};
pub use error::{Error, Result};

// Re-export the workspace crates
pub use autostat_compare as compare;
pub use autostat_core as stats;
pub use autostat_polars as table;
pub use autostat_report as report;
pub use autostat_viz as viz;

pub use autostat_polars::{CarFrameExt, HighPowerFilter, TTestMethod, TierThresholds};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
