//! Error types for chart rendering

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while preparing or drawing a chart
#[derive(Error, Debug)]
pub enum Error {
    /// Column absent from the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Nothing drawable after dropping missing values
    #[error("No data to plot: {0}")]
    Data(String),

    /// Invalid chart option
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// The drawing backend failed
    #[error("Render error: {0}")]
    Render(String),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}
