//! Error types for autostat-polars

use polars::prelude::DataType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The dataset identifier names neither a bundled dataset nor a readable file
    #[error("Source unavailable: {identifier}: {reason}")]
    SourceUnavailable { identifier: String, reason: String },

    /// A required column is absent or has the wrong kind of values
    #[error("Column not found: {column} ({reason})")]
    ColumnNotFound { column: String, reason: String },

    /// A two-group comparison was asked of a column without exactly two groups
    #[error("Invalid group cardinality: {column} has {found} distinct values, expected 2")]
    InvalidGroupCardinality { column: String, found: usize },

    #[error("Insufficient variance: {0} is constant")]
    InsufficientVariance(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Statistics error: {0}")]
    Stats(autostat_core::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<autostat_core::Error> for Error {
    fn from(err: autostat_core::Error) -> Self {
        match err {
            autostat_core::Error::InsufficientVariance(what) => Self::InsufficientVariance(what),
            other => Self::Stats(other),
        }
    }
}

impl Error {
    /// Create an error for a column absent from the table
    pub fn missing_column(column: &str) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
            reason: "absent".to_string(),
        }
    }

    /// Create an error for a column that exists but is not numeric
    pub fn not_numeric(column: &str, dtype: &DataType) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
            reason: format!("expected a numeric column, found {dtype}"),
        }
    }

    /// Create an error for a column that exists but is not categorical
    pub fn not_categorical(column: &str, dtype: &DataType) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
            reason: format!("expected a categorical column, found {dtype}"),
        }
    }

    /// Whether the error invalidates the whole run rather than one analysis
    ///
    /// Missing sources and columns, malformed input and table-engine failures
    /// are structural; statistical precondition failures are not.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. }
                | Self::ColumnNotFound { .. }
                | Self::InvalidParameter(_)
                | Self::Polars(_)
                | Self::Csv(_)
        )
    }
}
