//! Column names and the typed row of the automobile dataset

use polars::prelude::DataType;
use serde::{Deserialize, Serialize};

pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const TYPE: &str = "Type";
pub const ORIGIN: &str = "Origin";
pub const HORSEPOWER: &str = "Horsepower";
pub const WEIGHT: &str = "Weight";
pub const MPG_CITY: &str = "MPG_City";
pub const MPG_HIGHWAY: &str = "MPG_Highway";

// Derived columns
pub const POWER_TO_WEIGHT: &str = "Power_to_Weight";
pub const EFFICIENCY_RATING: &str = "Efficiency_Rating";
pub const HP_TIER: &str = "HP_Tier";
pub const ORIGIN_US: &str = "Origin_US";

/// Columns every source must provide, in table order
pub const RAW_COLUMNS: [&str; 8] = [
    MAKE,
    MODEL,
    TYPE,
    ORIGIN,
    HORSEPOWER,
    WEIGHT,
    MPG_CITY,
    MPG_HIGHWAY,
];

pub const NUMERIC_COLUMNS: [&str; 4] = [HORSEPOWER, WEIGHT, MPG_CITY, MPG_HIGHWAY];

pub const CATEGORICAL_COLUMNS: [&str; 2] = [TYPE, ORIGIN];

/// How a column is treated by the summarizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SemanticType {
    Numeric,
    Categorical,
    Other,
}

impl SemanticType {
    pub fn from_dtype(dtype: &DataType) -> Self {
        if is_numeric(dtype) {
            Self::Numeric
        } else if matches!(dtype, DataType::String | DataType::Boolean) {
            Self::Categorical
        } else {
            Self::Other
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Other => "other",
        }
    }
}

/// Numeric dtypes accepted wherever a numeric column is required
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::UInt64
            | DataType::UInt32
    )
}

/// One vehicle observation as read from a source
///
/// Empty or unparseable numeric cells load as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Type")]
    pub car_type: Option<String>,
    #[serde(rename = "Origin")]
    pub origin: Option<String>,
    #[serde(rename = "Horsepower", deserialize_with = "csv::invalid_option")]
    pub horsepower: Option<f64>,
    #[serde(rename = "Weight", deserialize_with = "csv::invalid_option")]
    pub weight: Option<f64>,
    #[serde(rename = "MPG_City", deserialize_with = "csv::invalid_option")]
    pub mpg_city: Option<f64>,
    #[serde(rename = "MPG_Highway", deserialize_with = "csv::invalid_option")]
    pub mpg_highway: Option<f64>,
}
