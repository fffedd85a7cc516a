//! Column lookup and extraction shared by the table operations

use crate::schema::is_numeric;
use crate::{Error, Result};
use polars::prelude::*;

pub(crate) fn require<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| Error::missing_column(name))
}

pub(crate) fn require_numeric<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    let column = require(df, name)?;
    if !is_numeric(column.dtype()) {
        return Err(Error::not_numeric(name, column.dtype()));
    }
    Ok(column)
}

pub(crate) fn require_categorical<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    let column = require(df, name)?;
    if !matches!(column.dtype(), DataType::String) {
        return Err(Error::not_categorical(name, column.dtype()));
    }
    Ok(column)
}

/// Values of a numeric column as `f64`, missing values as `None`
pub(crate) fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require_numeric(df, name)?;
    let float_column = column.cast(&DataType::Float64)?;
    Ok(float_column.f64()?.into_iter().collect())
}

/// Values of a categorical column, missing values as `None`
pub(crate) fn category_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_categorical(df, name)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}
