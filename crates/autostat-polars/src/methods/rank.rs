//! Sorting and top-N slices

use super::columns::require;
use crate::Result;
use polars::prelude::*;

pub(crate) fn sort_by(df: &DataFrame, column: &str, descending: bool) -> Result<DataFrame> {
    require(df, column)?;

    // Stable, with missing values last in either direction
    let options = SortMultipleOptions::default()
        .with_order_descending(descending)
        .with_nulls_last(true)
        .with_maintain_order(true);

    Ok(df.sort([column], options)?)
}

pub(crate) fn top_n(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}
