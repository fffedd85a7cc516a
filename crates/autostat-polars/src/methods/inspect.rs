//! Structural inspection: schema report and row samples

use crate::schema::SemanticType;
use crate::Result;
use polars::prelude::*;
use serde::Serialize;

/// Name, type and missing-value count of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Storage type as reported by polars (e.g. `f64`, `str`)
    pub dtype: String,
    pub semantic_type: SemanticType,
    pub null_count: usize,
}

/// Schema of a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaReport {
    pub columns: Vec<ColumnInfo>,
    pub row_count: usize,
}

impl SchemaReport {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// One row per column: Column, Type, Semantic, Missing
    pub fn to_frame(&self) -> Result<DataFrame> {
        let df = df![
            "Column" => self.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "Type" => self.columns.iter().map(|c| c.dtype.as_str()).collect::<Vec<_>>(),
            "Semantic" => self.columns.iter().map(|c| c.semantic_type.name()).collect::<Vec<_>>(),
            "Missing" => self.columns.iter().map(|c| c.null_count as u64).collect::<Vec<_>>(),
        ]?;
        Ok(df)
    }
}

pub(crate) fn describe_schema(df: &DataFrame) -> SchemaReport {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| ColumnInfo {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
            semantic_type: SemanticType::from_dtype(column.dtype()),
            null_count: column.null_count(),
        })
        .collect();

    SchemaReport {
        columns,
        row_count: df.height(),
    }
}

pub(crate) fn sample(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}
