//! Text rendering of tables

use crate::Result;
use polars::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// A table with every cell already formatted as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Format every cell of `df`; floats get `precision` decimals, missing
    /// values render as empty cells
    pub fn from_frame(df: &DataFrame, precision: usize) -> Result<Self> {
        let headers = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let columns = df.get_columns();
        let mut rows = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let row = columns
                .iter()
                .map(|column| -> Result<String> { Ok(format_cell(&column.get(i)?, precision)) })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Write header and rows as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn format_cell(value: &AnyValue, precision: usize) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format!("{v:.precision$}"),
        AnyValue::Float32(v) => format!("{v:.precision$}"),
        other => other.to_string(),
    }
}

/// Write a table to a CSV file
pub fn write_csv(table: &TableView, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    table.write_csv(file)
}
