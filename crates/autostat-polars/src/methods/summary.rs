//! Descriptive summaries of numeric and categorical columns

use super::columns::{numeric_values, require};
use crate::Result;
use autostat_core::NumericSummary;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Number of rows holding one category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// `None` counts the missing values of the column
    pub value: Option<String>,
    pub count: usize,
}

/// Category counts of one column, in order of first occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub column: String,
    pub entries: Vec<CategoryCount>,
}

impl FrequencyTable {
    /// Sum of all counts; equals the row count of the summarized table
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn count_of(&self, value: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.value.as_deref() == Some(value))
            .map_or(0, |e| e.count)
    }

    pub fn missing(&self) -> usize {
        self.entries
            .iter()
            .find(|e| e.value.is_none())
            .map_or(0, |e| e.count)
    }

    /// Columns `column`, Count
    pub fn to_frame(&self) -> Result<DataFrame> {
        let df = df![
            self.column.as_str() => self.entries.iter().map(|e| e.value.as_deref()).collect::<Vec<_>>(),
            "Count" => self.entries.iter().map(|e| e.count as u64).collect::<Vec<_>>(),
        ]?;
        Ok(df)
    }
}

pub(crate) fn numeric_summary(df: &DataFrame, columns: &[&str]) -> Result<Vec<NumericSummary>> {
    columns
        .iter()
        .map(|&name| -> Result<NumericSummary> {
            let present: Vec<f64> = numeric_values(df, name)?.into_iter().flatten().collect();
            Ok(NumericSummary::from_values(name, &present)?)
        })
        .collect()
}

/// One row per summary: Column, Count, Mean, Median, Std, Min, Max
pub fn summaries_to_frame(summaries: &[NumericSummary]) -> Result<DataFrame> {
    let df = df![
        "Column" => summaries.iter().map(|s| s.column.as_str()).collect::<Vec<_>>(),
        "Count" => summaries.iter().map(|s| s.count as u64).collect::<Vec<_>>(),
        "Mean" => summaries.iter().map(|s| s.mean).collect::<Vec<_>>(),
        "Median" => summaries.iter().map(|s| s.median).collect::<Vec<_>>(),
        "Std" => summaries.iter().map(|s| s.std).collect::<Vec<_>>(),
        "Min" => summaries.iter().map(|s| s.min).collect::<Vec<_>>(),
        "Max" => summaries.iter().map(|s| s.max).collect::<Vec<_>>(),
    ]?;
    Ok(df)
}

pub(crate) fn frequency(df: &DataFrame, columns: &[&str]) -> Result<Vec<FrequencyTable>> {
    columns
        .iter()
        .map(|&name| -> Result<FrequencyTable> {
            // Non-string columns are tabulated by their text rendering
            let as_text = require(df, name)?.cast(&DataType::String)?;
            let values: Vec<Option<String>> = as_text
                .str()?
                .into_iter()
                .map(|v| v.map(str::to_string))
                .collect();

            let mut positions: HashMap<Option<String>, usize> = HashMap::new();
            let mut entries: Vec<CategoryCount> = Vec::new();
            for value in values {
                match positions.get(&value) {
                    Some(&idx) => entries[idx].count += 1,
                    None => {
                        positions.insert(value.clone(), entries.len());
                        entries.push(CategoryCount { value, count: 1 });
                    }
                }
            }

            Ok(FrequencyTable {
                column: name.to_string(),
                entries,
            })
        })
        .collect()
}
