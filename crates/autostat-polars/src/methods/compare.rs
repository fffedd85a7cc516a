//! Origin labelling, two-group comparisons and correlation

use super::columns::{category_values, numeric_values, require_categorical};
use crate::schema::{ORIGIN, ORIGIN_US};
use crate::{Error, Result};
use autostat_compare::{CorrelationMatrix, TTestMethod, TwoSampleTest};
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

pub const USA: &str = "USA";
pub const NON_USA: &str = "Non-USA";

/// Size and mean of one group in a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub label: String,
    pub n: usize,
    pub mean: f64,
}

/// Two-group comparison of one value column
///
/// Groups are ordered lexically by label; `mean_difference` and the t
/// statistic are first group minus second group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoSampleResult {
    pub column: String,
    pub method: TTestMethod,
    pub group_means: [GroupMean; 2],
    pub mean_difference: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohen_d: Option<f64>,
}

pub(crate) fn binary_origin_label(df: &DataFrame) -> Result<DataFrame> {
    require_categorical(df, ORIGIN)?;

    // A missing origin is not USA
    let label = when(col(ORIGIN).eq(lit(USA)))
        .then(lit(USA))
        .otherwise(lit(NON_USA))
        .alias(ORIGIN_US);

    Ok(df.clone().lazy().with_column(label).collect()?)
}

pub(crate) fn two_sample_test(
    df: &DataFrame,
    group_column: &str,
    value_columns: &[&str],
    method: TTestMethod,
) -> Result<Vec<TwoSampleResult>> {
    let labels = category_values(df, group_column)?;
    let distinct: BTreeSet<&str> = labels.iter().flatten().map(String::as_str).collect();
    if distinct.len() != 2 {
        return Err(Error::InvalidGroupCardinality {
            column: group_column.to_string(),
            found: distinct.len(),
        });
    }
    let groups: Vec<&str> = distinct.into_iter().collect();
    let test = TwoSampleTest::with_method(method);

    value_columns
        .iter()
        .map(|&name| -> Result<TwoSampleResult> {
            let values = numeric_values(df, name)?;

            let mut first = Vec::new();
            let mut second = Vec::new();
            for (label, value) in labels.iter().zip(values) {
                match (label.as_deref(), value) {
                    (Some(l), Some(v)) if l == groups[0] => first.push(v),
                    (Some(_), Some(v)) => second.push(v),
                    _ => {}
                }
            }

            let outcome = test.compute(&first, &second)?;
            debug!(
                column = name,
                t = outcome.t_statistic,
                p = outcome.p_value,
                "two sample test"
            );

            Ok(TwoSampleResult {
                column: name.to_string(),
                method,
                group_means: [
                    GroupMean {
                        label: groups[0].to_string(),
                        n: outcome.n1,
                        mean: outcome.mean1,
                    },
                    GroupMean {
                        label: groups[1].to_string(),
                        n: outcome.n2,
                        mean: outcome.mean2,
                    },
                ],
                mean_difference: outcome.mean_difference,
                t_statistic: outcome.t_statistic,
                degrees_of_freedom: outcome.degrees_of_freedom,
                p_value: outcome.p_value,
                cohen_d: outcome.cohen_d,
            })
        })
        .collect()
}

/// One row per value column with group means, t, df, p and Cohen's d
pub fn comparisons_to_frame(results: &[TwoSampleResult]) -> Result<DataFrame> {
    let label = |i: usize| {
        results
            .first()
            .map_or_else(|| format!("Group {}", i + 1), |r| r.group_means[i].label.clone())
    };
    let mean_a = format!("Mean ({})", label(0));
    let mean_b = format!("Mean ({})", label(1));

    let df = df![
        "Column" => results.iter().map(|r| r.column.as_str()).collect::<Vec<_>>(),
        mean_a.as_str() => results.iter().map(|r| r.group_means[0].mean).collect::<Vec<_>>(),
        mean_b.as_str() => results.iter().map(|r| r.group_means[1].mean).collect::<Vec<_>>(),
        "Difference" => results.iter().map(|r| r.mean_difference).collect::<Vec<_>>(),
        "t" => results.iter().map(|r| r.t_statistic).collect::<Vec<_>>(),
        "df" => results.iter().map(|r| r.degrees_of_freedom).collect::<Vec<_>>(),
        "p-value" => results.iter().map(|r| r.p_value).collect::<Vec<_>>(),
        "Cohen's d" => results.iter().map(|r| r.cohen_d).collect::<Vec<_>>(),
    ]?;
    Ok(df)
}

pub(crate) fn correlation_matrix(df: &DataFrame, columns: &[&str]) -> Result<CorrelationMatrix> {
    let values = columns
        .iter()
        .map(|&name| numeric_values(df, name))
        .collect::<Result<Vec<_>>>()?;
    let named: Vec<(&str, &[Option<f64>])> = columns
        .iter()
        .zip(&values)
        .map(|(&name, column)| (name, column.as_slice()))
        .collect();

    Ok(autostat_compare::correlation_matrix(&named)?)
}

/// Square table with a leading Variable column
pub fn correlation_to_frame(matrix: &CorrelationMatrix) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(matrix.len() + 1);
    columns.push(Column::new(
        "Variable".into(),
        matrix.columns().iter().map(String::as_str).collect::<Vec<_>>(),
    ));
    for (j, name) in matrix.columns().iter().enumerate() {
        let values: Vec<f64> = matrix.values().iter().map(|row| row[j]).collect();
        columns.push(Column::new(name.as_str().into(), values));
    }
    Ok(DataFrame::new(columns)?)
}
