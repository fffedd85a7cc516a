//! Grouped aggregation

use super::columns::{require, require_numeric};
use crate::config::{AggregateFn, MetricSpec};
use crate::schema::*;
use crate::Result;
use polars::prelude::*;
use tracing::debug;

/// Num_Cars, Avg_HP, Avg_Weight and Avg_Efficiency per group
pub fn summary_by_type_metrics() -> Vec<MetricSpec> {
    vec![
        MetricSpec::count("Num_Cars", MODEL),
        MetricSpec::mean("Avg_HP", HORSEPOWER),
        MetricSpec::mean("Avg_Weight", WEIGHT),
        MetricSpec::mean("Avg_Efficiency", EFFICIENCY_RATING),
    ]
}

pub(crate) fn group_aggregate(
    df: &DataFrame,
    group_column: &str,
    metrics: &[MetricSpec],
) -> Result<DataFrame> {
    require(df, group_column)?;
    for metric in metrics {
        match metric.function {
            AggregateFn::Count => require(df, &metric.source)?,
            AggregateFn::Mean => require_numeric(df, &metric.source)?,
        };
    }

    let aggregations: Vec<Expr> = metrics
        .iter()
        .map(|metric| match metric.function {
            AggregateFn::Count => len().cast(DataType::Int64).alias(metric.output.as_str()),
            AggregateFn::Mean => col(metric.source.as_str())
                .cast(DataType::Float64)
                .mean()
                .alias(metric.output.as_str()),
        })
        .collect();

    // Stable grouping keeps groups in order of first appearance
    let summary = df
        .clone()
        .lazy()
        .group_by_stable([col(group_column)])
        .agg(aggregations)
        .collect()?;

    debug!(
        group_column,
        input_rows = df.height(),
        groups = summary.height(),
        "grouped aggregation"
    );
    Ok(summary)
}
