//! Extension trait exposing the analysis operations on Polars DataFrames

use crate::methods::{aggregate, compare, derive, inspect, rank, summary};
use crate::{
    FrequencyTable, HighPowerFilter, MetricSpec, Result, SchemaReport, TierThresholds,
    TwoSampleResult,
};
use autostat_compare::{CorrelationMatrix, TTestMethod};
use autostat_core::NumericSummary;
use polars::prelude::*;

/// Analysis operations over an automobile table
///
/// Every method leaves `self` untouched and returns a new value.
pub trait CarFrameExt {
    /// Column names, types and row count
    fn describe_schema(&self) -> SchemaReport;

    /// First `n` rows; all rows if `n` exceeds the row count
    fn sample(&self, n: usize) -> DataFrame;

    /// Count/mean/median/std/min/max per numeric column, in request order
    ///
    /// # Errors
    /// `ColumnNotFound` if a column is absent or not numeric.
    fn numeric_summary(&self, columns: &[&str]) -> Result<Vec<NumericSummary>>;

    /// Category counts per column, categories in order of first occurrence
    fn frequency(&self, columns: &[&str]) -> Result<Vec<FrequencyTable>>;

    /// Rows with `Origin = "USA"` and `Horsepower > 200`
    fn filter_us_high_hp(&self) -> Result<DataFrame> {
        self.filter_high_power(&HighPowerFilter::default())
    }

    /// Rows matching the filter's origin with Horsepower above its floor
    fn filter_high_power(&self, filter: &HighPowerFilter) -> Result<DataFrame>;

    /// Adds `Power_to_Weight = Horsepower / Weight`, missing where Weight is 0
    fn add_power_to_weight(&self) -> Result<DataFrame>;

    /// Adds `Efficiency_Rating = (MPG_City + MPG_Highway) / 2`
    fn add_efficiency_rating(&self) -> Result<DataFrame>;

    /// Adds `HP_Tier` using the default 400/300 thresholds
    fn add_hp_tier(&self) -> Result<DataFrame> {
        self.add_hp_tier_with(&TierThresholds::default())
    }

    /// Adds `HP_Tier` using custom thresholds
    fn add_hp_tier_with(&self, tiers: &TierThresholds) -> Result<DataFrame>;

    /// Filter then add Power_to_Weight, Efficiency_Rating and HP_Tier, in that order
    fn derive_all(&self, filter: &HighPowerFilter, tiers: &TierThresholds) -> Result<DataFrame>;

    /// Adds `Origin_US`: "USA" or "Non-USA" for every row
    fn binary_origin_label(&self) -> Result<DataFrame>;

    /// Compare the two groups of `group_column` on each value column
    ///
    /// # Errors
    /// `InvalidGroupCardinality` unless the group column has exactly two
    /// distinct non-missing values.
    fn two_sample_test(
        &self,
        group_column: &str,
        value_columns: &[&str],
        method: TTestMethod,
    ) -> Result<Vec<TwoSampleResult>>;

    /// Pearson correlation of every pair of columns
    ///
    /// # Errors
    /// `InsufficientVariance` if a column is constant.
    fn correlation_matrix(&self, columns: &[&str]) -> Result<CorrelationMatrix>;

    /// One row per distinct value of `group_column` with the requested metrics
    fn group_aggregate(&self, group_column: &str, metrics: &[MetricSpec]) -> Result<DataFrame>;

    /// Stable sort on one column, missing values last
    fn sort_by(&self, column: &str, descending: bool) -> Result<DataFrame>;

    /// First `n` rows of an already sorted table
    fn top_n(&self, n: usize) -> DataFrame;
}

impl CarFrameExt for DataFrame {
    fn describe_schema(&self) -> SchemaReport {
        inspect::describe_schema(self)
    }

    fn sample(&self, n: usize) -> DataFrame {
        inspect::sample(self, n)
    }

    fn numeric_summary(&self, columns: &[&str]) -> Result<Vec<NumericSummary>> {
        summary::numeric_summary(self, columns)
    }

    fn frequency(&self, columns: &[&str]) -> Result<Vec<FrequencyTable>> {
        summary::frequency(self, columns)
    }

    fn filter_high_power(&self, filter: &HighPowerFilter) -> Result<DataFrame> {
        derive::filter_high_power(self, filter)
    }

    fn add_power_to_weight(&self) -> Result<DataFrame> {
        derive::add_power_to_weight(self)
    }

    fn add_efficiency_rating(&self) -> Result<DataFrame> {
        derive::add_efficiency_rating(self)
    }

    fn add_hp_tier_with(&self, tiers: &TierThresholds) -> Result<DataFrame> {
        derive::add_hp_tier(self, tiers)
    }

    fn derive_all(&self, filter: &HighPowerFilter, tiers: &TierThresholds) -> Result<DataFrame> {
        derive::derive_all(self, filter, tiers)
    }

    fn binary_origin_label(&self) -> Result<DataFrame> {
        compare::binary_origin_label(self)
    }

    fn two_sample_test(
        &self,
        group_column: &str,
        value_columns: &[&str],
        method: TTestMethod,
    ) -> Result<Vec<TwoSampleResult>> {
        compare::two_sample_test(self, group_column, value_columns, method)
    }

    fn correlation_matrix(&self, columns: &[&str]) -> Result<CorrelationMatrix> {
        compare::correlation_matrix(self, columns)
    }

    fn group_aggregate(&self, group_column: &str, metrics: &[MetricSpec]) -> Result<DataFrame> {
        aggregate::group_aggregate(self, group_column, metrics)
    }

    fn sort_by(&self, column: &str, descending: bool) -> Result<DataFrame> {
        rank::sort_by(self, column, descending)
    }

    fn top_n(&self, n: usize) -> DataFrame {
        rank::top_n(self, n)
    }
}
