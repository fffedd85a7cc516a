//! Filter and derivation pipeline
//!
//! Each step returns a new table with at most one added column. Missing
//! values propagate: a derived value is missing whenever an operand is
//! missing or the ratio is undefined.

use super::columns::{require_categorical, require_numeric};
use crate::config::{HighPowerFilter, HpTier, TierThresholds};
use crate::schema::*;
use crate::Result;
use polars::prelude::*;
use tracing::debug;

pub(crate) fn filter_high_power(df: &DataFrame, filter: &HighPowerFilter) -> Result<DataFrame> {
    require_categorical(df, ORIGIN)?;
    require_numeric(df, HORSEPOWER)?;

    let keep = col(ORIGIN)
        .eq(lit(filter.origin.clone()))
        .and(col(HORSEPOWER).gt(lit(filter.min_horsepower)));
    let filtered = df.clone().lazy().filter(keep).collect()?;

    debug!(
        origin = %filter.origin,
        min_horsepower = filter.min_horsepower,
        input_rows = df.height(),
        kept_rows = filtered.height(),
        "filtered high power rows"
    );
    Ok(filtered)
}

pub(crate) fn add_power_to_weight(df: &DataFrame) -> Result<DataFrame> {
    require_numeric(df, HORSEPOWER)?;
    require_numeric(df, WEIGHT)?;

    // Zero weight has no ratio
    let ratio = when(col(WEIGHT).eq(lit(0.0)))
        .then(lit(NULL).cast(DataType::Float64))
        .otherwise(col(HORSEPOWER).cast(DataType::Float64) / col(WEIGHT).cast(DataType::Float64))
        .alias(POWER_TO_WEIGHT);

    Ok(df.clone().lazy().with_column(ratio).collect()?)
}

pub(crate) fn add_efficiency_rating(df: &DataFrame) -> Result<DataFrame> {
    require_numeric(df, MPG_CITY)?;
    require_numeric(df, MPG_HIGHWAY)?;

    let rating = ((col(MPG_CITY).cast(DataType::Float64) + col(MPG_HIGHWAY).cast(DataType::Float64))
        / lit(2.0))
    .alias(EFFICIENCY_RATING);

    Ok(df.clone().lazy().with_column(rating).collect()?)
}

pub(crate) fn add_hp_tier(df: &DataFrame, tiers: &TierThresholds) -> Result<DataFrame> {
    tiers.validate()?;
    require_numeric(df, HORSEPOWER)?;

    // High is tested first; a missing Horsepower matches no branch
    let tier = when(col(HORSEPOWER).gt_eq(lit(tiers.high)))
        .then(lit(HpTier::High.label()))
        .when(col(HORSEPOWER).gt_eq(lit(tiers.medium)))
        .then(lit(HpTier::Medium.label()))
        .when(col(HORSEPOWER).lt(lit(tiers.medium)))
        .then(lit(HpTier::Low.label()))
        .otherwise(lit(NULL).cast(DataType::String))
        .alias(HP_TIER);

    Ok(df.clone().lazy().with_column(tier).collect()?)
}

pub(crate) fn derive_all(
    df: &DataFrame,
    filter: &HighPowerFilter,
    tiers: &TierThresholds,
) -> Result<DataFrame> {
    let filtered = filter_high_power(df, filter)?;
    let with_ratio = add_power_to_weight(&filtered)?;
    let with_rating = add_efficiency_rating(&with_ratio)?;
    add_hp_tier(&with_rating, tiers)
}
