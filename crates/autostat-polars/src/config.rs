//! Configuration types for the derivation pipeline and aggregator

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Row filter keeping one origin above a horsepower floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighPowerFilter {
    /// Origin value a row must match exactly
    pub origin: String,
    /// Exclusive lower bound on Horsepower
    pub min_horsepower: f64,
}

impl Default for HighPowerFilter {
    fn default() -> Self {
        Self {
            origin: "USA".to_string(),
            min_horsepower: 200.0,
        }
    }
}

/// Horsepower tier assigned by [`TierThresholds::classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HpTier {
    High,
    Medium,
    Low,
}

impl HpTier {
    pub const ALL: [HpTier; 3] = [HpTier::High, HpTier::Medium, HpTier::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Lower bounds (inclusive) of the High and Medium horsepower tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 400.0,
            medium: 300.0,
        }
    }
}

impl TierThresholds {
    pub fn validate(&self) -> Result<()> {
        if !(self.high.is_finite() && self.medium.is_finite()) || self.high <= self.medium {
            return Err(Error::InvalidParameter(format!(
                "tier thresholds must satisfy medium < high, got medium={} high={}",
                self.medium, self.high
            )));
        }
        Ok(())
    }

    /// Tier of a single horsepower value; High is tested first
    pub fn classify(&self, horsepower: f64) -> HpTier {
        if horsepower >= self.high {
            HpTier::High
        } else if horsepower >= self.medium {
            HpTier::Medium
        } else {
            HpTier::Low
        }
    }
}

/// Aggregate applied per group by `group_aggregate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFn {
    /// Rows in the group
    Count,
    /// Mean of the non-missing values in the group
    Mean,
}

/// One output column of a grouped aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub output: String,
    pub source: String,
    pub function: AggregateFn,
}

impl MetricSpec {
    pub fn count(output: &str, source: &str) -> Self {
        Self {
            output: output.to_string(),
            source: source.to_string(),
            function: AggregateFn::Count,
        }
    }

    pub fn mean(output: &str, source: &str) -> Self {
        Self {
            output: output.to_string(),
            source: source.to_string(),
            function: AggregateFn::Mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers_boundaries() {
        let tiers = TierThresholds::default();
        assert_eq!(tiers.classify(400.0), HpTier::High);
        assert_eq!(tiers.classify(399.999), HpTier::Medium);
        assert_eq!(tiers.classify(300.0), HpTier::Medium);
        assert_eq!(tiers.classify(299.0), HpTier::Low);
        assert_eq!(tiers.classify(0.0), HpTier::Low);
    }

    #[test]
    fn test_invalid_tiers_rejected() {
        let tiers = TierThresholds {
            high: 300.0,
            medium: 300.0,
        };
        assert!(matches!(tiers.validate(), Err(Error::InvalidParameter(_))));
        assert!(TierThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_metric_constructors() {
        let metric = MetricSpec::mean("Avg_HP", "Horsepower");
        assert_eq!(metric.function, AggregateFn::Mean);
        assert_eq!(metric.source, "Horsepower");
        assert_eq!(MetricSpec::count("Num_Cars", "Model").function, AggregateFn::Count);
    }
}
