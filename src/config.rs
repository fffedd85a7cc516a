//! Run configuration
//!
//! Every field has a default, so an empty TOML file (or none at all) runs the
//! standard analysis over the bundled dataset.

use crate::{Error, Result};
use autostat_polars::schema::*;
use autostat_polars::{HighPowerFilter, TTestMethod, TierThresholds, BUNDLED_CARS};
use autostat_report::PdfOptions;
use autostat_viz::ChartOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub data: DataConfig,
    pub filter: HighPowerFilter,
    pub tiers: TierThresholds,
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Bundled dataset name or CSV path
    pub source: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: BUNDLED_CARS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub ttest_method: TTestMethod,
    /// Value columns compared between US and non-US cars
    pub comparison_columns: Vec<String>,
    pub correlation_columns: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let numeric: Vec<String> = NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect();
        Self {
            ttest_method: TTestMethod::Welch,
            comparison_columns: numeric.clone(),
            correlation_columns: numeric,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub output_dir: PathBuf,
    /// Rows in the power-to-weight ranking
    pub top_n: usize,
    pub sample_rows: usize,
    /// Decimals shown for floating point cells
    pub precision: usize,
    pub html: bool,
    pub pdf: bool,
    /// Also export every table as CSV
    pub csv: bool,
    pub figures: bool,
    /// Searched before the default font directories
    pub font_dir: Option<PathBuf>,
    pub charts: ChartOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Automobile Dataset Analysis".to_string(),
            output_dir: PathBuf::from("output"),
            top_n: 10,
            sample_rows: 5,
            precision: 2,
            html: true,
            pdf: true,
            csv: false,
            figures: true,
            font_dir: None,
            charts: ChartOptions::default(),
        }
    }
}

impl ReportConfig {
    pub fn pdf_options(&self) -> PdfOptions {
        let mut options = PdfOptions::default();
        if let Some(dir) = &self.font_dir {
            options.font_dirs.insert(0, dir.clone());
        }
        options
    }
}

impl RunConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.tiers.validate()?;
        self.report
            .charts
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        if self.data.source.trim().is_empty() {
            return Err(Error::Config("data.source is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = RunConfig::from_toml("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.data.source, "cars");
        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.analysis.ttest_method, TTestMethod::Welch);
    }

    #[test]
    fn test_partial_sections() {
        let config = RunConfig::from_toml(
            r#"
            [filter]
            min_horsepower = 250

            [analysis]
            ttest_method = "student"
            correlation_columns = ["Horsepower", "Weight"]

            [report]
            top_n = 5
            pdf = false
            "#,
        )
        .unwrap();

        assert_eq!(config.filter.origin, "USA");
        assert_eq!(config.filter.min_horsepower, 250.0);
        assert_eq!(config.analysis.ttest_method, TTestMethod::Student);
        assert_eq!(config.analysis.comparison_columns.len(), 4);
        assert_eq!(config.report.top_n, 5);
        assert!(!config.report.pdf);
        assert!(config.report.html);
    }

    #[test]
    fn test_invalid_tiers_rejected() {
        let result = RunConfig::from_toml("[tiers]\nhigh = 100\nmedium = 200\n");
        assert!(matches!(
            result,
            Err(Error::Data(autostat_polars::Error::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_font_dir_searched_first() {
        let report = ReportConfig {
            font_dir: Some(PathBuf::from("/opt/fonts")),
            ..ReportConfig::default()
        };
        assert_eq!(report.pdf_options().font_dirs[0], PathBuf::from("/opt/fonts"));
    }
}
