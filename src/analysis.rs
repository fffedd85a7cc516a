//! End-to-end analysis run
//!
//! Loads the dataset, runs every analysis step and collects the results into
//! a [`Report`]. Structural errors abort the run; a failed statistical
//! analysis or chart becomes a failure section and the run continues.

use crate::config::{ReportConfig, RunConfig};
use crate::{Error, Result};
use autostat_polars::schema::*;
use autostat_polars::{
    comparisons_to_frame, correlation_to_frame, load, summaries_to_frame, summary_by_type_metrics,
    CarFrameExt, FrequencyTable,
};
use autostat_report::{write_csv, write_html, write_json, write_pdf, Report, TableView};
use polars::prelude::*;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{info, warn};

pub const SCHEMA_TITLE: &str = "Dataset Schema";
pub const SAMPLE_TITLE: &str = "Sample Rows";
pub const SUMMARY_TITLE: &str = "Summary Statistics";
pub const FREQUENCY_TITLE: &str = "Categorical Frequencies";
pub const COMPARISON_TITLE: &str = "US vs Non-USA Comparison";
pub const CORRELATION_TITLE: &str = "Correlation Matrix";
pub const BY_TYPE_TITLE: &str = "Summary Statistics by Car Type";

/// Columns shown in the power-to-weight ranking
const RANKING_COLUMNS: [&str; 8] = [
    MAKE,
    MODEL,
    TYPE,
    HORSEPOWER,
    WEIGHT,
    POWER_TO_WEIGHT,
    EFFICIENCY_RATING,
    HP_TIER,
];

pub fn ranking_title(n: usize) -> String {
    format!("Top {n} US Cars by Power-to-Weight Ratio")
}

/// Tables produced by a run alongside the report built from them
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: Report,
    /// Filtered and derived table
    pub derived: DataFrame,
    pub summary_by_type: DataFrame,
    pub top: DataFrame,
}

/// Turn a localized failure into a report section
fn localized<T, E: Display>(report: &mut Report, title: &str, result: std::result::Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(section = title, error = %err, "analysis step failed");
            report.push_failure(title, err.to_string());
            None
        }
    }
}

/// Like [`localized`] but structural table errors still abort
fn localized_data<T>(
    report: &mut Report,
    title: &str,
    result: autostat_polars::Result<T>,
) -> Result<Option<T>> {
    match result {
        Err(err) if err.is_structural() => Err(err.into()),
        other => Ok(localized(report, title, other)),
    }
}

fn frequency_table(tables: &[FrequencyTable]) -> TableView {
    let rows = tables
        .iter()
        .flat_map(|table| {
            table.entries.iter().map(move |entry| {
                vec![
                    table.column.clone(),
                    entry.value.clone().unwrap_or_else(|| "(missing)".to_string()),
                    entry.count.to_string(),
                ]
            })
        })
        .collect();
    TableView::new(
        vec!["Column".to_string(), "Value".to_string(), "Count".to_string()],
        rows,
    )
}

fn push_figures(report: &mut Report, raw: &DataFrame, labelled: &DataFrame, config: &ReportConfig) {
    let options = &config.charts;

    let title = "Horsepower by Car Type";
    let svg = autostat_viz::box_plot(raw, TYPE, HORSEPOWER, title, options);
    if let Some(svg) = localized(report, title, svg) {
        report.push_figure(title, "Distribution of horsepower for each car type", svg);
    }

    let title = "Horsepower vs Weight";
    let svg = autostat_viz::scatter_plot(labelled, WEIGHT, HORSEPOWER, ORIGIN_US, title, options);
    if let Some(svg) = localized(report, title, svg) {
        report.push_figure(title, "Horsepower against weight, US and non-US cars", svg);
    }

    let title = "Highway MPG by Origin";
    let svg = autostat_viz::density_overlay(labelled, ORIGIN_US, MPG_HIGHWAY, title, options);
    if let Some(svg) = localized(report, title, svg) {
        report.push_figure(title, "Density of highway MPG, US and non-US cars", svg);
    }
}

/// Run every analysis step and build the report
pub fn run(config: &RunConfig) -> Result<Analysis> {
    config.validate()?;
    let precision = config.report.precision;
    let mut report = Report::new(config.report.title.clone());

    let raw = load(&config.data.source)?;
    info!(source = %config.data.source, rows = raw.height(), "loaded dataset");

    // Inspection and summaries of the raw table
    let schema = raw.describe_schema();
    report.push_text(
        SCHEMA_TITLE,
        format!(
            "{} rows, {} columns loaded from '{}'.",
            schema.row_count,
            schema.column_count(),
            config.data.source
        ),
    );
    report.push_table(SCHEMA_TITLE, TableView::from_frame(&schema.to_frame()?, precision)?);
    report.push_table(
        SAMPLE_TITLE,
        TableView::from_frame(&raw.sample(config.report.sample_rows), precision)?,
    );

    let summaries = raw.numeric_summary(&NUMERIC_COLUMNS)?;
    report.push_table(
        SUMMARY_TITLE,
        TableView::from_frame(&summaries_to_frame(&summaries)?, precision)?,
    );
    let frequencies = raw.frequency(&CATEGORICAL_COLUMNS)?;
    report.push_table(FREQUENCY_TITLE, frequency_table(&frequencies));

    // US vs non-US comparison over the full table
    let labelled = raw.binary_origin_label()?;
    let comparison_columns: Vec<&str> = config
        .analysis
        .comparison_columns
        .iter()
        .map(String::as_str)
        .collect();
    let comparison = labelled.two_sample_test(
        ORIGIN_US,
        &comparison_columns,
        config.analysis.ttest_method,
    );
    if let Some(results) = localized_data(&mut report, COMPARISON_TITLE, comparison)? {
        if let Some(first) = results.first() {
            report.push_text(
                COMPARISON_TITLE,
                format!(
                    "Two-sided {} t-test of {} against {}.",
                    config.analysis.ttest_method.name(),
                    first.group_means[0].label,
                    first.group_means[1].label
                ),
            );
        }
        let frame = comparisons_to_frame(&results)?;
        report.push_table(COMPARISON_TITLE, TableView::from_frame(&frame, precision.max(4))?);
    }

    let correlation_columns: Vec<&str> = config
        .analysis
        .correlation_columns
        .iter()
        .map(String::as_str)
        .collect();
    let correlation = labelled.correlation_matrix(&correlation_columns);
    if let Some(matrix) = localized_data(&mut report, CORRELATION_TITLE, correlation)? {
        let frame = correlation_to_frame(&matrix)?;
        report.push_table(CORRELATION_TITLE, TableView::from_frame(&frame, 3)?);
    }

    // Filter, derive, aggregate and rank
    let derived = raw.derive_all(&config.filter, &config.tiers)?;
    info!(rows = derived.height(), "derived high power subset");

    let summary_by_type = derived.group_aggregate(TYPE, &summary_by_type_metrics())?;
    report.push_table(
        BY_TYPE_TITLE,
        TableView::from_frame(&summary_by_type, precision)?,
    );

    let top = derived
        .sort_by(POWER_TO_WEIGHT, true)?
        .top_n(config.report.top_n)
        .select(RANKING_COLUMNS)
        .map_err(autostat_polars::Error::from)?;
    report.push_table(
        ranking_title(config.report.top_n),
        TableView::from_frame(&top, precision.max(4))?,
    );

    if config.report.figures {
        push_figures(&mut report, &raw, &labelled, &config.report);
    }

    let failures = report.failures().count();
    info!(sections = report.sections.len(), failures, "analysis complete");

    Ok(Analysis {
        report,
        derived,
        summary_by_type,
        top,
    })
}

fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// Write the enabled output formats into the output directory
///
/// A missing PDF font is logged and skipped; any other write failure is an
/// error. Returns the files written.
pub fn write_outputs(report: &Report, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.output_dir)?;
    let mut written = Vec::new();

    if config.html {
        let path = config.output_dir.join("report.html");
        write_html(report, &path)?;
        info!(path = %path.display(), "wrote HTML report");
        written.push(path);
    }

    if config.pdf {
        let path = config.output_dir.join("report.pdf");
        match write_pdf(report, &path, &config.pdf_options()) {
            Ok(()) => written.push(path),
            Err(err @ autostat_report::Error::Font { .. }) => {
                warn!(error = %err, "skipping PDF report");
            }
            Err(err) => return Err(err.into()),
        }
    }

    if config.csv {
        let mut seen = std::collections::HashSet::new();
        for (title, table) in report.tables() {
            // Sections sharing a title get one file each
            let mut name = slug(title);
            let mut n = 2;
            while !seen.insert(name.clone()) {
                name = format!("{}_{n}", slug(title));
                n += 1;
            }
            let path = config.output_dir.join(format!("{name}.csv"));
            write_csv(table, &path)?;
            written.push(path);
        }
        let path = config.output_dir.join("report.json");
        write_json(report, &path)?;
        written.push(path);
    }

    if written.is_empty() {
        return Err(Error::Config("no output format enabled".to_string()));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(
            slug("Top 10 US Cars by Power-to-Weight Ratio"),
            "top_10_us_cars_by_power_to_weight_ratio"
        );
        assert_eq!(slug("US vs Non-USA Comparison"), "us_vs_non_usa_comparison");
    }

    #[test]
    fn test_ranking_title() {
        assert_eq!(ranking_title(10), "Top 10 US Cars by Power-to-Weight Ratio");
    }
}
