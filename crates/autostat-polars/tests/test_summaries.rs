//! Tests for schema inspection and descriptive summaries

mod common;

use approx::assert_relative_eq;
use autostat_polars::schema::*;
use autostat_polars::{summaries_to_frame, CarFrameExt, Error};
use common::*;
use polars::prelude::*;

#[test]
fn test_describe_schema() {
    let df = cars_fixture();
    let report = df.describe_schema();

    assert_eq!(report.row_count, 8);
    assert_eq!(report.column_count(), RAW_COLUMNS.len());
    let horsepower = &report.columns[4];
    assert_eq!(horsepower.name, HORSEPOWER);
    assert_eq!(horsepower.semantic_type, SemanticType::Numeric);
    let origin = &report.columns[3];
    assert_eq!(origin.semantic_type, SemanticType::Categorical);
    assert_eq!(origin.null_count, 1);

    let frame = report.to_frame().unwrap();
    assert_eq!(frame.height(), RAW_COLUMNS.len());
}

#[test]
fn test_sample_bounds() {
    let df = cars_fixture();
    assert_eq!(df.sample(3).height(), 3);
    assert_eq!(df.sample(0).height(), 0);
    assert_eq!(df.sample(100).height(), df.height());
}

#[test]
fn test_sample_round_trip() {
    let df = cars_fixture();
    assert!(df.sample(df.height()).equals_missing(&df));
}

#[test]
fn test_numeric_summary_values() {
    let df = numeric_df("values", &[1.0, 2.0, 3.0, 4.0, 10.0]);
    let summaries = df.numeric_summary(&["values"]).unwrap();
    let s = &summaries[0];

    assert_eq!(s.count, 5);
    assert_relative_eq!(s.mean.unwrap(), 4.0);
    assert_relative_eq!(s.median.unwrap(), 3.0);
    assert_relative_eq!(s.std.unwrap(), 12.5f64.sqrt(), epsilon = 1e-12);
    assert_eq!(s.min, Some(1.0));
    assert_eq!(s.max, Some(10.0));
}

#[test]
fn test_numeric_summary_skips_missing() {
    let df = cars_fixture();
    let summaries = df.numeric_summary(&[MPG_CITY, HORSEPOWER]).unwrap();

    assert_eq!(summaries[0].column, MPG_CITY);
    assert_eq!(summaries[0].count, 7);
    assert_eq!(summaries[1].count, 8);
    assert_eq!(summaries[1].max, Some(500.0));

    let frame = summaries_to_frame(&summaries).unwrap();
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.width(), 7);
}

#[test]
fn test_numeric_summary_rejects_bad_columns() {
    let df = cars_fixture();
    match df.numeric_summary(&[HORSEPOWER, TYPE]) {
        Err(Error::ColumnNotFound { column, .. }) => assert_eq!(column, TYPE),
        other => panic!("Wrong result: {other:?}"),
    }
    assert!(matches!(
        df.numeric_summary(&["Displacement"]),
        Err(Error::ColumnNotFound { .. })
    ));
}

#[test]
fn test_frequency_first_occurrence_order() {
    let df = cars_fixture();
    let tables = df.frequency(&[ORIGIN, TYPE]).unwrap();
    let origin = &tables[0];

    let order: Vec<Option<&str>> = origin.entries.iter().map(|e| e.value.as_deref()).collect();
    assert_eq!(order, vec![Some("USA"), Some("Asia"), Some("Europe"), None]);
    assert_eq!(origin.count_of("USA"), 4);
    assert_eq!(origin.count_of("Asia"), 2);
    assert_eq!(origin.missing(), 1);
    assert_eq!(origin.count_of("Africa"), 0);

    for table in &tables {
        assert_eq!(table.total(), df.height());
    }
}

#[test]
fn test_frequency_table_frame() {
    let df = cars_fixture();
    let tables = df.frequency(&[TYPE]).unwrap();
    let frame = tables[0].to_frame().unwrap();

    assert_eq!(frame.height(), tables[0].entries.len());
    let counts: u64 = frame
        .column("Count")
        .unwrap()
        .u64()
        .unwrap()
        .into_iter()
        .flatten()
        .sum();
    assert_eq!(counts, 8);
}

#[test]
fn test_frequency_missing_column() {
    let df = cars_fixture();
    assert!(matches!(
        df.frequency(&["Drivetrain"]),
        Err(Error::ColumnNotFound { .. })
    ));
}
