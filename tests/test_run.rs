//! End-to-end tests of a full analysis run

mod common;

use autostat::analysis::{BY_TYPE_TITLE, COMPARISON_TITLE, CORRELATION_TITLE};
use autostat::report::SectionBody;
use autostat::table::schema::*;
use autostat::{ranking_title, run, write_outputs, Error, RunConfig};
use common::*;

#[test]
fn test_default_run_on_bundled_data() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = quiet_config(dir.path());
    let analysis = run(&config)?;

    let report = &analysis.report;
    assert_eq!(report.title, "Automobile Dataset Analysis");
    assert_eq!(report.failures().count(), 0);
    for title in [
        "Dataset Schema",
        "Sample Rows",
        "Summary Statistics",
        "Categorical Frequencies",
        "US vs Non-USA Comparison",
        "Correlation Matrix",
        "Summary Statistics by Car Type",
        "Top 10 US Cars by Power-to-Weight Ratio",
    ] {
        assert!(report.section(title).is_some(), "missing section {title}");
    }

    // Every derived row passed the filter
    let origins = analysis.derived.column(ORIGIN)?.str()?;
    let hp = analysis.derived.column(HORSEPOWER)?.f64()?;
    for (origin, hp) in origins.into_iter().zip(hp) {
        assert_eq!(origin, Some("USA"));
        assert!(hp.unwrap() > 200.0);
    }

    let total: i64 = analysis
        .summary_by_type
        .column("Num_Cars")?
        .i64()?
        .into_iter()
        .flatten()
        .sum();
    assert_eq!(total as usize, analysis.derived.height());
    assert_eq!(analysis.top.height(), 10.min(analysis.derived.height()));

    let written = write_outputs(report, &config.report)?;
    assert_eq!(written, vec![dir.path().join("report.html")]);
    let html = std::fs::read_to_string(&written[0])?;
    assert!(html.contains("<h2>Top 10 US Cars by Power-to-Weight Ratio</h2>"));
    Ok(())
}

#[test]
fn test_single_origin_comparison_is_localized() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_source(
        dir.path(),
        &[
            "Dodge,Viper,Sports,USA,500,3410,12,20",
            "Chevrolet,Corvette,Sports,USA,350,3246,18,25",
            "Ford,Expedition,SUV,USA,300,5000,14,18",
            "Cadillac,Escalade,SUV,USA,345,5367,14,18",
        ],
    );
    let mut config = quiet_config(dir.path());
    config.data.source = source;

    let analysis = run(&config)?;
    let comparison = analysis.report.section(COMPARISON_TITLE).unwrap();
    match &comparison.body {
        SectionBody::Failure { message } => assert!(message.contains("Origin_US")),
        other => panic!("Expected failure section, got {other:?}"),
    }
    // Downstream steps still ran
    assert!(analysis.report.section(CORRELATION_TITLE).is_some());
    assert!(analysis.report.section(BY_TYPE_TITLE).is_some());
    assert_eq!(analysis.top.height(), 4);
    Ok(())
}

#[test]
fn test_constant_column_correlation_is_localized() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_source(
        dir.path(),
        &[
            "Dodge,Viper,Sports,USA,500,3400,12,20",
            "Honda,Civic,Sedan,Asia,127,3400,32,38",
            "BMW,M3,Sports,Europe,333,3400,16,24",
            "Ford,Mustang,Sports,USA,300,3400,17,25",
        ],
    );
    let mut config = quiet_config(dir.path());
    config.data.source = source;
    config.report.top_n = 3;

    let analysis = run(&config)?;
    let failures: Vec<&str> = analysis
        .report
        .failures()
        .map(|s| s.title.as_str())
        .collect();
    // Weight is constant: the t-test fails too since both groups have zero variance
    assert!(failures.contains(&CORRELATION_TITLE));
    assert!(analysis.report.section(&ranking_title(3)).is_some());
    Ok(())
}

#[test]
fn test_missing_source_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = quiet_config(dir.path());
    config.data.source = dir.path().join("nope.csv").display().to_string();

    match run(&config) {
        Err(Error::Data(err)) => assert!(err.is_structural()),
        other => panic!("Expected structural error, got {other:?}"),
    }
}

#[test]
fn test_missing_column_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(&path, "Make,Model,Type,Origin,Horsepower\nFord,GT,Sports,USA,550\n").unwrap();
    let mut config = quiet_config(dir.path());
    config.data.source = path.display().to_string();

    assert!(matches!(
        run(&config),
        Err(Error::Data(autostat::table::Error::ColumnNotFound { .. }))
    ));
}

#[test]
fn test_csv_and_json_export() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = quiet_config(dir.path());
    config.report.csv = true;

    let analysis = run(&config)?;
    let written = write_outputs(&analysis.report, &config.report)?;

    let by_type = dir.path().join("summary_statistics_by_car_type.csv");
    assert!(written.contains(&by_type));
    let content = std::fs::read_to_string(&by_type)?;
    assert!(content.starts_with("Type,Num_Cars,Avg_HP,Avg_Weight,Avg_Efficiency"));
    assert!(written.contains(&dir.path().join("report.json")));
    assert!(written.contains(&dir.path().join("dataset_schema.csv")));
    Ok(())
}

#[test]
fn test_figures_render_as_svg() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = quiet_config(dir.path());
    config.report.figures = true;

    let analysis = run(&config)?;
    assert_eq!(analysis.report.failures().count(), 0);
    for title in [
        "Horsepower by Car Type",
        "Horsepower vs Weight",
        "Highway MPG by Origin",
    ] {
        match &analysis.report.section(title).map(|s| &s.body) {
            Some(SectionBody::Figure { svg, .. }) => assert!(svg.contains("<svg"), "{title}"),
            other => panic!("Expected figure for {title}, got {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn test_ranking_table_columns() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = quiet_config(dir.path());
    let analysis = run(&config)?;

    let expected = [
        MAKE,
        MODEL,
        TYPE,
        HORSEPOWER,
        WEIGHT,
        POWER_TO_WEIGHT,
        EFFICIENCY_RATING,
        HP_TIER,
    ];
    let names: Vec<String> = analysis
        .top
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, expected);

    match &analysis.report.section(&ranking_title(10)).map(|s| &s.body) {
        Some(SectionBody::Table(table)) => assert_eq!(table.headers, expected),
        other => panic!("Expected ranking table, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_nan_cells_do_not_abort_run() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_source(
        dir.path(),
        &[
            "Dodge,Viper,Sports,USA,500,3410,12,20",
            "Ford,Mystery,Sports,USA,NaN,3300,17,25",
            "Chevrolet,Corvette,Sports,USA,350,3246,18,25",
            "Honda,Civic,Sedan,Asia,127,2500,32,38",
            "BMW,M3,Sports,Europe,333,3415,16,24",
        ],
    );
    let mut config = quiet_config(dir.path());
    config.data.source = source;

    let analysis = run(&config)?;
    assert_eq!(analysis.derived.height(), 2);
    let models = analysis.derived.column(MODEL)?.str()?;
    assert!(models.into_iter().all(|m| m != Some("Mystery")));
    Ok(())
}

#[test]
fn test_config_file_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("autostat.toml");
    std::fs::write(
        &path,
        "[report]\ntitle = \"Fleet Review\"\ntop_n = 3\n\n[tiers]\nhigh = 450\nmedium = 250\n",
    )?;
    let config = RunConfig::from_file(&path)?;

    assert_eq!(config.report.title, "Fleet Review");
    assert_eq!(config.tiers.high, 450.0);
    assert_eq!(config, RunConfig::from_toml(&toml::to_string(&config)?)?);
    Ok(())
}
