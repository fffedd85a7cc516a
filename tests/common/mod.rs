//! Common test utilities for end-to-end runs

#![allow(dead_code)]

use autostat::RunConfig;
use std::path::Path;

pub const HEADER: &str = "Make,Model,Type,Origin,Horsepower,Weight,MPG_City,MPG_Highway";

/// Default run writing HTML only, without charts
pub fn quiet_config(output_dir: &Path) -> RunConfig {
    let mut config = RunConfig::default();
    config.report.output_dir = output_dir.to_path_buf();
    config.report.pdf = false;
    config.report.figures = false;
    config
}

/// Write rows under the standard header and return the file path as a string
pub fn write_source(dir: &Path, rows: &[&str]) -> String {
    let path = dir.join("cars.csv");
    let mut content = format!("{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}
