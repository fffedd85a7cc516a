//! Common test utilities for autostat-polars tests

#![allow(dead_code)]

use autostat_polars::schema::*;
use polars::prelude::*;

/// Small mixed-origin table with one missing Origin and one zero Weight
pub fn cars_fixture() -> DataFrame {
    df![
        MAKE => ["Chevrolet", "Dodge", "Ford", "Toyota", "BMW", "Honda", "Ford", "Saturn"],
        MODEL => ["Corvette", "Viper", "Mustang", "Camry", "M3", "Civic", "Prototype", "Ion"],
        TYPE => [Some("Sports"), Some("Sports"), Some("Sports"), Some("Sedan"), Some("Sports"), Some("Sedan"), None, Some("Sedan")],
        ORIGIN => [Some("USA"), Some("USA"), Some("USA"), Some("Asia"), Some("Europe"), Some("Asia"), Some("USA"), None],
        HORSEPOWER => [Some(350.0), Some(500.0), Some(210.0), Some(160.0), Some(333.0), Some(127.0), Some(250.0), Some(140.0)],
        WEIGHT => [Some(3246.0), Some(3410.0), Some(3300.0), Some(3120.0), Some(3415.0), Some(2500.0), Some(0.0), Some(2700.0)],
        MPG_CITY => [Some(18.0), Some(12.0), Some(18.0), Some(24.0), Some(16.0), Some(32.0), None, Some(26.0)],
        MPG_HIGHWAY => [Some(25.0), Some(20.0), Some(25.0), Some(33.0), Some(24.0), Some(38.0), Some(30.0), Some(35.0)],
    ]
    .unwrap()
}

/// Single-column numeric table
pub fn numeric_df(name: &str, values: &[f64]) -> DataFrame {
    DataFrame::new(vec![Column::new(name.into(), values.to_vec())]).unwrap()
}

pub fn f64_at(df: &DataFrame, column: &str, row: usize) -> Option<f64> {
    df.column(column).unwrap().f64().unwrap().get(row)
}

pub fn str_at(df: &DataFrame, column: &str, row: usize) -> Option<String> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .get(row)
        .map(str::to_string)
}

pub fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

pub fn floats(df: &DataFrame, column: &str) -> Vec<Option<f64>> {
    df.column(column)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}
