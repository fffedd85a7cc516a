//! Dataset loading
//!
//! A source identifier is either the name of a bundled dataset or a path to
//! a CSV file with a header row.

use crate::schema::*;
use crate::{Error, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Name of the dataset shipped with the crate
pub const BUNDLED_CARS: &str = "cars";

const BUNDLED_CARS_CSV: &str = include_str!("../../data/cars.csv");

/// Load a dataset by bundled name or file path
pub fn load(identifier: &str) -> Result<DataFrame> {
    if identifier == BUNDLED_CARS {
        debug!(identifier, "loading bundled dataset");
        return load_reader(BUNDLED_CARS_CSV.as_bytes());
    }

    let path = Path::new(identifier);
    if !path.is_file() {
        return Err(Error::SourceUnavailable {
            identifier: identifier.to_string(),
            reason: "not a bundled dataset name or a readable file".to_string(),
        });
    }

    let file = File::open(path).map_err(|e| Error::SourceUnavailable {
        identifier: identifier.to_string(),
        reason: e.to_string(),
    })?;
    debug!(identifier, "loading dataset from file");
    load_reader(file)
}

/// Load CSV data with the automobile schema from any reader
pub fn load_reader<R: Read>(reader: R) -> Result<DataFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if let Some(absent) = RAW_COLUMNS
        .iter()
        .find(|required| !headers.iter().any(|h| h == **required))
    {
        return Err(Error::missing_column(absent));
    }

    let records = rdr
        .deserialize::<CarRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!(rows = records.len(), "parsed source records");

    records_to_frame(&records)
}

/// NaN and infinite cells parse as floats but are missing observations
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Build a table from typed records, preserving their order
///
/// Non-finite numeric values become missing.
pub fn records_to_frame(records: &[CarRecord]) -> Result<DataFrame> {
    let numeric = |field: fn(&CarRecord) -> Option<f64>| -> Vec<Option<f64>> {
        records.iter().map(|r| finite(field(r))).collect()
    };
    let df = df![
        MAKE => records.iter().map(|r| r.make.as_str()).collect::<Vec<_>>(),
        MODEL => records.iter().map(|r| r.model.as_str()).collect::<Vec<_>>(),
        TYPE => records.iter().map(|r| r.car_type.as_deref()).collect::<Vec<_>>(),
        ORIGIN => records.iter().map(|r| r.origin.as_deref()).collect::<Vec<_>>(),
        HORSEPOWER => numeric(|r| r.horsepower),
        WEIGHT => numeric(|r| r.weight),
        MPG_CITY => numeric(|r| r.mpg_city),
        MPG_HIGHWAY => numeric(|r| r.mpg_highway),
    ]?;
    Ok(df)
}
