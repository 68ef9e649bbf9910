//! Load annual series from CSV exports
//!
//! World Bank downloads list the most recent year first and leave gaps as
//! empty cells, so every loader drops empty rows and sorts ascending.

use super::{sort_by_year, TimeSeriesPoint};
use crate::error::DataError;
use csv::Reader;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Raw row of a single-indicator file (`Year,Value`)
#[derive(Debug, serde::Deserialize)]
struct SeriesRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Value")]
    value: Option<f64>,
}

/// Raw row of a long-format sector file (`Year,Sector,Share`)
#[derive(Debug, serde::Deserialize)]
struct SectorRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Sector")]
    sector: String,
    #[serde(rename = "Share")]
    share: Option<f64>,
}

/// Load a `Year,Value` series from a CSV file
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<Vec<TimeSeriesPoint>, DataError> {
    let reader = Reader::from_path(path)?;
    read_series(reader)
}

/// Load a `Year,Value` series from any reader
pub fn load_series_from_reader<R: Read>(reader: R) -> Result<Vec<TimeSeriesPoint>, DataError> {
    read_series(Reader::from_reader(reader))
}

fn read_series<R: Read>(mut reader: Reader<R>) -> Result<Vec<TimeSeriesPoint>, DataError> {
    let mut series = Vec::new();

    for result in reader.deserialize() {
        let row: SeriesRow = result?;
        match row.value {
            Some(value) => series.push(TimeSeriesPoint::new(row.year, value)),
            None => log::debug!("skipping empty value for {}", row.year),
        }
    }

    sort_by_year(&mut series);
    Ok(series)
}

/// Load per-sector histories from a long-format CSV file
pub fn load_sector_histories<P: AsRef<Path>>(
    path: P,
) -> Result<BTreeMap<String, Vec<TimeSeriesPoint>>, DataError> {
    let reader = Reader::from_path(path)?;
    read_sector_histories(reader)
}

/// Load per-sector histories from any reader
pub fn load_sector_histories_from_reader<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, Vec<TimeSeriesPoint>>, DataError> {
    read_sector_histories(Reader::from_reader(reader))
}

fn read_sector_histories<R: Read>(
    mut reader: Reader<R>,
) -> Result<BTreeMap<String, Vec<TimeSeriesPoint>>, DataError> {
    let mut histories: BTreeMap<String, Vec<TimeSeriesPoint>> = BTreeMap::new();

    for result in reader.deserialize() {
        let row: SectorRow = result?;
        let sector = row.sector.trim().to_lowercase();
        if sector.is_empty() {
            return Err(DataError::Invalid {
                file: "sector history".to_string(),
                reason: format!("empty sector name in year {}", row.year),
            });
        }
        if let Some(share) = row.share {
            histories
                .entry(sector)
                .or_default()
                .push(TimeSeriesPoint::new(row.year, share));
        }
    }

    for series in histories.values_mut() {
        sort_by_year(series);
    }
    Ok(histories)
}
