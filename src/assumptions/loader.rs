//! CSV-based assumption loader
//!
//! Loads projection assumptions from CSV files in data/assumptions/

use super::schedule::{GrowthBand, GrowthSchedule};
use crate::error::DataError;
use crate::series::{load_series, TimeSeriesPoint};
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

const SCHEDULE_FILE: &str = "population_growth_schedule.csv";
const MEDIAN_AGE_FILE: &str = "median_age_history.csv";

/// Raw schedule row; an empty `ThroughYear` marks the open-ended final rate
#[derive(Debug, serde::Deserialize)]
struct ScheduleRow {
    #[serde(rename = "ThroughYear")]
    through_year: Option<i32>,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
}

/// Load the population growth schedule from CSV
pub fn load_population_schedule(path: &Path) -> Result<GrowthSchedule, DataError> {
    let file = File::open(path.join(SCHEDULE_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bands = Vec::new();
    let mut final_rate = None;

    for result in reader.deserialize() {
        let row: ScheduleRow = result?;
        if final_rate.is_some() {
            return Err(DataError::Invalid {
                file: SCHEDULE_FILE.to_string(),
                reason: "open-ended rate must be the last row".to_string(),
            });
        }
        match row.through_year {
            Some(through_year) => bands.push(GrowthBand {
                through_year,
                annual_rate: row.annual_rate,
            }),
            None => final_rate = Some(row.annual_rate),
        }
    }

    let final_rate = final_rate.ok_or_else(|| DataError::Invalid {
        file: SCHEDULE_FILE.to_string(),
        reason: "missing open-ended final rate (row with empty ThroughYear)".to_string(),
    })?;

    Ok(GrowthSchedule::new(bands, final_rate)?)
}

/// Load the historical median age series from CSV
pub fn load_median_age_history(path: &Path) -> Result<Vec<TimeSeriesPoint>, DataError> {
    load_series(path.join(MEDIAN_AGE_FILE))
}

/// All assumptions loaded from a directory
pub struct LoadedAssumptions {
    pub population_schedule: GrowthSchedule,
    pub median_age_history: Vec<TimeSeriesPoint>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, DataError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self, DataError> {
        log::debug!("loading assumptions from {}", path.display());
        Ok(Self {
            population_schedule: load_population_schedule(path)?,
            median_age_history: load_median_age_history(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let assumptions = result.unwrap();

        // Shipped schedule is the UN reference
        assert_eq!(assumptions.population_schedule, GrowthSchedule::un_reference());

        // Median age history runs 1960..2023
        assert_eq!(assumptions.median_age_history.len(), 14);
        assert_eq!(assumptions.median_age_history[0].year, 1960);
        assert_eq!(assumptions.median_age_history[13].year, 2023);
    }

    #[test]
    fn test_missing_directory() {
        let result = LoadedAssumptions::load_from(Path::new("data/does_not_exist"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
