//! Projection assumptions: population growth schedule, median age history
//! and the minimum-coverage thresholds used by the projectors

mod schedule;
pub mod loader;

pub use schedule::{GrowthBand, GrowthSchedule};
pub use loader::LoadedAssumptions;

use crate::comparison::DEFAULT_PEER_COUNT;
use crate::demographics::reference_median_age_history;
use crate::error::DataError;
use crate::projection::{
    DEFAULT_MEDIAN_AGE_DELTA, DEFAULT_MIN_SECTOR_ENTRIES, DEFAULT_MIN_TREND_SAMPLES,
};
use crate::series::TimeSeriesPoint;
use std::path::Path;

/// Container for all projection assumptions
///
/// Passed explicitly to the runner; nothing in the core reads global settings.
#[derive(Debug, Clone)]
pub struct Assumptions {
    /// Annual population growth bands
    pub population_schedule: GrowthSchedule,

    /// Median age series used when the caller supplies no history
    pub median_age_history: Vec<TimeSeriesPoint>,

    /// Years-per-year median age increase when no trend can be derived
    pub median_age_fallback_delta: f64,

    /// Minimum observations before a sector trend is fitted
    pub min_trend_samples: usize,

    /// Minimum positive entries before a share set is normalized
    pub min_sector_entries: usize,

    /// Number of peer economies reported for the projected per-capita GDP
    pub peer_count: usize,
}

impl Assumptions {
    /// In-memory reference assumptions matching the dashboard defaults
    pub fn default_reference() -> Self {
        Self {
            population_schedule: GrowthSchedule::un_reference(),
            median_age_history: reference_median_age_history(),
            median_age_fallback_delta: DEFAULT_MEDIAN_AGE_DELTA,
            min_trend_samples: DEFAULT_MIN_TREND_SAMPLES,
            min_sector_entries: DEFAULT_MIN_SECTOR_ENTRIES,
            peer_count: DEFAULT_PEER_COUNT,
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, DataError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, DataError> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            population_schedule: loaded.population_schedule,
            median_age_history: loaded.median_age_history,
            ..Self::default_reference()
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_matches_in_memory_reference() {
        let from_csv = Assumptions::from_csv().expect("Failed to load assumptions");
        let reference = Assumptions::default_reference();

        assert_eq!(from_csv.population_schedule, reference.population_schedule);
        assert_eq!(from_csv.median_age_history, reference.median_age_history);
        assert_eq!(from_csv.min_trend_samples, 3);
        assert_eq!(from_csv.min_sector_entries, 2);
    }
}
