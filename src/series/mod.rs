//! Annual time-series values shared by the projectors and loaders

mod loader;

pub use loader::{
    load_series, load_series_from_reader, load_sector_histories,
    load_sector_histories_from_reader,
};

use serde::{Deserialize, Serialize};

/// One observed or projected annual value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

impl From<(i32, f64)> for TimeSeriesPoint {
    fn from((year, value): (i32, f64)) -> Self {
        Self { year, value }
    }
}

/// Build a series from `(year, value)` pairs
pub fn series_from_pairs(pairs: &[(i32, f64)]) -> Vec<TimeSeriesPoint> {
    pairs.iter().copied().map(TimeSeriesPoint::from).collect()
}

/// Sort ascending by year. Stable, so duplicate years keep input order.
pub fn sort_by_year(series: &mut [TimeSeriesPoint]) {
    series.sort_by_key(|p| p.year);
}

/// The most recent observation (highest year; the later entry wins a tie)
pub fn latest(series: &[TimeSeriesPoint]) -> Option<&TimeSeriesPoint> {
    series.iter().max_by_key(|p| p.year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_picks_highest_year() {
        let series = series_from_pairs(&[(2020, 3.0), (2022, 5.0), (2021, 4.0)]);
        let last = latest(&series).unwrap();
        assert_eq!(last.year, 2022);
        assert_eq!(last.value, 5.0);
    }

    #[test]
    fn test_latest_empty() {
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_sort_by_year_is_stable() {
        let mut series = series_from_pairs(&[(2023, 1.0), (2021, 2.0), (2023, 3.0)]);
        sort_by_year(&mut series);
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2021, 2023, 2023]);
        assert_eq!(series[1].value, 1.0);
        assert_eq!(series[2].value, 3.0);
    }
}
