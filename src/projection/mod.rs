//! Pure projection functions: required growth, population, median age,
//! sector trends and share normalization

mod growth;
mod population;
mod median_age;
mod regression;
mod sector_trend;
mod normalize;

pub use growth::{compound, required_growth};
pub use population::PopulationProjector;
pub use median_age::{MedianAgeProjector, DEFAULT_MEDIAN_AGE_DELTA};
pub use regression::LinearFit;
pub use sector_trend::{SectorProjection, SectorTrendProjector, DEFAULT_MIN_TREND_SAMPLES};
pub use normalize::{SectorNormalizer, DEFAULT_MIN_SECTOR_ENTRIES};

/// Round to one decimal place, ties to even
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Whole years from `from` to `to`, without `i32` overflow
pub(crate) fn years_between(from: i32, to: i32) -> f64 {
    (i64::from(to) - i64::from(from)) as f64
}
