//! Demographic estimates and classifications
//!
//! The World Bank has no median age indicator, so the dashboard estimates it
//! from the share of population aged 0-14.

use crate::error::{ProjectionError, Result};
use crate::projection::round1;
use crate::series::{series_from_pairs, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Latest reference median age and its year (UN WPP 2022)
pub const REFERENCE_MEDIAN_AGE: (f64, i32) = (28.7, 2023);

/// Median age implied by the under-14 population share (percent)
///
/// `28.5 + (25 - share) * 0.3`, rounded to one decimal.
pub fn estimate_median_age(under_14_share: f64) -> f64 {
    round1(28.5 + (25.0 - under_14_share) * 0.3)
}

/// Apply `estimate_median_age` to a youth-share series
pub fn estimate_median_age_series(youth_share: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    youth_share
        .iter()
        .map(|p| TimeSeriesPoint::new(p.year, estimate_median_age(p.value)))
        .collect()
}

/// Historical median age estimates, 1960-2023
pub fn reference_median_age_history() -> Vec<TimeSeriesPoint> {
    series_from_pairs(&[
        (1960, 19.8), (1965, 20.1), (1970, 20.4), (1975, 20.8),
        (1980, 21.2), (1985, 21.7), (1990, 22.3), (1995, 23.0),
        (2000, 23.5), (2005, 24.8), (2010, 26.1), (2015, 27.3),
        (2020, 28.2), (2023, 28.7),
    ])
}

/// Population category by median age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    Young,
    MiddleAged,
    Aging,
}

impl AgeCategory {
    /// Young below 30, middle-aged below 40, aging otherwise
    pub fn from_median_age(median_age: f64) -> Self {
        if median_age < 30.0 {
            AgeCategory::Young
        } else if median_age < 40.0 {
            AgeCategory::MiddleAged
        } else {
            AgeCategory::Aging
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgeCategory::Young => "Young Population",
            AgeCategory::MiddleAged => "Middle-aged Population",
            AgeCategory::Aging => "Aging Population",
        })
    }
}

/// Dependency level by dependency ratio (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyLevel {
    Low,
    Moderate,
    High,
}

impl DependencyLevel {
    /// Low below 50, moderate below 70, high otherwise
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 50.0 {
            DependencyLevel::Low
        } else if ratio < 70.0 {
            DependencyLevel::Moderate
        } else {
            DependencyLevel::High
        }
    }
}

impl fmt::Display for DependencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DependencyLevel::Low => "Low Dependency",
            DependencyLevel::Moderate => "Moderate Dependency",
            DependencyLevel::High => "High Dependency",
        })
    }
}

/// GDP per person
pub fn per_capita(gdp: f64, population: f64) -> Result<f64> {
    if !(gdp > 0.0) || !(population > 0.0) {
        return Err(ProjectionError::invalid(format!(
            "per capita needs positive gdp and population (gdp={}, population={})",
            gdp, population
        )));
    }
    Ok(gdp / population)
}
