//! Median age projection from a historical trend
//!
//! The trend is the secant between the first and last observations, not a
//! regression. Sector trends use least squares; median age deliberately does
//! not.

use super::{round1, years_between};
use crate::error::{ProjectionError, Result};
use crate::series::TimeSeriesPoint;

/// Years of median age gained per calendar year when no trend is available
pub const DEFAULT_MEDIAN_AGE_DELTA: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianAgeProjector {
    fallback_annual_delta: f64,
}

impl MedianAgeProjector {
    pub fn new(fallback_annual_delta: f64) -> Self {
        Self { fallback_annual_delta }
    }

    pub fn fallback_annual_delta(&self) -> f64 {
        self.fallback_annual_delta
    }

    /// Average annual change between the first and last points of `history`
    ///
    /// Falls back to the configured delta with fewer than two points or when
    /// the last year does not come after the first.
    pub fn annual_increase(&self, history: &[TimeSeriesPoint]) -> f64 {
        match (history.first(), history.last()) {
            (Some(first), Some(last)) if history.len() >= 2 && last.year > first.year => {
                (last.value - first.value) / years_between(first.year, last.year)
            }
            _ => {
                log::debug!(
                    "no usable median age trend ({} points), using {} years/year",
                    history.len(),
                    self.fallback_annual_delta
                );
                self.fallback_annual_delta
            }
        }
    }

    /// Median age in `target_year`, rounded to one decimal
    pub fn project(
        &self,
        current_age: f64,
        base_year: i32,
        target_year: i32,
        history: &[TimeSeriesPoint],
    ) -> Result<f64> {
        if !current_age.is_finite() {
            return Err(ProjectionError::invalid(format!(
                "current median age must be finite, got {}",
                current_age
            )));
        }

        let annual_increase = self.annual_increase(history);
        let horizon = years_between(base_year, target_year);
        Ok(round1(current_age + annual_increase * horizon))
    }
}

impl Default for MedianAgeProjector {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIAN_AGE_DELTA)
    }
}
