//! Sector share trend projection
//!
//! Fits a least-squares line to a sector's share history and extrapolates it
//! to the target year. The current value is the latest observation, not the
//! fitted value, so "current" is observed and "projected" is modeled.

use super::regression::LinearFit;
use super::years_between;
use crate::error::{ProjectionError, Result};
use crate::series::{latest, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum number of observations before a trend is fitted
pub const DEFAULT_MIN_TREND_SAMPLES: usize = 3;

/// Projected sector share for one target year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorProjection {
    /// Latest observed value
    pub current_value: f64,

    /// Trend line evaluated at the target year
    pub projected_value: f64,

    /// Implied compound annual rate from current to projected, in percent.
    /// None when it cannot be computed (non-positive base or negative ratio).
    pub annual_growth_rate: Option<f64>,

    pub trend_slope: f64,
    pub intercept: f64,
    pub sample_count: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub target_year: i32,
}

impl SectorProjection {
    /// The implied growth rate, or why there is none
    pub fn growth_rate_status(&self) -> Result<f64> {
        self.annual_growth_rate.ok_or_else(|| {
            ProjectionError::degenerate(format!(
                "growth rate not computable from {} to {}",
                self.current_value, self.projected_value
            ))
        })
    }

    /// Total relative change from current to projected, in percent
    pub fn change_pct(&self) -> Option<f64> {
        if self.current_value == 0.0 {
            return None;
        }
        Some((self.projected_value - self.current_value) / self.current_value * 100.0)
    }
}

/// Linear-trend projector with a configurable minimum sample count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTrendProjector {
    min_samples: usize,
}

impl SectorTrendProjector {
    pub fn new(min_samples: usize) -> Self {
        Self { min_samples }
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Project one sector's share history to `target_year`
    ///
    /// # Errors
    /// `InsufficientData` below the minimum sample count and
    /// `DegenerateComputation` when the history spans a single year.
    pub fn project(
        &self,
        history: &[TimeSeriesPoint],
        target_year: i32,
    ) -> Result<SectorProjection> {
        if history.len() < self.min_samples.max(2) {
            return Err(ProjectionError::InsufficientData {
                required: self.min_samples.max(2),
                available: history.len(),
            });
        }

        let fit = LinearFit::fit(history)?;

        let last = latest(history).ok_or(ProjectionError::InsufficientData {
            required: self.min_samples,
            available: 0,
        })?;
        let first_year = history.iter().map(|p| p.year).min().unwrap_or(last.year);

        let current_value = last.value;
        let projected_value = fit.value_at(target_year);
        let annual_growth_rate =
            implied_annual_rate(
            current_value,
            projected_value,
            years_between(last.year, target_year),
        );

        if annual_growth_rate.is_none() {
            log::warn!(
                "non-computable growth rate from {:.3} to {:.3} by {}",
                current_value, projected_value, target_year
            );
        }

        Ok(SectorProjection {
            current_value,
            projected_value,
            annual_growth_rate,
            trend_slope: fit.slope,
            intercept: fit.intercept,
            sample_count: fit.sample_count,
            first_year,
            last_year: last.year,
            target_year,
        })
    }

    /// Project every sector, skipping those that fail
    pub fn project_all(
        &self,
        histories: &BTreeMap<String, Vec<TimeSeriesPoint>>,
        target_year: i32,
    ) -> BTreeMap<String, SectorProjection> {
        histories
            .iter()
            .filter_map(|(sector, history)| match self.project(history, target_year) {
                Ok(projection) => Some((sector.clone(), projection)),
                Err(e) => {
                    log::warn!("skipping sector {}: {}", sector, e);
                    None
                }
            })
            .collect()
    }
}

impl Default for SectorTrendProjector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TREND_SAMPLES)
    }
}

/// Rate `r` (percent) with `current * (1 + r)^years = projected`
///
/// Zero horizon is defined as 0.
fn implied_annual_rate(current: f64, projected: f64, years: f64) -> Option<f64> {
    if years == 0.0 {
        return Some(0.0);
    }
    if current <= 0.0 {
        return None;
    }
    let ratio = projected / current;
    if ratio < 0.0 {
        return None;
    }

    let rate = 100.0 * (ratio.powf(1.0 / years) - 1.0);
    rate.is_finite().then_some(rate)
}
