//! Banded annual growth-rate schedules keyed by calendar year

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// One band: `annual_rate` applies to every year up to and including `through_year`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBand {
    pub through_year: i32,
    pub annual_rate: f64,
}

/// Piecewise-constant annual growth rate
///
/// A year takes the rate of the first band whose `through_year` is >= the
/// year. Years past the last band take `final_rate`, so the schedule covers
/// every year. Deserialized schedules go through the same validation as
/// [`GrowthSchedule::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct GrowthSchedule {
    bands: Vec<GrowthBand>,
    final_rate: f64,
}

/// Unvalidated wire form of a schedule
#[derive(Deserialize)]
struct RawSchedule {
    bands: Vec<GrowthBand>,
    final_rate: f64,
}

impl TryFrom<RawSchedule> for GrowthSchedule {
    type Error = ProjectionError;

    fn try_from(raw: RawSchedule) -> Result<Self> {
        Self::new(raw.bands, raw.final_rate)
    }
}

impl GrowthSchedule {
    /// Create a schedule, rejecting thresholds that are not strictly increasing
    pub fn new(bands: Vec<GrowthBand>, final_rate: f64) -> Result<Self> {
        for pair in bands.windows(2) {
            if pair[1].through_year <= pair[0].through_year {
                return Err(ProjectionError::invalid(format!(
                    "band thresholds must be strictly increasing ({} follows {})",
                    pair[1].through_year, pair[0].through_year
                )));
            }
        }

        let rates = bands.iter().map(|b| b.annual_rate).chain(std::iter::once(final_rate));
        for rate in rates {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(ProjectionError::invalid(format!(
                    "annual rate {} is not a usable growth rate",
                    rate
                )));
            }
        }

        Ok(Self { bands, final_rate })
    }

    /// Same rate for every year
    pub fn flat(annual_rate: f64) -> Result<Self> {
        Self::new(Vec::new(), annual_rate)
    }

    /// UN-style deceleration used by the dashboard:
    /// 1.0% through 2025, 0.8% through 2030, 0.5% through 2040, 0.3% after
    pub fn un_reference() -> Self {
        Self {
            bands: vec![
                GrowthBand { through_year: 2025, annual_rate: 0.010 },
                GrowthBand { through_year: 2030, annual_rate: 0.008 },
                GrowthBand { through_year: 2040, annual_rate: 0.005 },
            ],
            final_rate: 0.003,
        }
    }

    /// Annual rate (fraction) applying to `year`
    pub fn rate_for(&self, year: i32) -> f64 {
        self.bands
            .iter()
            .find(|band| band.through_year >= year)
            .map(|band| band.annual_rate)
            .unwrap_or(self.final_rate)
    }

    pub fn bands(&self) -> &[GrowthBand] {
        &self.bands
    }

    pub fn final_rate(&self) -> f64 {
        self.final_rate
    }
}

impl Default for GrowthSchedule {
    fn default() -> Self {
        Self::un_reference()
    }
}
