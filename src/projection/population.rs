//! Population projection under a banded annual growth schedule

use crate::assumptions::GrowthSchedule;
use crate::error::{ProjectionError, Result};
use crate::series::TimeSeriesPoint;

/// Compounds a base population forward one calendar year at a time
#[derive(Debug, Clone, Default)]
pub struct PopulationProjector {
    schedule: GrowthSchedule,
}

impl PopulationProjector {
    pub fn new(schedule: GrowthSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &GrowthSchedule {
        &self.schedule
    }

    /// Population in `target_year`
    ///
    /// Each year `y` in `base_year+1..=target_year` multiplies by `1 + rate(y)`.
    ///
    /// # Errors
    /// `InvalidInput` if `target_year <= base_year` or the base population is
    /// not a positive finite number.
    pub fn project(&self, base_population: f64, base_year: i32, target_year: i32) -> Result<f64> {
        Self::validate(base_population, base_year, target_year)?;

        let projected = ((base_year + 1)..=target_year)
            .fold(base_population, |pop, year| pop * (1.0 + self.schedule.rate_for(year)));

        log::debug!(
            "population {:.0} ({}) -> {:.0} ({})",
            base_population, base_year, projected, target_year
        );
        Ok(projected)
    }

    /// Year-by-year path from `base_year+1` through `target_year`
    pub fn project_path(
        &self,
        base_population: f64,
        base_year: i32,
        target_year: i32,
    ) -> Result<Vec<TimeSeriesPoint>> {
        Self::validate(base_population, base_year, target_year)?;

        let mut pop = base_population;
        let path = ((base_year + 1)..=target_year)
            .map(|year| {
                pop *= 1.0 + self.schedule.rate_for(year);
                TimeSeriesPoint::new(year, pop)
            })
            .collect();
        Ok(path)
    }

    fn validate(base_population: f64, base_year: i32, target_year: i32) -> Result<()> {
        if target_year <= base_year {
            return Err(ProjectionError::invalid(format!(
                "invalid range: target year {} must be after base year {}",
                target_year, base_year
            )));
        }
        if !(base_population > 0.0) || !base_population.is_finite() {
            return Err(ProjectionError::invalid(format!(
                "base population must be positive, got {}",
                base_population
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::GrowthBand;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_one_percent_two_years() {
        let projector = PopulationProjector::new(GrowthSchedule::flat(0.01).unwrap());
        let pop = projector.project(1000.0, 2020, 2022).unwrap();
        assert_relative_eq!(pop, 1020.1, epsilon = 1e-9);
    }

    #[test]
    fn test_same_year_rejected() {
        let projector = PopulationProjector::default();
        let result = projector.project(1000.0, 2023, 2023);
        assert!(matches!(result, Err(ProjectionError::InvalidInput(_))));
        assert!(projector.project(1000.0, 2023, 2020).is_err());
    }

    #[test]
    fn test_non_positive_population_rejected() {
        let projector = PopulationProjector::default();
        assert!(projector.project(0.0, 2023, 2030).is_err());
        assert!(projector.project(f64::NAN, 2023, 2030).is_err());
    }

    #[test]
    fn test_reference_schedule_crosses_bands() {
        // 2024-2025 at 1.0%, 2026-2030 at 0.8%, 2031-2040 at 0.5%, 2041-2047 at 0.3%
        let projector = PopulationProjector::default();
        let pop = projector.project(1.0, 2023, 2047).unwrap();
        let expected = 1.01f64.powi(2) * 1.008f64.powi(5) * 1.005f64.powi(10) * 1.003f64.powi(7);
        assert_relative_eq!(pop, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_injected_schedule() {
        let schedule = GrowthSchedule::new(
            vec![GrowthBand { through_year: 2021, annual_rate: 0.10 }],
            0.0,
        )
        .unwrap();
        let projector = PopulationProjector::new(schedule);
        let pop = projector.project(100.0, 2019, 2025).unwrap();
        assert_relative_eq!(pop, 121.0, epsilon = 1e-9);
    }

    #[test]
    fn test_path_ends_at_projection() {
        let projector = PopulationProjector::default();
        let path = projector.project_path(1.4e9, 2023, 2030).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first().unwrap().year, 2024);
        assert_eq!(path.last().unwrap().year, 2030);
        let direct = projector.project(1.4e9, 2023, 2030).unwrap();
        assert_relative_eq!(path.last().unwrap().value, direct, max_relative = 1e-12);
    }
}
