//! Outlook runner: composes the projectors into one dashboard result
//!
//! Holds the assumptions once and evaluates any number of inputs against
//! them. Individual projections that fail become absent fields (rendered as
//! "N/A") with a warning in the log; only invalid headline inputs fail the
//! whole run.

use crate::comparison::{closest_peers, GrowthComparison, PeerEconomy};
use crate::demographics::{per_capita, AgeCategory, DependencyLevel};
use crate::error::{ProjectionError, Result};
use crate::projection::{
    required_growth, MedianAgeProjector, PopulationProjector, SectorNormalizer,
    SectorProjection, SectorTrendProjector,
};
use crate::sectors::{projected_shares, SectorShareSet};
use crate::series::TimeSeriesPoint;
use crate::Assumptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the data-fetch layer managed to collect
///
/// Observations are `(year, value)` points; `None` means the source failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlookInputs {
    /// Current GDP, USD
    pub current_gdp: f64,
    /// Target GDP, USD
    pub target_gdp: f64,
    pub current_year: i32,
    pub target_year: i32,

    /// Latest real GDP growth, percent
    #[serde(default)]
    pub latest_growth: Option<TimeSeriesPoint>,
    #[serde(default)]
    pub population: Option<TimeSeriesPoint>,
    #[serde(default)]
    pub median_age: Option<TimeSeriesPoint>,
    /// Dependency ratio, percent
    #[serde(default)]
    pub dependency_ratio: Option<TimeSeriesPoint>,

    /// Median age history; the assumptions' reference series when absent
    #[serde(default)]
    pub median_age_history: Option<Vec<TimeSeriesPoint>>,

    /// Share of GDP by sector over time
    #[serde(default)]
    pub sector_histories: BTreeMap<String, Vec<TimeSeriesPoint>>,

    /// Latest sector shares of comparison countries, by country
    #[serde(default)]
    pub peer_sector_shares: BTreeMap<String, SectorShareSet>,

    #[serde(default)]
    pub peers: Vec<PeerEconomy>,
}

/// Computed dashboard values; absent fields are displayed as placeholders
#[derive(Debug, Clone, Serialize)]
pub struct EconomicOutlook {
    pub current_year: i32,
    pub target_year: i32,
    pub horizon_years: i32,

    /// Required annual growth, percent
    pub required_growth: Option<f64>,
    pub growth_comparison: Option<GrowthComparison>,

    pub current_per_capita: Option<f64>,
    pub projected_population: Option<f64>,
    /// Target GDP over projected population (observed population if no projection)
    pub projected_per_capita: Option<f64>,
    pub closest_peers: Vec<PeerEconomy>,

    pub age_category: Option<AgeCategory>,
    pub dependency_level: Option<DependencyLevel>,
    pub projected_median_age: Option<f64>,

    pub sector_projections: BTreeMap<String, SectorProjection>,
    /// Projected sector values rescaled to 100
    pub projected_sector_shares: Option<SectorShareSet>,
    /// Comparison countries whose shares could be normalized
    pub peer_sector_shares: BTreeMap<String, SectorShareSet>,
}

/// Pre-loaded outlook runner
///
/// # Example
/// ```ignore
/// let runner = OutlookRunner::from_csv()?;
/// let outlook = runner.run(&inputs)?;
/// println!("{:?}", outlook.required_growth);
/// ```
#[derive(Debug, Clone)]
pub struct OutlookRunner {
    assumptions: Assumptions,
}

impl OutlookRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_reference(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> std::result::Result<Self, crate::error::DataError> {
        Ok(Self {
            assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(
        path: &std::path::Path,
    ) -> std::result::Result<Self, crate::error::DataError> {
        Ok(Self {
            assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }

    pub fn population_projector(&self) -> PopulationProjector {
        PopulationProjector::new(self.assumptions.population_schedule.clone())
    }

    pub fn median_age_projector(&self) -> MedianAgeProjector {
        MedianAgeProjector::new(self.assumptions.median_age_fallback_delta)
    }

    pub fn sector_projector(&self) -> SectorTrendProjector {
        SectorTrendProjector::new(self.assumptions.min_trend_samples)
    }

    pub fn normalizer(&self) -> SectorNormalizer {
        SectorNormalizer::new(self.assumptions.min_sector_entries)
    }

    /// Evaluate one set of inputs
    ///
    /// # Errors
    /// `InvalidInput` when either GDP is not positive or the target year is
    /// not after the current year.
    pub fn run(&self, inputs: &OutlookInputs) -> Result<EconomicOutlook> {
        if !(inputs.current_gdp > 0.0) || !(inputs.target_gdp > 0.0) {
            return Err(ProjectionError::invalid(
                "current and target GDP must be positive",
            ));
        }
        if inputs.target_year <= inputs.current_year {
            return Err(ProjectionError::invalid(format!(
                "target year {} must be after {}",
                inputs.target_year, inputs.current_year
            )));
        }

        let horizon_years = inputs
            .target_year
            .checked_sub(inputs.current_year)
            .ok_or_else(|| ProjectionError::invalid("horizon does not fit in a year count"))?;
        let required = placeholder(
            "required growth",
            required_growth(inputs.current_gdp, inputs.target_gdp, f64::from(horizon_years)),
        );

        let growth_comparison = match (required, inputs.latest_growth) {
            (Some(required), Some(latest)) => {
                Some(GrowthComparison::new(required, latest.value, Some(latest.year)))
            }
            _ => None,
        };

        // Population and per capita
        let projected_population = inputs.population.and_then(|pop| {
            if inputs.target_year > pop.year {
                placeholder(
                    "population projection",
                    self.population_projector()
                        .project(pop.value, pop.year, inputs.target_year),
                )
            } else {
                None
            }
        });

        let current_per_capita = inputs.population.and_then(|pop| {
            placeholder("current per capita", per_capita(inputs.current_gdp, pop.value))
        });

        let projected_per_capita = projected_population
            .or(inputs.population.map(|pop| pop.value))
            .and_then(|pop| {
                placeholder("projected per capita", per_capita(inputs.target_gdp, pop))
            });

        let peers: Vec<PeerEconomy> = projected_per_capita
            .map(|target| {
                closest_peers(&inputs.peers, target, self.assumptions.peer_count)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        // Demographics
        let age_category = inputs
            .median_age
            .map(|age| AgeCategory::from_median_age(age.value));
        let dependency_level = inputs
            .dependency_ratio
            .map(|ratio| DependencyLevel::from_ratio(ratio.value));

        let history = inputs
            .median_age_history
            .as_deref()
            .unwrap_or(self.assumptions.median_age_history.as_slice());
        let projected_median_age = inputs.median_age.and_then(|age| {
            placeholder(
                "median age projection",
                self.median_age_projector()
                    .project(age.value, age.year, inputs.target_year, history),
            )
        });

        // Sectors
        let sector_projections = self
            .sector_projector()
            .project_all(&inputs.sector_histories, inputs.target_year);

        let projected_sector_shares = if sector_projections.is_empty() {
            None
        } else {
            placeholder(
                "projected sector shares",
                self.normalizer().normalize(&projected_shares(&sector_projections)),
            )
        };

        let normalizer = self.normalizer();
        let peer_sector_shares = inputs
            .peer_sector_shares
            .iter()
            .filter_map(|(country, shares)| {
                placeholder(country, normalizer.normalize(shares))
                    .map(|normalized| (country.clone(), normalized))
            })
            .collect();

        Ok(EconomicOutlook {
            current_year: inputs.current_year,
            target_year: inputs.target_year,
            horizon_years,
            required_growth: required,
            growth_comparison,
            current_per_capita,
            projected_population,
            projected_per_capita,
            closest_peers: peers,
            age_category,
            dependency_level,
            projected_median_age,
            sector_projections,
            projected_sector_shares,
            peer_sector_shares,
        })
    }

    /// Evaluate many inputs against the same assumptions
    pub fn run_batch(&self, inputs: &[OutlookInputs]) -> Vec<Result<EconomicOutlook>> {
        inputs.iter().map(|i| self.run(i)).collect()
    }
}

impl Default for OutlookRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the value, or log why it will be shown as a placeholder
fn placeholder<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}: {}", what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::GrowthSchedule;
    use crate::series::series_from_pairs;
    use approx::assert_relative_eq;

    fn base_inputs() -> OutlookInputs {
        OutlookInputs {
            current_gdp: 4.0e12,
            target_gdp: 3.0e13,
            current_year: 2025,
            target_year: 2047,
            ..Default::default()
        }
    }

    fn full_inputs() -> OutlookInputs {
        let mut sector_histories = BTreeMap::new();
        sector_histories.insert(
            "agriculture".to_string(),
            series_from_pairs(&[(2015, 18.0), (2019, 17.0), (2023, 16.0)]),
        );
        sector_histories.insert(
            "industry".to_string(),
            series_from_pairs(&[(2015, 26.0), (2019, 26.0), (2023, 26.0)]),
        );
        sector_histories.insert(
            "services".to_string(),
            series_from_pairs(&[(2015, 48.0), (2019, 50.0), (2023, 52.0)]),
        );

        let mut peer_sector_shares = BTreeMap::new();
        peer_sector_shares.insert(
            "China".to_string(),
            [("agriculture", 7.0), ("industry", 38.0), ("services", 55.0)]
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        );
        peer_sector_shares.insert(
            "Nowhere".to_string(),
            [("agriculture", 7.0)].iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        );

        OutlookInputs {
            latest_growth: Some(TimeSeriesPoint::new(2024, 6.5)),
            population: Some(TimeSeriesPoint::new(2024, 1.45e9)),
            median_age: Some(TimeSeriesPoint::new(2023, 28.7)),
            dependency_ratio: Some(TimeSeriesPoint::new(2023, 47.0)),
            sector_histories,
            peer_sector_shares,
            peers: vec![
                PeerEconomy::new("Poland", 25_000.0),
                PeerEconomy::new("Chile", 17_000.0),
                PeerEconomy::new("Hungary", 23_000.0),
            ],
            ..base_inputs()
        }
    }

    #[test]
    fn test_minimal_inputs_give_placeholders() {
        let outlook = OutlookRunner::new().run(&base_inputs()).unwrap();

        assert_eq!(outlook.horizon_years, 22);
        assert!(outlook.required_growth.is_some());
        assert!(outlook.growth_comparison.is_none());
        assert!(outlook.projected_population.is_none());
        assert!(outlook.projected_per_capita.is_none());
        assert!(outlook.closest_peers.is_empty());
        assert!(outlook.projected_median_age.is_none());
        assert!(outlook.sector_projections.is_empty());
        assert!(outlook.projected_sector_shares.is_none());
    }

    #[test]
    fn test_invalid_headline_inputs() {
        let runner = OutlookRunner::new();

        let mut inputs = base_inputs();
        inputs.current_gdp = 0.0;
        assert!(runner.run(&inputs).is_err());

        let mut inputs = base_inputs();
        inputs.target_year = inputs.current_year;
        assert!(matches!(runner.run(&inputs), Err(ProjectionError::InvalidInput(_))));

        let mut inputs = base_inputs();
        inputs.current_year = i32::MIN;
        inputs.target_year = i32::MAX;
        assert!(matches!(runner.run(&inputs), Err(ProjectionError::InvalidInput(_))));
    }

    #[test]
    fn test_full_outlook() {
        let runner = OutlookRunner::new();
        let outlook = runner.run(&full_inputs()).unwrap();

        let required = outlook.required_growth.unwrap();
        assert_relative_eq!(
            required,
            100.0 * ((3.0e13f64 / 4.0e12).powf(1.0 / 22.0) - 1.0),
            epsilon = 1e-9
        );

        let comparison = outlook.growth_comparison.unwrap();
        assert!(!comparison.on_track);
        assert_eq!(comparison.latest_year, Some(2024));

        // Population compounded from 2024 under the reference schedule
        let expected_pop = runner.population_projector().project(1.45e9, 2024, 2047).unwrap();
        assert_relative_eq!(outlook.projected_population.unwrap(), expected_pop);
        assert_relative_eq!(outlook.current_per_capita.unwrap(), 4.0e12 / 1.45e9);
        assert_relative_eq!(outlook.projected_per_capita.unwrap(), 3.0e13 / expected_pop);

        // ~18.3k per capita: Chile, Hungary, Poland in that order
        let names: Vec<&str> = outlook.closest_peers.iter().map(|p| p.country.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Hungary", "Poland"]);

        assert_eq!(outlook.age_category, Some(AgeCategory::Young));
        assert_eq!(outlook.dependency_level, Some(DependencyLevel::Low));
        assert_eq!(outlook.projected_median_age, Some(32.1));

        assert_eq!(outlook.sector_projections.len(), 3);
        let agriculture = &outlook.sector_projections["agriculture"];
        assert_eq!(agriculture.current_value, 16.0);
        assert_relative_eq!(agriculture.projected_value, 10.0, epsilon = 1e-9);

        let shares = outlook.projected_sector_shares.unwrap();
        assert_relative_eq!(shares.total(), 100.0, epsilon = 1e-9);

        assert_eq!(outlook.peer_sector_shares.len(), 1);
        assert!(outlook.peer_sector_shares.contains_key("China"));
    }

    #[test]
    fn test_population_observed_after_target() {
        let mut inputs = base_inputs();
        inputs.target_year = 2030;
        inputs.population = Some(TimeSeriesPoint::new(2031, 1.5e9));

        let outlook = OutlookRunner::new().run(&inputs).unwrap();
        assert!(outlook.projected_population.is_none());
        // Falls back to the observed population
        assert_relative_eq!(outlook.projected_per_capita.unwrap(), 3.0e13 / 1.5e9);
    }

    #[test]
    fn test_injected_assumptions() {
        let mut runner = OutlookRunner::new();
        runner.assumptions_mut().population_schedule = GrowthSchedule::flat(0.0).unwrap();
        runner.assumptions_mut().peer_count = 1;

        let outlook = runner.run(&full_inputs()).unwrap();
        assert_relative_eq!(outlook.projected_population.unwrap(), 1.45e9);
        assert_eq!(outlook.closest_peers.len(), 1);
    }

    #[test]
    fn test_custom_median_age_history() {
        let mut inputs = base_inputs();
        inputs.median_age = Some(TimeSeriesPoint::new(2025, 30.0));
        inputs.median_age_history = Some(series_from_pairs(&[(2000, 20.0), (2020, 30.0)]));

        let outlook = OutlookRunner::new().run(&inputs).unwrap();
        // 0.5 years per year over 22 years
        assert_eq!(outlook.projected_median_age, Some(41.0));
        assert_eq!(outlook.age_category, Some(AgeCategory::MiddleAged));
    }

    #[test]
    fn test_run_batch() {
        let runner = OutlookRunner::new();
        let mut bad = base_inputs();
        bad.target_gdp = -1.0;

        let results = runner.run_batch(&[base_inputs(), bad]);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_inputs_deserialize_with_defaults() {
        let json = r#"{
            "current_gdp": 4.0e12,
            "target_gdp": 3.0e13,
            "current_year": 2025,
            "target_year": 2047,
            "population": { "year": 2024, "value": 1.45e9 }
        }"#;
        let inputs: OutlookInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.population, Some(TimeSeriesPoint::new(2024, 1.45e9)));
        assert!(inputs.sector_histories.is_empty());
        assert!(inputs.latest_growth.is_none());
    }
}
