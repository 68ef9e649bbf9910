//! Required vs observed growth, and peer economies by GDP per capita

use serde::{Deserialize, Serialize};

/// Peers shown next to the projected per-capita GDP
pub const DEFAULT_PEER_COUNT: usize = 5;

/// Required growth set against the latest observed growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthComparison {
    /// Required annual growth, percent
    pub required_rate: f64,
    /// Latest observed annual growth, percent
    pub latest_rate: f64,
    pub latest_year: Option<i32>,
    /// Observed growth meets or beats the requirement
    pub on_track: bool,
}

impl GrowthComparison {
    pub fn new(required_rate: f64, latest_rate: f64, latest_year: Option<i32>) -> Self {
        Self {
            required_rate,
            latest_rate,
            latest_year,
            on_track: latest_rate >= required_rate,
        }
    }

    /// Percentage points by which observed growth exceeds the requirement
    pub fn gap(&self) -> f64 {
        self.latest_rate - self.required_rate
    }
}

/// A comparison country and its GDP per capita (USD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerEconomy {
    pub country: String,
    pub per_capita_gdp: f64,
}

impl PeerEconomy {
    pub fn new(country: impl Into<String>, per_capita_gdp: f64) -> Self {
        Self {
            country: country.into(),
            per_capita_gdp,
        }
    }
}

/// The `n` peers whose per-capita GDP is closest to `target_per_capita`
///
/// Peers without a finite figure are ignored. Ties keep input order.
pub fn closest_peers<'a>(
    peers: &'a [PeerEconomy],
    target_per_capita: f64,
    n: usize,
) -> Vec<&'a PeerEconomy> {
    let mut candidates: Vec<&PeerEconomy> = peers
        .iter()
        .filter(|p| p.per_capita_gdp.is_finite())
        .collect();

    candidates.sort_by(|a, b| {
        let da = (a.per_capita_gdp - target_per_capita).abs();
        let db = (b.per_capita_gdp - target_per_capita).abs();
        da.total_cmp(&db)
    });
    candidates.truncate(n);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peers() -> Vec<PeerEconomy> {
        vec![
            PeerEconomy::new("Luxembourg", 140_000.0),
            PeerEconomy::new("Brazil", 10_300.0),
            PeerEconomy::new("Mexico", 13_900.0),
            PeerEconomy::new("China", 13_300.0),
            PeerEconomy::new("Malaysia", 13_050.0),
            PeerEconomy::new("Unknown", f64::NAN),
            PeerEconomy::new("Thailand", 7_500.0),
            PeerEconomy::new("Argentina", 14_400.0),
        ]
    }

    #[test]
    fn test_closest_peers_ordered_by_distance() {
        let peers = peers();
        let closest = closest_peers(&peers, 13_500.0, 5);
        let names: Vec<&str> = closest.iter().map(|p| p.country.as_str()).collect();
        assert_eq!(names, vec!["China", "Mexico", "Malaysia", "Argentina", "Brazil"]);
    }

    #[test]
    fn test_closest_peers_ties_keep_input_order() {
        let peers = vec![
            PeerEconomy::new("A", 90.0),
            PeerEconomy::new("B", 110.0),
            PeerEconomy::new("C", 100.0),
        ];
        let closest = closest_peers(&peers, 100.0, 3);
        let names: Vec<&str> = closest.iter().map(|p| p.country.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_closest_peers_fewer_than_requested() {
        let peers = vec![PeerEconomy::new("A", 1.0)];
        assert_eq!(closest_peers(&peers, 5.0, 5).len(), 1);
        assert!(closest_peers(&[], 5.0, 5).is_empty());
    }

    #[test]
    fn test_growth_comparison() {
        let behind = GrowthComparison::new(9.6, 8.2, Some(2023));
        assert!(!behind.on_track);
        assert!(behind.gap() < 0.0);

        let ahead = GrowthComparison::new(6.0, 6.0, None);
        assert!(ahead.on_track);
    }
}
