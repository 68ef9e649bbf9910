//! Sector share sets and the agriculture / industry / services grouping

use crate::projection::SectorProjection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sector name -> percentage share of GDP
///
/// Shares need not sum to 100; see `SectorNormalizer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorShareSet(BTreeMap<String, f64>);

impl SectorShareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a share, returning the previous value
    pub fn insert(&mut self, sector: impl Into<String>, share: f64) -> Option<f64> {
        self.0.insert(sector.into(), share)
    }

    pub fn get(&self, sector: &str) -> Option<f64> {
        self.0.get(sector).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

impl FromIterator<(String, f64)> for SectorShareSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, f64>> for SectorShareSet {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

/// Top-level grouping of detailed sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorGroup {
    Agriculture,
    Industry,
    Services,
}

impl SectorGroup {
    pub const ALL: [SectorGroup; 3] = [
        SectorGroup::Agriculture,
        SectorGroup::Industry,
        SectorGroup::Services,
    ];

    /// Group of a detailed sector key
    ///
    /// Manufacturing, construction, mining and utilities are industry; any
    /// other non-agriculture key is a service.
    pub fn of(sector: &str) -> Self {
        match sector.trim().to_lowercase().as_str() {
            "agriculture" => SectorGroup::Agriculture,
            "industry" | "manufacturing" | "construction" | "mining" | "utilities" => {
                SectorGroup::Industry
            }
            _ => SectorGroup::Services,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SectorGroup::Agriculture => "agriculture",
            SectorGroup::Industry => "industry",
            SectorGroup::Services => "services",
        }
    }
}

impl fmt::Display for SectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SectorGroup::Agriculture => "Agriculture",
            SectorGroup::Industry => "Industry",
            SectorGroup::Services => "Services",
        };
        f.write_str(label)
    }
}

/// Sum detailed shares into the three groups
///
/// All three groups are present in the result, zero when nothing maps to them.
pub fn group_shares(detailed: &SectorShareSet) -> SectorShareSet {
    let mut grouped: SectorShareSet = SectorGroup::ALL
        .iter()
        .map(|g| (g.key().to_string(), 0.0))
        .collect();

    for (sector, share) in detailed.iter() {
        let key = SectorGroup::of(sector).key();
        let running = grouped.get(key).unwrap_or(0.0);
        grouped.insert(key, running + share);
    }
    grouped
}

/// Share set of projected values, ready for normalization
pub fn projected_shares(projections: &BTreeMap<String, SectorProjection>) -> SectorShareSet {
    projections
        .iter()
        .map(|(sector, p)| (sector.clone(), p.projected_value))
        .collect()
}
