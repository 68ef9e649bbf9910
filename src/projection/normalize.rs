//! Rescale sector shares so they sum to exactly 100

use crate::error::{ProjectionError, Result};
use crate::sectors::SectorShareSet;

/// Minimum positive entries for a share set to count as meaningful
pub const DEFAULT_MIN_SECTOR_ENTRIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorNormalizer {
    min_entries: usize,
}

impl SectorNormalizer {
    pub fn new(min_entries: usize) -> Self {
        Self { min_entries }
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// `normalized[k] = shares[k] / total * 100`
    ///
    /// # Errors
    /// - `InvalidInput` for a negative or non-finite share
    /// - `InsufficientData` when fewer than `min_entries` shares are positive
    /// - `DegenerateComputation` when the total is not positive or overflows
    pub fn normalize(&self, shares: &SectorShareSet) -> Result<SectorShareSet> {
        if let Some((sector, value)) = shares.iter().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            return Err(ProjectionError::invalid(format!(
                "share for {} must be a non-negative number, got {}",
                sector, value
            )));
        }

        let populated = shares.iter().filter(|(_, v)| **v > 0.0).count();
        if populated < self.min_entries.max(1) {
            return Err(ProjectionError::InsufficientData {
                required: self.min_entries.max(1),
                available: populated,
            });
        }

        let total = shares.total();
        if !(total > 0.0) {
            return Err(ProjectionError::degenerate("share total is zero"));
        }
        if !total.is_finite() {
            return Err(ProjectionError::degenerate("share total overflows"));
        }

        Ok(shares
            .iter()
            .map(|(sector, value)| (sector.clone(), value / total * 100.0))
            .collect())
    }
}

impl Default for SectorNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SECTOR_ENTRIES)
    }
}
