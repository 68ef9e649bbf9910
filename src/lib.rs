//! Growth Projection - numeric core of India's GDP growth dashboard
//!
//! This library provides:
//! - Required compound annual growth to reach a target GDP
//! - Population projection under a banded growth schedule
//! - Median age trend extrapolation and demographic classification
//! - Sector share trend projection and normalization
//! - Per-capita peer comparison and a runner composing all of the above

pub mod error;
pub mod series;
pub mod assumptions;
pub mod projection;
pub mod sectors;
pub mod demographics;
pub mod comparison;
pub mod outlook;

// Re-export commonly used types
pub use error::{DataError, ProjectionError};
pub use series::TimeSeriesPoint;
pub use assumptions::{Assumptions, GrowthSchedule};
pub use projection::{
    required_growth, MedianAgeProjector, PopulationProjector, SectorNormalizer,
    SectorProjection, SectorTrendProjector,
};
pub use sectors::SectorShareSet;
pub use outlook::{EconomicOutlook, OutlookInputs, OutlookRunner};
