//! Error types for the projection core and the data loaders

use thiserror::Error;

/// Why a projection produced no value
///
/// Every variant is recoverable: callers render a placeholder instead of
/// the number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Non-positive values, non-positive horizon, bad schedule, ...
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer observations than the projector needs
    #[error("insufficient data: need at least {required} points, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// Division by zero or a fractional power of a non-positive base
    #[error("degenerate computation: {0}")]
    DegenerateComputation(String),
}

impl ProjectionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ProjectionError::InvalidInput(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        ProjectionError::DegenerateComputation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while reading assumption or series files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data in {file}: {reason}")]
    Invalid { file: String, reason: String },

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
