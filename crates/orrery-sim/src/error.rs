//! Error types for the motion engine

use thiserror::Error;

/// Result type for motion-engine operations
pub type SimResult<T> = Result<T, ModelError>;

/// Errors raised when constructing or querying motion models
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("duplicate body name: {0}")]
    DuplicateBody(String),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Reject non-finite values (speeds, tilts, offsets)
pub(crate) fn require_finite(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter { name, value })
    }
}

/// Reject non-finite or non-positive values (radii)
pub(crate) fn require_positive(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter { name, value })
    }
}
