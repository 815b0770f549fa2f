//! Error type for polygon transformation operations.

use thiserror::Error;

/// Error type for polygon transformation operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A caller-supplied parameter cannot be used: zero scale factor,
    /// missing slope, unknown reflection mode or too few points.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl TransformError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TransformError::InvalidParameter(reason.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TransformError>;
