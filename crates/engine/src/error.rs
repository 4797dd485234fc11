//! Engine error type.

use thiserror::Error;
use tracesort_core::ApiError;

/// Conditions the dispatcher signals instead of producing a trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Identifier not in the recognized set
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Search requested without a target
    #[error("missing search target")]
    MissingTarget,
}

/// Result type for dispatcher calls.
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::UnsupportedAlgorithm(name) => ApiError::UnsupportedAlgorithm { name },
            EngineError::MissingTarget => ApiError::MissingTarget,
        }
    }
}
