//! Executor error type.

use thiserror::Error;
use tracesort_core::ApiError;
use tracesort_engine::EngineError;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
///
/// A failed command never produces partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Algorithm identifier not recognized
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm {
        /// Requested identifier
        name: String,
    },

    /// Search without a target
    #[error("search target not provided")]
    MissingTarget,

    /// Input failed validation
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why it was rejected
        reason: String,
    },

    /// Input longer than the configured limit
    #[error("input of {len} elements exceeds limit of {limit}")]
    InputTooLarge {
        /// Rejected length
        len: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Invariant violation
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::UnsupportedAlgorithm(name) => Error::UnsupportedAlgorithm { name },
            EngineError::MissingTarget => Error::MissingTarget,
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::UnsupportedAlgorithm { name } => ApiError::UnsupportedAlgorithm { name },
            Error::MissingTarget => ApiError::MissingTarget,
            Error::InvalidInput { reason } => ApiError::InvalidInput { reason },
            Error::InputTooLarge { len, limit } => ApiError::InputTooLarge { len, limit },
            Error::Internal { reason } => ApiError::Internal { message: reason },
        }
    }
}
