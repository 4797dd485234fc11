//! Unified error type for the tracesort facade.

use thiserror::Error;
use tracesort_core::ApiError;

/// All tracesort errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Algorithm identifier not recognized
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Search requested without a target
    #[error("search target not provided")]
    MissingTarget,

    /// Input failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input longer than the configured limit
    #[error("input of {len} elements exceeds limit of {limit}")]
    InputTooLarge {
        /// Rejected length
        len: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Unknown route
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for tracesort operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an unsupported-algorithm error.
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, Error::UnsupportedAlgorithm(_))
    }

    /// Check if this is a missing-target error.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Error::MissingTarget)
    }

    /// Check if the caller's input was rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::InputTooLarge { .. } | Error::Serialization(_)
        )
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

impl From<tracesort_executor::Error> for Error {
    fn from(e: tracesort_executor::Error) -> Self {
        use tracesort_executor::Error as ExecError;
        match e {
            ExecError::UnsupportedAlgorithm { name } => Error::UnsupportedAlgorithm(name),
            ExecError::MissingTarget => Error::MissingTarget,
            ExecError::InvalidInput { reason } => Error::InvalidInput(reason),
            ExecError::InputTooLarge { len, limit } => Error::InputTooLarge { len, limit },
            ExecError::Internal { reason } => Error::Internal(reason),
        }
    }
}

impl From<tracesort_engine::EngineError> for Error {
    fn from(e: tracesort_engine::EngineError) -> Self {
        tracesort_executor::Error::from(e).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::UnsupportedAlgorithm(name) => ApiError::UnsupportedAlgorithm { name },
            Error::MissingTarget => ApiError::MissingTarget,
            Error::InvalidInput(reason) | Error::Serialization(reason) => {
                ApiError::InvalidInput { reason }
            }
            Error::InputTooLarge { len, limit } => ApiError::InputTooLarge { len, limit },
            Error::NotFound(path) => ApiError::InvalidInput {
                reason: format!("unknown route {}", path),
            },
            Error::Internal(message) => ApiError::Internal { message },
        }
    }
}
