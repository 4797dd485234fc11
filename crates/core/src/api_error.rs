//! API-level error types for wire encoding
//!
//! This module defines the `ApiError` enum surfaced to callers of the trace
//! engine and the `WireError` struct used for JSON wire encoding.
//!
//! ## Wire Format
//!
//! All errors encode to JSON as:
//! ```json
//! {
//!   "code": "UnsupportedAlgorithm",
//!   "message": "Algorithm not implemented: shell",
//!   "details": {"name": "shell"}
//! }
//! ```
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | UnsupportedAlgorithm | Requested algorithm identifier is not recognized |
//! | MissingTarget | Search requested without a target value |
//! | InvalidInput | Input sequence or target fails validation |
//! | InputTooLarge | Input longer than the configured limit |
//! | Internal | Bug or invariant violation |

use serde_json::{json, Value};

/// Wire error representation for JSON encoding
#[derive(Debug, Clone, PartialEq)]
pub struct WireError {
    /// The canonical error code (e.g., "MissingTarget")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details as a JSON object
    pub details: Option<Value>,
}

/// API-level error type.
///
/// Every rejection a caller can observe maps to one of these variants. None
/// of them is retryable: trace generation is deterministic, so the same
/// request fails the same way every time.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Algorithm identifier not in the recognized set
    UnsupportedAlgorithm {
        /// The identifier that was requested
        name: String,
    },

    /// Search requested without a target
    MissingTarget,

    /// Precondition violation in the input
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Input exceeds the configured size limit
    InputTooLarge {
        /// Length of the rejected input
        len: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Internal error (bug or invariant violation)
    Internal {
        /// Error message
        message: String,
    },
}

impl ApiError {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::UnsupportedAlgorithm { .. } => "UnsupportedAlgorithm",
            ApiError::MissingTarget => "MissingTarget",
            ApiError::InvalidInput { .. } => "InvalidInput",
            ApiError::InputTooLarge { .. } => "InputTooLarge",
            ApiError::Internal { .. } => "Internal",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            ApiError::UnsupportedAlgorithm { name } => {
                format!("Algorithm not implemented: {}", name)
            }
            ApiError::MissingTarget => "Target value not provided".to_string(),
            ApiError::InvalidInput { reason } => format!("Invalid input: {}", reason),
            ApiError::InputTooLarge { len, limit } => {
                format!("Input too large: {} elements exceeds limit of {}", len, limit)
            }
            ApiError::Internal { message } => format!("Internal error: {}", message),
        }
    }

    /// True for rejections caused by the request rather than the engine.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ApiError::Internal { .. })
    }

    /// Convert to wire error format
    pub fn to_wire_error(&self) -> WireError {
        WireError {
            code: self.error_code().to_string(),
            message: self.message(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            ApiError::UnsupportedAlgorithm { name } => Some(json!({ "name": name })),
            ApiError::MissingTarget => None,
            ApiError::InvalidInput { reason } => Some(json!({ "reason": reason })),
            ApiError::InputTooLarge { len, limit } => Some(json!({ "len": len, "limit": limit })),
            ApiError::Internal { message } => Some(json!({ "message": message })),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}
