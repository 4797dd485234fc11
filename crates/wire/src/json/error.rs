//! Wire error encoding
//!
//! Errors encode as:
//! ```json
//! {
//!   "error": "Algorithm not implemented: shell",
//!   "code": "UnsupportedAlgorithm",
//!   "details": {"name": "shell"}
//! }
//! ```
//! `error` carries the human-readable message that HTTP clients display;
//! `code` and `details` are for programmatic callers.

use serde_json::{json, Value};
use tracesort_core::{ApiError, WireError};

/// Build the JSON body for a wire error.
pub fn wire_error_to_json(error: &WireError) -> Value {
    json!({
        "error": error.message,
        "code": error.code,
        "details": error.details.clone().unwrap_or(Value::Null),
    })
}

/// Encode an ApiError directly to JSON wire format
pub fn encode_api_error(error: &ApiError) -> String {
    wire_error_to_json(&error.to_wire_error()).to_string()
}

/// HTTP status a transport should use for an error.
///
/// Request problems are 400, engine faults 500.
pub fn http_status(error: &ApiError) -> u16 {
    if error.is_client_error() {
        400
    } else {
        500
    }
}
