//! Wire encoding for tracesort
//!
//! This crate implements the JSON request/response contract used by
//! transports sitting in front of the executor:
//!
//! | Route | Request | Response |
//! |-------|---------|----------|
//! | `/api/sort` | `{"array": [...], "algorithm": "..."}` | `{"steps": [...]}` |
//! | `/api/search` | `{"array": [...], "target": n}` | `{"steps": [...], "sorted_array": [...]}` |
//!
//! Errors are `{"error": "...", "code": "...", "details": ...}`.
//!
//! ## Examples
//!
//! ```
//! use tracesort_executor::Executor;
//! use tracesort_wire::{handle, Endpoint};
//!
//! let executor = Executor::new();
//! let resp = handle(&executor, Endpoint::Sort, r#"{"array":[2,1],"algorithm":"bubble"}"#);
//! assert_eq!(resp.status, 200);
//! assert_eq!(resp.body, r#"{"steps":[{"array":[1,2],"comparing":[0,1],"sorted":[0,1]}]}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_request, decode_search_request, decode_sort_request, encode_api_error, encode_output,
    handle, http_status, output_to_json, wire_error_to_json, DecodeError, Endpoint, WireResponse,
};
