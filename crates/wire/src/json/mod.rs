//! JSON wire envelopes
//!
//! Decodes request bodies into executor commands and encodes outputs and
//! errors into response bodies. [`handle`] strings the three together the
//! way an HTTP route handler would.

mod decode;
mod encode;
mod error;

pub use decode::{
    decode_request, decode_search_request, decode_sort_request, DecodeError, Endpoint,
};
pub use encode::{encode_output, output_to_json};
pub use error::{encode_api_error, http_status, wire_error_to_json};

use tracesort_core::ApiError;
use tracesort_executor::Executor;

/// A fully encoded response: status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    /// HTTP-style status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

/// Decode `body` for `endpoint`, execute it, and encode the result.
///
/// Never fails: every rejection becomes an error body.
pub fn handle(executor: &Executor, endpoint: Endpoint, body: &str) -> WireResponse {
    let result = decode_request(endpoint, body)
        .map_err(ApiError::from)
        .and_then(|cmd| executor.execute(cmd).map_err(ApiError::from));

    match result {
        Ok(output) => WireResponse {
            status: 200,
            body: encode_output(&output),
        },
        Err(e) => WireResponse {
            status: http_status(&e),
            body: encode_api_error(&e),
        },
    }
}
