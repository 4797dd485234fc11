//! JSON request decoding
//!
//! Request bodies for the two HTTP routes, `/api/sort` and `/api/search`:
//!
//! - sort: `{"array": [...], "algorithm": "quick"}`
//! - search: `{"array": [...], "target": 4}`
//!
//! A missing `array` decodes as an empty sequence. A missing `algorithm`
//! leaves the choice to the executor's configured default; an explicit
//! `null` names no known algorithm and is rejected as `UnsupportedAlgorithm`.
//! A missing or `null` target decodes fine and is rejected later as
//! `MissingTarget`.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracesort_core::{ApiError, Number};
use tracesort_executor::Command;

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body is valid JSON but not an object
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// A field has the wrong shape
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// What was wrong
        reason: String,
    },
}

impl From<DecodeError> for ApiError {
    fn from(e: DecodeError) -> Self {
        ApiError::InvalidInput {
            reason: e.to_string(),
        }
    }
}

/// Which route a request body is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/api/sort`
    Sort,
    /// `/api/search`
    Search,
}

impl Endpoint {
    /// Route path served by this endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Sort => "/api/sort",
            Endpoint::Search => "/api/search",
        }
    }

    /// Resolve a route path.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/api/sort" => Some(Endpoint::Sort),
            "/api/search" => Some(Endpoint::Search),
            _ => None,
        }
    }

    /// Guess the endpoint from a body: any body with a `target` key is a
    /// search request.
    pub fn infer(body: &str) -> Result<Self, DecodeError> {
        match parse_object(body)? {
            map if map.contains_key("target") => Ok(Endpoint::Search),
            _ => Ok(Endpoint::Sort),
        }
    }
}

fn parse_object(body: &str) -> Result<serde_json::Map<String, Value>, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject),
    }
}

fn field_error(field: &'static str, e: serde_json::Error) -> DecodeError {
    DecodeError::InvalidField {
        field,
        reason: e.to_string(),
    }
}

/// Decode a sort request body into a [`Command::Sort`].
pub fn decode_sort_request(body: &str) -> Result<Command, DecodeError> {
    let map = parse_object(body)?;
    let array = decode_array(&map)?;
    let algorithm = match map.get("algorithm") {
        None => None,
        Some(Value::Null) => Some("null".to_string()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(DecodeError::InvalidField {
                field: "algorithm",
                reason: format!("expected a string, got {}", other),
            })
        }
    };
    Ok(Command::Sort {
        algorithm,
        values: array,
    })
}

/// Decode a search request body into a [`Command::Search`].
pub fn decode_search_request(body: &str) -> Result<Command, DecodeError> {
    let map = parse_object(body)?;
    let array = decode_array(&map)?;
    let target = match map.get("target") {
        None | Some(Value::Null) => None,
        Some(v) => Some(Number::deserialize(v).map_err(|e| field_error("target", e))?),
    };
    Ok(Command::Search {
        values: array,
        target,
    })
}

/// Decode a body for the given endpoint.
pub fn decode_request(endpoint: Endpoint, body: &str) -> Result<Command, DecodeError> {
    match endpoint {
        Endpoint::Sort => decode_sort_request(body),
        Endpoint::Search => decode_search_request(body),
    }
}

fn decode_array(map: &serde_json::Map<String, Value>) -> Result<Vec<Number>, DecodeError> {
    match map.get("array") {
        None => Ok(Vec::new()),
        Some(v) => Vec::<Number>::deserialize(v).map_err(|e| field_error("array", e)),
    }
}
