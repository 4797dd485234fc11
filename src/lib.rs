//! # tracesort
//!
//! Step-by-step traces of classic sorting and search algorithms.
//!
//! Every algorithm runs over a private copy of the input and records an
//! immutable snapshot of the working array at each comparison, swap or
//! placement. Replaying the snapshots in order animates the algorithm.
//!
//! ## Quick Start
//!
//! ```
//! use tracesort::prelude::*;
//!
//! let steps = tracesort::sort("insertion", ints(&[3, 1, 2]))?;
//! assert_eq!(steps.last().unwrap().array, ints(&[1, 2, 3]));
//!
//! let outcome = tracesort::search(ints(&[5, 3, 1, 4]), 4.into())?;
//! assert_eq!(outcome.sorted_array, ints(&[1, 3, 4, 5]));
//! assert_eq!(outcome.found_index(), Some(2));
//! # Ok::<(), tracesort::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `tracesort-core` - data model and error taxonomy
//! - `tracesort-engine` - the algorithms and the dispatcher
//! - `tracesort-executor` - validation, limits, typed [`TraceSort`] front end
//! - `tracesort-wire` - JSON request/response envelopes

#![warn(missing_docs)]

mod error;
mod types;

pub mod prelude;

pub use error::{Error, Result};
pub use types::*;

/// Generate a sort trace with default options.
pub fn sort(algorithm: &str, values: Vec<Number>) -> Result<Vec<SortStep>> {
    TraceSort::new().sort(algorithm, values).map_err(Error::from)
}

/// Sort a copy of `values` and trace a binary search for `target` in it.
pub fn search(values: Vec<Number>, target: Number) -> Result<SearchOutcome> {
    TraceSort::new().search(values, target).map_err(Error::from)
}

/// Answer a JSON request body the way the HTTP routes would.
///
/// `path` is `/api/sort` or `/api/search`.
pub fn handle_json(path: &str, body: &str) -> Result<String> {
    let endpoint = Endpoint::from_path(path).ok_or_else(|| Error::NotFound(path.to_string()))?;
    let executor = Executor::new();
    let resp = tracesort_wire::handle(&executor, endpoint, body);
    Ok(resp.body)
}
