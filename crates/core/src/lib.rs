//! Core types for tracesort
//!
//! This crate defines the data model shared by every other crate:
//! - [`Number`]: numeric sequence element (integer or float)
//! - [`SortStep`] / [`SearchStep`]: immutable trace snapshots
//! - [`SearchOutcome`]: search steps plus the sorted array they ran over
//! - [`AlgorithmId`]: the closed set of sorting algorithms
//! - [`TraceStats`]: playback counters over a sort trace
//! - [`ApiError`] / [`WireError`]: the canonical rejection taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api_error;
pub mod number;
pub mod stats;
pub mod step;
pub mod types;

pub use api_error::{ApiError, WireError};
pub use number::Number;
pub use stats::TraceStats;
pub use step::{index_range, IndexPair, SearchOutcome, SearchStep, SortStep};
pub use types::{AlgorithmId, Sequence};

/// A sort trace: steps in execution order.
pub type SortTrace = Vec<SortStep>;

/// A search trace: probes in execution order.
pub type SearchTrace = Vec<SearchStep>;
