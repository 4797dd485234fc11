//! Trace-generation engine for tracesort
//!
//! Runs classic sorting and search algorithms to completion while recording
//! a snapshot at every comparison or state change, so a presentation layer
//! can replay the run step by step.
//!
//! # Example
//!
//! ```
//! use tracesort_core::number::ints;
//! use tracesort_engine::run_sort;
//!
//! let steps = run_sort("bubble", &ints(&[3, 1, 2])).unwrap();
//! let last = steps.last().unwrap();
//! assert_eq!(last.array, ints(&[1, 2, 3]));
//! assert_eq!(last.sorted, vec![0, 1, 2]);
//! ```
//!
//! Every call works on a private copy of its input and touches no shared
//! state, so concurrent calls need no coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod error;
pub mod recorder;
pub mod search;
pub mod sort;

pub use dispatch::{run_search, run_sort, run_sort_with};
pub use error::{EngineError, Result};
pub use recorder::TraceRecorder;
pub use search::binary_search;
pub use sort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
    sorter, SortFn,
};
