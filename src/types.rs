//! Public types for the tracesort facade.
//!
//! Re-exports from the internal crates with one flat namespace.

// Data model
pub use tracesort_core::number::ints;
pub use tracesort_core::{
    AlgorithmId, IndexPair, Number, SearchOutcome, SearchStep, SearchTrace, Sequence, SortStep,
    SortTrace, TraceStats,
};

// Error taxonomy
pub use tracesort_core::{ApiError, WireError};

// Engine entry points
pub use tracesort_engine::{binary_search, run_search, run_sort, run_sort_with};

// Execution layer
pub use tracesort_executor::{Command, Executor, ExecutorOptions, Output, TraceSort, ValidationMode};

// Wire envelopes
pub use tracesort_wire::{Endpoint, WireResponse};
