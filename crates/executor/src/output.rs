//! Output enum: what a successful command returns.

use serde::{Deserialize, Serialize};
use tracesort_core::{AlgorithmId, Number, SearchOutcome, SortStep};

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    /// Full sort trace
    SortTrace {
        /// Algorithm that produced the trace
        algorithm: AlgorithmId,
        /// Steps in execution order
        steps: Vec<SortStep>,
    },

    /// Search trace plus the sorted array it ran over
    SearchTrace(SearchOutcome),

    /// A generated sequence
    Sequence(Vec<Number>),

    /// Algorithm catalogue
    Algorithms(Vec<AlgorithmId>),
}
