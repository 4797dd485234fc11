//! Command enum: every request the executor accepts.

use serde::{Deserialize, Serialize};
use tracesort_core::Number;

/// A request to the executor.
///
/// Commands carry raw caller input; the executor validates it before any
/// engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Generate a sort trace. `algorithm: None` uses the configured default.
    Sort {
        /// Algorithm identifier, e.g. `"quick"`
        algorithm: Option<String>,
        /// Sequence to sort
        values: Vec<Number>,
    },

    /// Sort a copy of `values` and generate a binary search trace over it.
    Search {
        /// Sequence to search (any order)
        values: Vec<Number>,
        /// Value to look for
        target: Option<Number>,
    },

    /// Produce a random sequence suitable for sorting.
    Generate {
        /// Number of elements
        size: usize,
        /// Seed for a reproducible sequence
        seed: Option<u64>,
    },

    /// List recognized algorithm identifiers.
    ListAlgorithms,
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Sort { .. } => "Sort",
            Command::Search { .. } => "Search",
            Command::Generate { .. } => "Generate",
            Command::ListAlgorithms => "ListAlgorithms",
        }
    }
}
