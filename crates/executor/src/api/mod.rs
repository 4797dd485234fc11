//! High-level typed wrapper for the Executor.
//!
//! The [`TraceSort`] struct wraps the [`Executor`] and the
//! [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```
//! use tracesort_core::number::ints;
//! use tracesort_executor::TraceSort;
//!
//! let ts = TraceSort::new();
//! let steps = ts.sort("bubble", ints(&[3, 1, 2])).unwrap();
//! assert_eq!(steps.last().unwrap().array, ints(&[1, 2, 3]));
//! ```

use tracesort_core::{AlgorithmId, Number, SearchOutcome, SortStep};

use crate::options::ExecutorOptions;
use crate::{Command, Error, Executor, Output, Result};

/// Typed front end over the command executor.
///
/// Each method:
///
/// 1. Creates the appropriate [`Command`]
/// 2. Executes it via the [`Executor`]
/// 3. Extracts and returns the typed result
#[derive(Debug, Clone, Default)]
pub struct TraceSort {
    executor: Executor,
}

impl TraceSort {
    /// Wrapper with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrapper with explicit options.
    pub fn with_options(options: ExecutorOptions) -> Self {
        Self {
            executor: Executor::with_options(options),
        }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Generate a sort trace with the named algorithm.
    pub fn sort(&self, algorithm: &str, values: Vec<Number>) -> Result<Vec<SortStep>> {
        self.sort_command(Some(algorithm.to_string()), values)
    }

    /// Generate a sort trace with the configured default algorithm.
    pub fn sort_default(&self, values: Vec<Number>) -> Result<Vec<SortStep>> {
        self.sort_command(None, values)
    }

    fn sort_command(&self, algorithm: Option<String>, values: Vec<Number>) -> Result<Vec<SortStep>> {
        match self.executor.execute(Command::Sort { algorithm, values })? {
            Output::SortTrace { steps, .. } => Ok(steps),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Sort".into(),
            }),
        }
    }

    /// Sort a copy of `values` and generate a binary search trace over it.
    pub fn search(&self, values: Vec<Number>, target: Number) -> Result<SearchOutcome> {
        match self.executor.execute(Command::Search {
            values,
            target: Some(target),
        })? {
            Output::SearchTrace(outcome) => Ok(outcome),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Search".into(),
            }),
        }
    }

    /// Random sequence of `size` elements.
    pub fn generate(&self, size: usize, seed: Option<u64>) -> Result<Vec<Number>> {
        match self.executor.execute(Command::Generate { size, seed })? {
            Output::Sequence(values) => Ok(values),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Generate".into(),
            }),
        }
    }

    /// Recognized algorithm identifiers.
    pub fn algorithms(&self) -> Result<Vec<AlgorithmId>> {
        match self.executor.execute(Command::ListAlgorithms)? {
            Output::Algorithms(ids) => Ok(ids),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListAlgorithms".into(),
            }),
        }
    }
}
