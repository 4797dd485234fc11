//! Executor configuration.
//!
//! This module provides [`ExecutorOptions`] and [`ValidationMode`], which
//! control how much input the executor accepts and how strictly it checks it.

use serde::{Deserialize, Serialize};
use tracesort_core::AlgorithmId;

/// Default cap on sequence length.
///
/// Trace length grows quadratically for the simple sorts, so the cap bounds
/// both latency and memory for one request.
pub const DEFAULT_MAX_INPUT_LEN: usize = 512;

/// How thoroughly input numbers are checked before running an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject non-finite numbers, and non-integer or negative input to radix sort
    Strict,
    /// Pass input straight to the engine
    Permissive,
}

impl Default for ValidationMode {
    fn default() -> Self {
        ValidationMode::Strict
    }
}

/// Options for an [`Executor`](crate::Executor).
///
/// ```
/// use tracesort_executor::{ExecutorOptions, ValidationMode};
///
/// let opts = ExecutorOptions::new()
///     .max_input_len(Some(64))
///     .validation(ValidationMode::Permissive);
/// assert_eq!(opts.max_input_len, Some(64));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutorOptions {
    /// Longest accepted sequence; `None` disables the check
    pub max_input_len: Option<usize>,
    /// Input validation strictness
    pub validation: ValidationMode,
    /// Algorithm used when a sort request names none
    pub default_algorithm: AlgorithmId,
}

impl ExecutorOptions {
    /// Defaults: 512 elements, strict validation, bubble sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sequence length limit.
    pub fn max_input_len(mut self, limit: Option<usize>) -> Self {
        self.max_input_len = limit;
        self
    }

    /// Set the validation mode.
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Set the fallback algorithm.
    pub fn default_algorithm(mut self, id: AlgorithmId) -> Self {
        self.default_algorithm = id;
        self
    }
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
            validation: ValidationMode::Strict,
            default_algorithm: AlgorithmId::Bubble,
        }
    }
}
