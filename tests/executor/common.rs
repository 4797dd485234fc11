//! Shared helpers for executor tests.

#![allow(dead_code)]

pub use tracesort::prelude::*;
pub use tracesort::{Command, Output};

/// Executor with default options.
pub fn create_executor() -> Executor {
    Executor::new()
}

/// Executor with a small length cap and strict validation.
pub fn capped_executor(limit: usize) -> Executor {
    Executor::with_options(ExecutorOptions::new().max_input_len(Some(limit)))
}

/// Executor that skips numeric validation.
pub fn permissive_executor() -> Executor {
    Executor::with_options(ExecutorOptions::new().validation(ValidationMode::Permissive))
}
