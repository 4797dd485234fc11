//! Command execution layer for tracesort.
//!
//! This crate is the boundary between transport code (CLI, wire envelopes)
//! and the trace engine:
//!
//! - [`Command`] / [`Output`]: every request and its typed result
//! - [`Executor`]: validates input, enforces limits, dispatches, logs
//! - [`TraceSort`]: typed method-per-command wrapper
//! - [`ExecutorOptions`]: configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod error;
mod executor;
mod handlers;
mod output;

pub mod generate;
pub mod options;
pub mod validate;


pub use api::TraceSort;
pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use options::{ExecutorOptions, ValidationMode, DEFAULT_MAX_INPUT_LEN};
pub use output::Output;

// Re-export the data model so callers need only this crate
pub use tracesort_core::{AlgorithmId, Number, SearchOutcome, SearchStep, SortStep, TraceStats};
