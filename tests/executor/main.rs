//! Executor integration tests
//!
//! Drives the command layer the way transports do: through `Command`
//! values, the typed `TraceSort` wrapper and JSON request bodies.

mod common;

mod command_dispatch;
mod tracesort_api;
