//! The command executor.

use tracing::{debug, warn};

use crate::handlers;
use crate::options::ExecutorOptions;
use crate::{Command, Output, Result};

/// Executes [`Command`]s against the trace engine.
///
/// Holds configuration only; every command runs on its own copy of the
/// input, so one executor can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    options: ExecutorOptions,
}

impl Executor {
    /// Executor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor with explicit options.
    pub fn with_options(options: ExecutorOptions) -> Self {
        Self { options }
    }

    /// Active options.
    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Run one command to completion.
    ///
    /// Either the full output is returned or an error is; there is no
    /// partial result.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = match cmd {
            Command::Sort { algorithm, values } => {
                handlers::sort::sort(&self.options, algorithm, values)
            }
            Command::Search { values, target } => {
                handlers::search::search(&self.options, values, target)
            }
            Command::Generate { size, seed } => {
                handlers::catalog::generate_sequence(&self.options, size, seed)
            }
            Command::ListAlgorithms => handlers::catalog::list_algorithms(),
        };

        match &result {
            Ok(_) => debug!(command = name, "command executed"),
            Err(e) => warn!(command = name, error = %e, "command rejected"),
        }
        result
    }
}
