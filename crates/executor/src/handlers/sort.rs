//! Sort command handler.

use tracesort_core::{AlgorithmId, Number};
use tracesort_engine::{run_sort_with, EngineError};

use crate::options::ExecutorOptions;
use crate::validate::check_values;
use crate::{Output, Result};

/// Handle Sort command.
pub fn sort(
    opts: &ExecutorOptions,
    algorithm: Option<String>,
    values: Vec<Number>,
) -> Result<Output> {
    let id = match algorithm {
        Some(name) => AlgorithmId::from_name(&name).ok_or(EngineError::UnsupportedAlgorithm(name))?,
        None => opts.default_algorithm,
    };
    check_values(&values, Some(id), opts)?;

    let steps = run_sort_with(id, &values);
    Ok(Output::SortTrace {
        algorithm: id,
        steps,
    })
}
