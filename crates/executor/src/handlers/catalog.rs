//! Generate and ListAlgorithms handlers.

use tracesort_core::AlgorithmId;

use crate::generate::generate;
use crate::options::ExecutorOptions;
use crate::validate::check_len;
use crate::{Output, Result};

/// Handle Generate command.
pub fn generate_sequence(opts: &ExecutorOptions, size: usize, seed: Option<u64>) -> Result<Output> {
    check_len(size, opts)?;
    Ok(Output::Sequence(generate(size, seed)))
}

/// Handle ListAlgorithms command.
pub fn list_algorithms() -> Result<Output> {
    Ok(Output::Algorithms(AlgorithmId::ALL.to_vec()))
}
