//! Dispatcher: resolve an algorithm by name and run it.
//!
//! Stateless. The only validation performed here is the identifier lookup;
//! checking that the numbers themselves are acceptable belongs to the
//! caller.

use tracesort_core::{AlgorithmId, Number, SearchOutcome, SortTrace};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::search::binary_search;
use crate::sort::sorter;

/// Run the sorting algorithm named `algorithm` over `values`.
///
/// Unknown names yield [`EngineError::UnsupportedAlgorithm`] and no trace.
pub fn run_sort(algorithm: &str, values: &[Number]) -> Result<SortTrace> {
    let id = AlgorithmId::from_name(algorithm)
        .ok_or_else(|| EngineError::UnsupportedAlgorithm(algorithm.to_string()))?;
    Ok(run_sort_with(id, values))
}

/// Run an already-resolved sorting algorithm.
pub fn run_sort_with(id: AlgorithmId, values: &[Number]) -> SortTrace {
    let steps = sorter(id)(values);
    debug!(
        algorithm = id.as_str(),
        len = values.len(),
        steps = steps.len(),
        "sort trace generated"
    );
    steps
}

/// Sort a copy of `values` ascending and binary-search it for `target`.
///
/// The sorted copy is returned with the steps, since the probes index into
/// it rather than into the caller's order.
pub fn run_search(values: &[Number], target: Option<Number>) -> Result<SearchOutcome> {
    let target = target.ok_or(EngineError::MissingTarget)?;

    let mut sorted_array = values.to_vec();
    sorted_array.sort_by(Number::total_cmp);

    let steps = binary_search(&sorted_array, target);
    debug!(
        len = values.len(),
        steps = steps.len(),
        found = steps.last().map_or(false, |s| s.found),
        "search trace generated"
    );

    Ok(SearchOutcome {
        steps,
        sorted_array,
    })
}
