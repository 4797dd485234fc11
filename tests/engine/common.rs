//! Shared helpers for engine tests.

#![allow(dead_code)]

pub use tracesort::prelude::*;
pub use tracesort::{binary_search, run_search, run_sort, run_sort_with, SortTrace};

/// Algorithms that may return an empty trace for inputs of length <= 1.
pub const MAY_BE_EMPTY: [AlgorithmId; 4] = [
    AlgorithmId::Bubble,
    AlgorithmId::Selection,
    AlgorithmId::Insertion,
    AlgorithmId::Merge,
];

/// `values` sorted ascending under `Number::total_cmp`.
pub fn sorted_copy(values: &[Number]) -> Vec<Number> {
    let mut out = values.to_vec();
    out.sort_by(Number::total_cmp);
    out
}

/// Assert the contract every sort trace shares: the last step holds the
/// sorted input with every index marked sorted.
pub fn assert_completes(id: AlgorithmId, input: &[Number], steps: &SortTrace) {
    match steps.last() {
        Some(last) => {
            assert_eq!(last.array, sorted_copy(input), "{} final array", id);
            assert!(last.is_fully_sorted(), "{} final sorted set", id);
        }
        None => {
            assert!(input.len() <= 1, "{} produced no steps for {:?}", id, input);
            assert!(MAY_BE_EMPTY.contains(&id), "{} must always emit a final step", id);
        }
    }
}

/// Every step snapshot has the input's length.
pub fn assert_lengths(steps: &SortTrace, n: usize) {
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.array.len(), n, "step {} length", i);
    }
}
