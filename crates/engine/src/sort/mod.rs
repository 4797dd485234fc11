//! The seven trace-generating sorts.
//!
//! Each algorithm is a pure function from an input slice to a trace; the
//! input is copied before any mutation. [`sorter`] maps an [`AlgorithmId`]
//! to its function with an exhaustive match, so adding an identifier without
//! an implementation fails to compile.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;

use tracesort_core::{AlgorithmId, Number, SortTrace};

/// Signature shared by every sorting algorithm.
pub type SortFn = fn(&[Number]) -> SortTrace;

/// Resolve an algorithm identifier to its implementation.
pub fn sorter(id: AlgorithmId) -> SortFn {
    match id {
        AlgorithmId::Bubble => bubble_sort,
        AlgorithmId::Selection => selection_sort,
        AlgorithmId::Insertion => insertion_sort,
        AlgorithmId::Merge => merge_sort,
        AlgorithmId::Quick => quick_sort,
        AlgorithmId::Heap => heap_sort,
        AlgorithmId::Radix => radix_sort,
    }
}
