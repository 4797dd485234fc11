//! Trace step records
//!
//! A trace is an append-only, chronologically ordered list of steps. Each
//! step is an immutable snapshot: the `array` field is a value copy taken at
//! the instant the step was recorded, so later mutation of the working array
//! never reaches back into earlier steps.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Number, Sequence};

/// The 0–2 indices highlighted as being compared or swapped.
pub type IndexPair = SmallVec<[usize; 2]>;

/// One snapshot taken while sorting.
///
/// `comparing` and `swapping` are omitted from the wire form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortStep {
    /// Full sequence state at this instant
    pub array: Sequence,

    /// Indices currently being compared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparing: Option<IndexPair>,

    /// Indices currently being swapped or written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swapping: Option<IndexPair>,

    /// Indices holding their final value as of this step
    pub sorted: Vec<usize>,
}

impl SortStep {
    /// A step with neither comparison nor swap highlighted.
    pub fn snapshot(array: &[Number], sorted: Vec<usize>) -> Self {
        Self {
            array: array.to_vec(),
            comparing: None,
            swapping: None,
            sorted,
        }
    }

    /// A comparison step.
    pub fn comparing(array: &[Number], indices: &[usize], sorted: Vec<usize>) -> Self {
        Self {
            array: array.to_vec(),
            comparing: Some(IndexPair::from_slice(indices)),
            swapping: None,
            sorted,
        }
    }

    /// A swap / placement step.
    pub fn swapping(array: &[Number], indices: &[usize], sorted: Vec<usize>) -> Self {
        Self {
            array: array.to_vec(),
            comparing: None,
            swapping: Some(IndexPair::from_slice(indices)),
            sorted,
        }
    }

    /// True when every index of the array is marked sorted.
    pub fn is_fully_sorted(&self) -> bool {
        let n = self.array.len();
        let mut seen = vec![false; n];
        for &i in &self.sorted {
            if i < n {
                seen[i] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}

/// One probe of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Lower bound of the live search window
    pub low: usize,
    /// Upper bound (inclusive) of the live search window
    pub high: usize,
    /// Probed index
    pub mid: usize,
    /// True only on the step whose probe hit the target
    pub found: bool,
}

/// Result of a search request.
///
/// The search runs over a sorted copy of the caller's sequence; playback
/// needs that copy, so it travels with the steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Ordered search steps
    pub steps: Vec<SearchStep>,
    /// The ascending sequence the search actually ran over
    pub sorted_array: Sequence,
}

impl SearchOutcome {
    /// Index of the target in `sorted_array`, if the final step found it.
    pub fn found_index(&self) -> Option<usize> {
        self.steps.last().filter(|s| s.found).map(|s| s.mid)
    }

    /// True if the target was found.
    pub fn is_found(&self) -> bool {
        self.found_index().is_some()
    }
}

/// `[start, end)` as an index list.
pub fn index_range(start: usize, end: usize) -> Vec<usize> {
    (start..end).collect()
}
