//! Core identifiers
//!
//! - [`AlgorithmId`]: the closed set of sorting algorithms the engine knows
//! - [`Sequence`]: an ordered list of numbers, the subject of sorting/search

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Number;

/// An ordered list of comparable numbers.
pub type Sequence = Vec<Number>;

/// Identifier of a sorting algorithm.
///
/// The wire form is the lowercase name (`"bubble"`, `"merge"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    /// Bubble sort
    Bubble,
    /// Selection sort
    Selection,
    /// Insertion sort
    Insertion,
    /// Top-down merge sort
    Merge,
    /// Quick sort, Lomuto partition
    Quick,
    /// Heap sort, max-heap
    Heap,
    /// LSD radix sort, base 10
    Radix,
}

impl AlgorithmId {
    /// Every recognized algorithm, in catalogue order.
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Radix,
    ];

    /// The canonical identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Radix => "radix",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "Bubble Sort",
            AlgorithmId::Selection => "Selection Sort",
            AlgorithmId::Insertion => "Insertion Sort",
            AlgorithmId::Merge => "Merge Sort",
            AlgorithmId::Quick => "Quick Sort",
            AlgorithmId::Heap => "Heap Sort",
            AlgorithmId::Radix => "Radix Sort",
        }
    }

    /// Look up an identifier by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == name)
    }
}

impl Default for AlgorithmId {
    fn default() -> Self {
        AlgorithmId::Bubble
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = crate::ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::ApiError::UnsupportedAlgorithm {
            name: s.to_string(),
        })
    }
}
