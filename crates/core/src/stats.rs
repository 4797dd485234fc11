//! Playback statistics
//!
//! Counters a replay accumulates while stepping through a sort trace:
//! each step adds `|comparing|` comparisons, `|swapping|` swaps and
//! `|comparing| + 2 * |swapping|` array accesses.

use serde::{Deserialize, Serialize};

use crate::SortStep;

/// Aggregate counters over a sort trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    /// Number of steps in the trace
    pub steps: usize,
    /// Highlighted comparison indices
    pub comparisons: usize,
    /// Highlighted swap indices
    pub swaps: usize,
    /// Estimated array reads and writes
    pub accesses: usize,
}

impl TraceStats {
    /// Accumulate statistics over a full trace.
    pub fn from_steps(steps: &[SortStep]) -> Self {
        steps.iter().fold(Self::default(), |mut acc, step| {
            acc.record(step);
            acc
        })
    }

    /// Add one step to the running totals.
    pub fn record(&mut self, step: &SortStep) {
        let compared = step.comparing.as_ref().map_or(0, |c| c.len());
        let swapped = step.swapping.as_ref().map_or(0, |s| s.len());
        self.steps += 1;
        self.comparisons += compared;
        self.swaps += swapped;
        self.accesses += compared + 2 * swapped;
    }
}
