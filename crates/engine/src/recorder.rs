//! Trace recorder
//!
//! Owns the private working copy of the input together with the trace being
//! built. Algorithms mutate `array` through the recorder and call one of the
//! `record_*` methods at every event; each call copies the array, so steps
//! already appended can never observe later mutation.

use tracesort_core::{index_range, Number, SortStep, SortTrace};

/// Working array plus append-only trace.
#[derive(Debug)]
pub struct TraceRecorder {
    /// Private working copy; the caller's sequence is never touched.
    pub array: Vec<Number>,
    steps: SortTrace,
}

impl TraceRecorder {
    /// Copy the input into a fresh recorder.
    pub fn new(input: &[Number]) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    /// Length of the working array.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// True for an empty working array.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Number of steps recorded so far.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Swap two slots of the working array.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
    }

    /// Append a comparison step.
    pub fn record_compare(&mut self, indices: &[usize], sorted: Vec<usize>) {
        self.steps
            .push(SortStep::comparing(&self.array, indices, sorted));
    }

    /// Append a swap / placement step.
    pub fn record_swap(&mut self, indices: &[usize], sorted: Vec<usize>) {
        self.steps.push(SortStep::swapping(&self.array, indices, sorted));
    }

    /// Append a plain snapshot with no highlighted indices.
    pub fn record_snapshot(&mut self, sorted: Vec<usize>) {
        self.steps.push(SortStep::snapshot(&self.array, sorted));
    }

    /// Append the completion marker: whole array marked sorted.
    pub fn record_complete(&mut self) {
        let n = self.array.len();
        self.record_snapshot(index_range(0, n));
    }

    /// Mark every index sorted on the most recent step.
    ///
    /// Used when the last recorded event is the one that leaves the array
    /// fully ordered, so the trace ends in the completed state without an
    /// extra marker step.
    pub fn complete_last(&mut self) {
        let n = self.array.len();
        if let Some(last) = self.steps.last_mut() {
            last.sorted = index_range(0, n);
        }
    }

    /// Finish recording and hand back the trace.
    pub fn finish(self) -> SortTrace {
        self.steps
    }
}
