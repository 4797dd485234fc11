//! Binary search.

use tracesort_core::{Number, SearchStep, SearchTrace};

/// Iterative binary search over an ascending sequence.
///
/// Appends one step per probe. When a probe hits the target, that step is
/// flagged `found` and the trace ends. If the window empties first, the
/// trace simply ends with `found == false` on its last step (an empty trace
/// for an empty sequence).
///
/// The sequence must already be sorted ascending; this is not checked.
pub fn binary_search(sorted: &[Number], target: Number) -> SearchTrace {
    let mut steps = Vec::new();
    // Signed so `high` can drop below zero and end the loop
    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while low <= high {
        let mid = (low + high) / 2;
        steps.push(SearchStep {
            low: low as usize,
            high: high as usize,
            mid: mid as usize,
            found: false,
        });

        let probe = sorted[mid as usize];
        if probe == target {
            if let Some(last) = steps.last_mut() {
                last.found = true;
            }
            return steps;
        } else if probe < target {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    steps
}
