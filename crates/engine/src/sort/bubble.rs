//! Bubble sort.

use tracesort_core::{index_range, Number, SortTrace};

use crate::recorder::TraceRecorder;

/// Bubble sort with one step per neighbour comparison.
///
/// Every step of pass `i` carries `sorted = [n-i, n)`. That is the region
/// fixed *before* the pass, one element behind what the pass itself settles;
/// the marker is kept as-is so replays match existing traces. The last
/// comparison leaves the array ordered, so its step is marked fully sorted.
pub fn bubble_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);
    let n = rec.len();

    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if rec.array[j] > rec.array[j + 1] {
                rec.swap(j, j + 1);
            }
            rec.record_compare(&[j, j + 1], index_range(n - i, n));
        }
    }

    rec.complete_last();
    rec.finish()
}
