//! Quick sort (Lomuto partition).
//!
//! The recursion is driven by an explicit stack of index ranges, visited in
//! the same depth-first order as the recursive formulation (left range fully
//! before right). Balanced partitions keep the stack at `O(log n)`; already
//! sorted or adversarial input degrades it to `O(n)`.

use tracesort_core::{Number, SortTrace};

use crate::recorder::TraceRecorder;

/// Quick sort with pivot = last element of the active range.
pub fn quick_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);
    let n = rec.len();

    // Inclusive (low, high) ranges with low < high
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if n > 1 {
        pending.push((0, n - 1));
    }

    while let Some((low, high)) = pending.pop() {
        let pi = partition(&mut rec, low, high);
        if pi + 1 < high {
            pending.push((pi + 1, high));
        }
        if pi > low + 1 {
            pending.push((low, pi - 1));
        }
    }

    rec.record_complete();
    rec.finish()
}

/// Partition `array[low..=high]` around `array[high]`; returns the pivot's
/// final index.
fn partition(rec: &mut TraceRecorder, low: usize, high: usize) -> usize {
    let pivot = rec.array[high];
    // next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        rec.record_compare(&[j, high], Vec::new());
        if rec.array[j] < pivot {
            rec.swap(store, j);
            rec.record_swap(&[store, j], Vec::new());
            store += 1;
        }
    }

    rec.swap(store, high);
    rec.record_swap(&[store, high], Vec::new());
    store
}
