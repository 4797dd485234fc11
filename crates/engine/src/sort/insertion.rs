//! Insertion sort.

use tracesort_core::{index_range, Number, SortTrace};

use crate::recorder::TraceRecorder;

/// Insertion sort.
///
/// Each rightward shift records `comparing = [slot vacated, i]`; placing the
/// key records `swapping = [insertion index]`.
pub fn insertion_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);
    let n = rec.len();

    for i in 1..n {
        let key = rec.array[i];
        // `pos` is the hole the key will drop into
        let mut pos = i;
        while pos > 0 && key < rec.array[pos - 1] {
            rec.array[pos] = rec.array[pos - 1];
            pos -= 1;
            rec.record_compare(&[pos, i], index_range(0, i));
        }
        rec.array[pos] = key;
        rec.record_swap(&[pos], index_range(0, i + 1));
    }

    rec.finish()
}
