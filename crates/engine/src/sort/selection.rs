//! Selection sort.

use tracesort_core::{index_range, Number, SortTrace};

use crate::recorder::TraceRecorder;

/// Selection sort.
///
/// One comparison step per inner probe, highlighting the running minimum
/// against the probe, then one swap step per outer index (recorded even when
/// the minimum is already in place).
pub fn selection_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);
    let n = rec.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if rec.array[j] < rec.array[min_idx] {
                min_idx = j;
            }
            rec.record_compare(&[min_idx, j], index_range(0, i));
        }
        rec.swap(i, min_idx);
        rec.record_swap(&[i, min_idx], index_range(0, i + 1));
    }

    rec.finish()
}
