//! Merge sort.
//!
//! Two stages: the recursive sort collects one raw snapshot per completed
//! merge with an empty `sorted` set, then a second pass rewrites `sorted` on
//! every collected step to cover the whole array.

use tracesort_core::{index_range, Number, SortTrace};

use crate::recorder::TraceRecorder;

/// Top-down merge sort, one step per completed merge.
pub fn merge_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);
    let n = rec.len();

    sort_range(&mut rec, 0, n);

    mark_converging(rec.finish(), n)
}

/// Sort `array[lo..hi)` in place; recursion depth is `O(log n)`.
fn sort_range(rec: &mut TraceRecorder, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(rec, lo, mid);
    sort_range(rec, mid, hi);
    merge_runs(rec, lo, mid, hi);
    rec.record_snapshot(Vec::new());
}

/// Merge the adjacent runs `[lo, mid)` and `[mid, hi)`.
///
/// Ties take from the right run.
fn merge_runs(rec: &mut TraceRecorder, lo: usize, mid: usize, hi: usize) {
    let left = rec.array[lo..mid].to_vec();
    let right = rec.array[mid..hi].to_vec();

    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            rec.array[k] = left[i];
            i += 1;
        } else {
            rec.array[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    for &v in left[i..].iter().chain(&right[j..]) {
        rec.array[k] = v;
        k += 1;
    }
}

/// Second stage: every collected step gets the full index range.
fn mark_converging(raw: SortTrace, n: usize) -> SortTrace {
    raw.into_iter()
        .map(|mut step| {
            step.sorted = index_range(0, n);
            step
        })
        .collect()
}
