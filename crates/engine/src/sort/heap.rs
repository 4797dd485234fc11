//! Heap sort (max-heap).

use tracesort_core::{index_range, Number, SortTrace};

use crate::recorder::TraceRecorder;

/// Heap sort.
///
/// Sift-down swaps record `swapping = [parent, child]` with nothing marked
/// sorted; each root extraction records `swapping = [0, i]` with the tail
/// `[i, n)` marked sorted. A completion marker ends the trace.
pub fn heap_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);
    let n = rec.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut rec, n, i);
    }

    for i in (1..n).rev() {
        rec.swap(0, i);
        rec.record_swap(&[0, i], index_range(i, n));
        sift_down(&mut rec, i, 0);
    }

    rec.record_complete();
    rec.finish()
}

/// Restore the max-heap property below `root` within `array[..size]`.
///
/// Iterative; each loop turn is one level of the heap.
fn sift_down(rec: &mut TraceRecorder, size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let l = 2 * root + 1;
        let r = 2 * root + 2;
        if l < size && rec.array[l] > rec.array[largest] {
            largest = l;
        }
        if r < size && rec.array[r] > rec.array[largest] {
            largest = r;
        }
        if largest == root {
            return;
        }
        rec.swap(root, largest);
        rec.record_swap(&[root, largest], Vec::new());
        root = largest;
    }
}
