//! LSD radix sort, base 10.
//!
//! Orders non-negative integers. Digits are taken with floor division, so
//! other inputs still terminate but the result is unspecified.

use tracesort_core::{Number, SortTrace};
use tracing::trace;

use crate::recorder::TraceRecorder;

const BASE: usize = 10;

/// Radix sort with one snapshot per completed digit pass.
pub fn radix_sort(input: &[Number]) -> SortTrace {
    let mut rec = TraceRecorder::new(input);

    let max_val = max_value(&rec.array);
    let mut exp: i64 = 1;

    while max_val.floor_div(exp).is_positive() {
        counting_pass(&mut rec, exp);
        rec.record_snapshot(Vec::new());
        trace!(exp, "radix digit pass complete");

        exp = match exp.checked_mul(BASE as i64) {
            Some(next) => next,
            // No higher digit fits in i64, so none can be non-zero
            None => break,
        };
    }

    rec.record_complete();
    rec.finish()
}

/// Largest element; 0 for an empty sequence.
fn max_value(array: &[Number]) -> Number {
    array
        .iter()
        .copied()
        .fold(None, |acc: Option<Number>, v| match acc {
            Some(m) if !(v > m) => Some(m),
            _ => Some(v),
        })
        .unwrap_or_default()
}

/// Stable counting sort of the working array on the digit at `exp`.
fn counting_pass(rec: &mut TraceRecorder, exp: i64) {
    let n = rec.len();
    let mut output = vec![Number::default(); n];
    let mut count = [0usize; BASE];

    for v in &rec.array {
        count[v.digit(exp)] += 1;
    }
    for d in 1..BASE {
        count[d] += count[d - 1];
    }
    // Walk backwards to keep equal digits in their current order
    for v in rec.array.iter().rev() {
        let d = v.digit(exp);
        count[d] -= 1;
        output[count[d]] = *v;
    }

    rec.array = output;
}
