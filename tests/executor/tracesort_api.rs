//! TraceSort typed wrapper tests.

use crate::common::*;
use tracesort::Error;

#[test]
fn sort_every_algorithm() {
    let ts = TraceSort::new();
    let input = ints(&[9, 4, 7, 1, 8]);

    for id in ts.algorithms().unwrap() {
        let steps = ts.sort(id.as_str(), input.clone()).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.array, ints(&[1, 4, 7, 8, 9]), "{}", id);
        assert!(last.is_fully_sorted(), "{}", id);
    }
}

#[test]
fn sort_default_is_bubble() {
    let ts = TraceSort::new();
    let input = ints(&[4, 3, 2, 1]);

    assert_eq!(
        ts.sort_default(input.clone()).unwrap(),
        ts.sort("bubble", input).unwrap()
    );
}

#[test]
fn stats_over_bubble_trace() {
    let steps = TraceSort::new().sort("bubble", ints(&[3, 1, 2])).unwrap();
    let stats = TraceStats::from_steps(&steps);

    assert_eq!(stats.steps, 3);
    assert_eq!(stats.comparisons, 6);
    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.accesses, 6);
}

#[test]
fn facade_errors_convert() {
    let err = tracesort::sort("bogo", ints(&[1])).unwrap_err();
    assert!(err.is_unsupported_algorithm());

    let ts = TraceSort::with_options(ExecutorOptions::new().max_input_len(Some(1)));
    let err: Error = ts.search(ints(&[1, 2]), 1.into()).unwrap_err().into();
    assert!(err.is_invalid_input());
}

#[test]
fn generate_feeds_sort() {
    let ts = TraceSort::new();
    let values = ts.generate(12, Some(3)).unwrap();

    let steps = ts.sort("radix", values.clone()).unwrap();
    let mut expected = values;
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(steps.last().unwrap().array, expected);
}
