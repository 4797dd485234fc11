//! Concrete end-to-end scenarios.

use crate::common::*;

#[test]
fn bubble_three_elements_ends_sorted() {
    let steps = run_sort("bubble", &ints(&[3, 1, 2])).unwrap();
    let last = steps.last().unwrap();

    assert_eq!(steps.len(), 3);
    assert_eq!(last.array, ints(&[1, 2, 3]));
    assert_eq!(last.sorted, vec![0, 1, 2]);
}

#[test]
fn radix_empty_input_has_single_marker_step() {
    let steps = run_sort("radix", &[]).unwrap();

    assert_eq!(steps.len(), 1);
    assert!(steps[0].array.is_empty());
    assert!(steps[0].sorted.is_empty());
}

#[test]
fn search_finds_target_in_sorted_copy() {
    let outcome = run_search(&ints(&[5, 3, 1, 4]), Some(4.into())).unwrap();

    assert_eq!(outcome.sorted_array, ints(&[1, 3, 4, 5]));
    let last = outcome.steps.last().unwrap();
    assert!(last.found);
    assert_eq!(outcome.sorted_array[last.mid], Number::Int(4));
}

#[test]
fn search_reports_missing_target() {
    let outcome = run_search(&ints(&[1, 2, 3]), Some(9.into())).unwrap();

    assert!(!outcome.steps.last().unwrap().found);
    assert_eq!(outcome.found_index(), None);
}

#[test]
fn unknown_algorithm_is_rejected() {
    let err = run_sort("unknown", &ints(&[1])).unwrap_err();
    assert_eq!(err, tracesort_engine::EngineError::UnsupportedAlgorithm("unknown".into()));
}

#[test]
fn search_without_target_is_rejected() {
    let err = run_search(&ints(&[1, 2]), None).unwrap_err();
    assert_eq!(err, tracesort_engine::EngineError::MissingTarget);
}

#[test]
fn facade_sort_and_search() {
    let steps = tracesort::sort("heap", ints(&[4, 2, 9, 1])).unwrap();
    assert_eq!(steps.last().unwrap().array, ints(&[1, 2, 4, 9]));

    let outcome = tracesort::search(ints(&[9, 1]), 1.into()).unwrap();
    assert_eq!(outcome.found_index(), Some(0));
}

#[test]
fn mixed_ints_and_floats_sort_numerically() {
    let input = vec![Number::Float(2.5), Number::Int(1), Number::Float(-0.5), Number::Int(2)];
    for id in AlgorithmId::ALL {
        if id == AlgorithmId::Radix {
            continue;
        }
        let steps = run_sort_with(id, &input);
        assert_eq!(
            steps.last().unwrap().array,
            vec![Number::Float(-0.5), Number::Int(1), Number::Int(2), Number::Float(2.5)],
            "{}",
            id
        );
    }
}
