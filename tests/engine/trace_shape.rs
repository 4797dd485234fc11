//! Per-algorithm event policy checks on small fixed inputs.

use crate::common::*;

#[test]
fn bubble_sorted_marker_is_per_pass() {
    let steps = run_sort_with(AlgorithmId::Bubble, &ints(&[4, 3, 2, 1]));

    // pass 0: 3 steps with sorted = [4, 4), pass 1: 2 steps with [3, 4)
    assert_eq!(steps.len(), 6);
    assert!(steps[0..3].iter().all(|s| s.sorted.is_empty()));
    assert!(steps[3..5].iter().all(|s| s.sorted == vec![3]));
    assert_eq!(steps[5].sorted, vec![0, 1, 2, 3]);
}

#[test]
fn merge_steps_all_cover_whole_array() {
    let input = ints(&[5, 1, 4, 2, 3]);
    let steps = run_sort_with(AlgorithmId::Merge, &input);

    // one step per completed merge: n - 1 merges
    assert_eq!(steps.len(), input.len() - 1);
    assert!(steps.iter().all(|s| s.sorted == vec![0, 1, 2, 3, 4]));
    assert!(steps.iter().all(|s| s.comparing.is_none() && s.swapping.is_none()));
}

#[test]
fn quick_highlights_pivot_and_ends_with_marker() {
    let steps = run_sort_with(AlgorithmId::Quick, &ints(&[3, 1, 2]));

    assert_eq!(steps[0].comparing.as_deref(), Some(&[0, 2][..]));
    assert!(steps[..steps.len() - 1].iter().all(|s| s.sorted.is_empty()));
    let last = steps.last().unwrap();
    assert!(last.comparing.is_none() && last.swapping.is_none());
    assert_eq!(last.sorted, vec![0, 1, 2]);
}

#[test]
fn heap_extraction_steps_mark_suffix() {
    let steps = run_sort_with(AlgorithmId::Heap, &ints(&[1, 2, 3]));

    let extractions: Vec<_> = steps
        .iter()
        .filter(|s| s.swapping.as_ref().map_or(false, |p| p[0] == 0) && !s.sorted.is_empty())
        .collect();
    assert!(!extractions.is_empty());
    for step in extractions {
        let i = step.swapping.as_ref().unwrap()[1];
        assert_eq!(step.sorted, (i..3).collect::<Vec<_>>());
    }
}

#[test]
fn radix_one_step_per_digit_pass() {
    let steps = run_sort_with(AlgorithmId::Radix, &ints(&[170, 45, 75, 90, 802, 24, 2, 66]));

    // three digit places plus the final marker
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0].array, ints(&[170, 90, 802, 2, 24, 45, 75, 66]));
    assert_eq!(steps[3].array, ints(&[2, 24, 45, 66, 75, 90, 170, 802]));
}

#[test]
fn insertion_places_key_after_shifts() {
    let steps = run_sort_with(AlgorithmId::Insertion, &ints(&[2, 1]));

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].comparing.as_deref(), Some(&[0, 1][..]));
    assert_eq!(steps[1].swapping.as_deref(), Some(&[0][..]));
    assert_eq!(steps[1].array, ints(&[1, 2]));
    assert_eq!(steps[1].sorted, vec![0, 1]);
}

#[test]
fn search_steps_narrow_window() {
    let sorted = ints(&[1, 3, 5, 7, 9, 11]);
    let steps = binary_search(&sorted, 9.into());

    assert_eq!(steps.len(), 2);
    assert_eq!((steps[0].low, steps[0].high, steps[0].mid), (0, 5, 2));
    assert_eq!((steps[1].low, steps[1].high, steps[1].mid), (3, 5, 4));
    assert!(!steps[0].found);
    assert!(steps[1].found);
}

#[test]
fn search_empty_sequence_has_no_steps() {
    assert!(binary_search(&[], 1.into()).is_empty());
}
