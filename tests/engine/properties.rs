//! Property tests over random sequences.

use proptest::prelude::*;

use crate::common::*;

const MAX_LEN: usize = 40;

fn int_sequence() -> impl Strategy<Value = Vec<Number>> {
    proptest::collection::vec(-1000i64..1000, 0..=MAX_LEN)
        .prop_map(|v| v.into_iter().map(Number::Int).collect())
}

fn non_negative_sequence() -> impl Strategy<Value = Vec<Number>> {
    proptest::collection::vec(0i64..100_000, 0..=MAX_LEN)
        .prop_map(|v| v.into_iter().map(Number::Int).collect())
}

fn float_sequence() -> impl Strategy<Value = Vec<Number>> {
    proptest::collection::vec(-1.0e6f64..1.0e6, 0..=MAX_LEN)
        .prop_map(|v| v.into_iter().map(Number::Float).collect())
}

/// Comparison sorts accept any finite numbers; radix only non-negative
/// integers.
fn comparison_sorts() -> impl Iterator<Item = AlgorithmId> {
    AlgorithmId::ALL.into_iter().filter(|id| *id != AlgorithmId::Radix)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn every_sort_ends_sorted_and_complete(input in int_sequence()) {
        for id in comparison_sorts() {
            let steps = run_sort_with(id, &input);
            assert_completes(id, &input, &steps);
            assert_lengths(&steps, input.len());
        }
    }

    #[test]
    fn float_input_sorts(input in float_sequence()) {
        for id in comparison_sorts() {
            assert_completes(id, &input, &run_sort_with(id, &input));
        }
    }

    #[test]
    fn radix_sorts_non_negative_integers(input in non_negative_sequence()) {
        let steps = run_sort_with(AlgorithmId::Radix, &input);
        prop_assert!(!steps.is_empty());
        assert_completes(AlgorithmId::Radix, &input, &steps);
    }

    #[test]
    fn sorting_sorted_input_is_identity(input in non_negative_sequence()) {
        let sorted = sorted_copy(&input);
        for id in AlgorithmId::ALL {
            let steps = run_sort_with(id, &sorted);
            if let Some(last) = steps.last() {
                prop_assert_eq!(&last.array, &sorted);
            }
        }
    }

    #[test]
    fn input_is_never_mutated(input in int_sequence(), target in -1000i64..1000) {
        let before = input.clone();
        for id in comparison_sorts() {
            let _ = run_sort_with(id, &input);
        }
        let _ = run_search(&input, Some(Number::Int(target)));
        prop_assert_eq!(input, before);
    }

    #[test]
    fn bubble_step_count_is_quadratic(input in int_sequence()) {
        let n = input.len();
        let steps = run_sort_with(AlgorithmId::Bubble, &input);
        prop_assert_eq!(steps.len(), n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn search_finds_present_targets(input in int_sequence(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!input.is_empty());
        let target = input[pick.index(input.len())];

        let outcome = run_search(&input, Some(target)).unwrap();
        let last = outcome.steps.last().unwrap();
        prop_assert!(last.found);
        prop_assert_eq!(outcome.sorted_array[last.mid], target);
        prop_assert!(outcome.steps[..outcome.steps.len() - 1].iter().all(|s| !s.found));
    }

    #[test]
    fn search_exhausts_window_for_absent_targets(input in int_sequence(), target in 2000i64..3000) {
        let outcome = run_search(&input, Some(Number::Int(target))).unwrap();
        prop_assert!(outcome.steps.iter().all(|s| !s.found));
        prop_assert_eq!(outcome.found_index(), None);
        if let Some(last) = outcome.steps.last() {
            // target is above every element, so the window closes past `high`
            prop_assert_eq!(last.mid, last.high);
            prop_assert_eq!(last.high, input.len() - 1);
        }
    }
}
