//! Command Dispatch Tests
//!
//! Every Command variant returns the matching Output, and every rejection
//! surfaces as the matching error.

use crate::common::*;
use tracesort_executor::Error;

// ============================================================================
// Sort
// ============================================================================

#[test]
fn sort_returns_trace_for_named_algorithm() {
    let executor = create_executor();

    let output = executor
        .execute(Command::Sort {
            algorithm: Some("selection".into()),
            values: ints(&[3, 1, 2]),
        })
        .unwrap();

    match output {
        Output::SortTrace { algorithm, steps } => {
            assert_eq!(algorithm, AlgorithmId::Selection);
            assert_eq!(steps.last().unwrap().array, ints(&[1, 2, 3]));
        }
        _ => panic!("Expected SortTrace output"),
    }
}

#[test]
fn sort_without_algorithm_uses_default() {
    let executor = create_executor();

    let output = executor
        .execute(Command::Sort {
            algorithm: None,
            values: ints(&[2, 1]),
        })
        .unwrap();
    assert!(matches!(
        output,
        Output::SortTrace { algorithm: AlgorithmId::Bubble, .. }
    ));

    let executor =
        Executor::with_options(ExecutorOptions::new().default_algorithm(AlgorithmId::Merge));
    let output = executor
        .execute(Command::Sort {
            algorithm: None,
            values: ints(&[2, 1]),
        })
        .unwrap();
    assert!(matches!(
        output,
        Output::SortTrace { algorithm: AlgorithmId::Merge, .. }
    ));
}

#[test]
fn sort_unknown_algorithm_is_rejected() {
    let executor = create_executor();

    let err = executor
        .execute(Command::Sort {
            algorithm: Some("shell".into()),
            values: ints(&[1]),
        })
        .unwrap_err();
    assert_eq!(err, Error::UnsupportedAlgorithm { name: "shell".into() });
}

#[test]
fn sort_over_limit_is_rejected() {
    let executor = capped_executor(3);

    let err = executor
        .execute(Command::Sort {
            algorithm: Some("bubble".into()),
            values: ints(&[4, 3, 2, 1]),
        })
        .unwrap_err();
    assert_eq!(err, Error::InputTooLarge { len: 4, limit: 3 });
}

#[test]
fn sort_non_finite_is_rejected_unless_permissive() {
    let values = vec![Number::Int(1), Number::Float(f64::NAN)];
    let cmd = Command::Sort {
        algorithm: Some("insertion".into()),
        values,
    };

    let err = create_executor().execute(cmd.clone()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));

    assert!(permissive_executor().execute(cmd).is_ok());
}

#[test]
fn radix_rejects_negative_and_fractional_input() {
    let executor = create_executor();

    for values in [ints(&[3, -1]), vec![Number::Int(1), Number::Float(2.5)]] {
        let err = executor
            .execute(Command::Sort {
                algorithm: Some("radix".into()),
                values,
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    // Integral floats are accepted
    let output = executor
        .execute(Command::Sort {
            algorithm: Some("radix".into()),
            values: vec![Number::Float(20.0), Number::Int(3)],
        })
        .unwrap();
    assert!(matches!(output, Output::SortTrace { .. }));
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn search_returns_outcome() {
    let executor = create_executor();

    let output = executor
        .execute(Command::Search {
            values: ints(&[5, 3, 1, 4]),
            target: Some(4.into()),
        })
        .unwrap();

    match output {
        Output::SearchTrace(outcome) => {
            assert_eq!(outcome.sorted_array, ints(&[1, 3, 4, 5]));
            assert_eq!(outcome.found_index(), Some(2));
        }
        _ => panic!("Expected SearchTrace output"),
    }
}

#[test]
fn search_without_target_is_rejected() {
    let err = create_executor()
        .execute(Command::Search {
            values: ints(&[1, 2]),
            target: None,
        })
        .unwrap_err();
    assert_eq!(err, Error::MissingTarget);
}

#[test]
fn search_infinite_target_is_rejected() {
    let err = create_executor()
        .execute(Command::Search {
            values: ints(&[1, 2]),
            target: Some(Number::Float(f64::INFINITY)),
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

// ============================================================================
// Generate / ListAlgorithms
// ============================================================================

#[test]
fn generate_is_reproducible_with_seed() {
    let executor = create_executor();
    let cmd = Command::Generate { size: 25, seed: Some(42) };

    let a = executor.execute(cmd.clone()).unwrap();
    let b = executor.execute(cmd).unwrap();
    assert_eq!(a, b);

    match a {
        Output::Sequence(values) => {
            assert_eq!(values.len(), 25);
            assert!(values.iter().all(|v| (10..=409).contains(&v.as_int().unwrap())));
        }
        _ => panic!("Expected Sequence output"),
    }
}

#[test]
fn generate_respects_limit() {
    let err = capped_executor(10)
        .execute(Command::Generate { size: 11, seed: None })
        .unwrap_err();
    assert_eq!(err, Error::InputTooLarge { len: 11, limit: 10 });
}

#[test]
fn list_algorithms_returns_all_seven() {
    let output = create_executor().execute(Command::ListAlgorithms).unwrap();
    assert_eq!(output, Output::Algorithms(AlgorithmId::ALL.to_vec()));
}
