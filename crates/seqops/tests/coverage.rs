//! Scenario tests for the public operators.

use std::any::Any;
use std::cell::Cell;
use std::cmp::Ordering;

use seqops::{
    cast_to, cast_with, filter, for_all, sequential, sort_by, sort_by_descending, sort_by_keys,
    sort_by_with, CursorState, Descending, Natural, Partial, SeqError, SequenceExt,
};

fn true_first(a: &bool, b: &bool) -> Ordering {
    b.cmp(a)
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn filter_negatives() {
    let result: Result<Vec<i32>, SeqError> =
        filter(Some(vec![5, -7, 8, -9]), Some(|x: &i32| *x < 0)).collect();
    assert_eq!(result, Ok(vec![-7, -9]));
}

#[test]
fn filter_all_match() {
    let result: Result<Vec<i32>, SeqError> =
        filter(Some(vec![-5, -7, -8, -9]), Some(|x: &i32| *x < 0)).collect();
    assert_eq!(result, Ok(vec![-5, -7, -8, -9]));
}

#[test]
fn filter_null_source_never_consumed_is_fine() {
    let cursor = filter(None::<Vec<i32>>, Some(|x: &i32| *x > 0));
    assert_eq!(cursor.state(), CursorState::Created);
    drop(cursor);
}

#[test]
fn filter_null_source_fails_on_first_pull() {
    let mut cursor = filter(None::<Vec<i32>>, Some(|x: &i32| *x > 0));
    let err = cursor.next().unwrap().unwrap_err();
    assert!(err.is_missing_argument());
    assert_eq!(err.to_string(), "missing argument: source can't be null");
}

#[test]
fn filter_over_infinite_source_is_lazy() {
    let firsts: Vec<u64> = filter(Some(1u64..), Some(|x: &u64| x % 3 == 0))
        .take(3)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(firsts, vec![3, 6, 9]);
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_squares_to_f64() {
    let result: Result<Vec<f64>, SeqError> = vec![5, 7, -8, 9]
        .transformed(|x: i32| f64::from(x * x))
        .collect();
    assert_eq!(result, Ok(vec![25.0, 49.0, 64.0, 81.0]));
}

#[test]
fn transform_mapper_runs_on_consumption() {
    let calls = Cell::new(0);
    let cursor = vec![1, 2, 3].transformed(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(calls.get(), 0);
    let all: Vec<_> = cursor.collect();
    assert_eq!(all.len(), 3);
    assert_eq!(calls.get(), 3);
}

// ============================================================================
// Sort family
// ============================================================================

#[test]
fn sort_by_modulus() {
    assert_eq!(
        sort_by(Some(vec![-5, -17, -8, -9]), Some(|x: &i32| x.abs())),
        Ok(vec![-5, -8, -9, -17])
    );
}

#[test]
fn sort_by_even_first() {
    assert_eq!(
        sort_by_with(
            Some(vec![4, 7, 8, 9]),
            Some(|x: &i32| x % 2 == 0),
            Some(true_first)
        ),
        Ok(vec![4, 8, 7, 9])
    );
}

#[test]
fn sort_by_two_keys() {
    let sorted = sort_by_keys(
        Some(vec![4, 7, 8, 9]),
        Some(|x: &i32| x.abs()),
        Some(|x: &i32| (-x).to_string()),
    );
    assert_eq!(sorted, Ok(vec![4, 7, 8, 9]));

    // "-5" < "-7" < "-9" < "88" byte-wise
    let sorted = sort_by_keys(
        Some(vec![5, 7, -88, 9]),
        Some(|x: &i32| x.abs()),
        Some(|x: &i32| (-x).to_string()),
    );
    assert_eq!(sorted, Ok(vec![5, 7, 9, -88]));
}

#[test]
fn sort_by_two_keys_is_not_lexicographic() {
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Row {
        group: u8,
        rank: u8,
    }
    let rows = vec![
        Row { group: 1, rank: 2 },
        Row { group: 2, rank: 1 },
        Row { group: 1, rank: 1 },
    ];
    let sorted = sort_by_keys(
        Some(rows),
        Some(|r: &Row| r.group),
        Some(|r: &Row| r.rank),
    )
    .unwrap();
    // rank dominates; group breaks the tie between the two rank-1 rows
    assert_eq!(
        sorted,
        vec![
            Row { group: 1, rank: 1 },
            Row { group: 2, rank: 1 },
            Row { group: 1, rank: 2 },
        ]
    );
}

#[test]
fn sort_by_descending_distinct_keys() {
    assert_eq!(
        sort_by_descending(Some(vec![3, 1, 4, 1, 5]), Some(|x: &i32| *x)),
        Ok(vec![5, 4, 3, 1, 1])
    );
}

#[test]
fn sort_by_descending_differs_from_stable_descending_on_ties() {
    let items = vec![('a', 0), ('b', 0), ('c', 1)];
    let reversed = sort_by_descending(Some(items.clone()), Some(|p: &(char, i32)| p.1)).unwrap();
    let stable_desc = sort_by_with(
        Some(items),
        Some(|p: &(char, i32)| p.1),
        Some(Descending(Natural)),
    )
    .unwrap();
    assert_eq!(reversed, vec![('c', 1), ('b', 0), ('a', 0)]);
    assert_eq!(stable_desc, vec![('c', 1), ('a', 0), ('b', 0)]);
}

#[test]
fn sort_floats_with_partial_comparer() {
    let sorted = sort_by_with(
        Some(vec![2.5, -1.0, 0.5]),
        Some(|x: &f64| *x),
        Some(Partial),
    );
    assert_eq!(sorted, Ok(vec![-1.0, 0.5, 2.5]));
}

#[test]
fn sort_floats_with_nan_puts_nan_last() {
    let sorted = sort_by_with(
        Some(vec![3.0, f64::NAN, -2.0, f64::NAN, 1.0, f64::NEG_INFINITY]),
        Some(|x: &f64| *x),
        Some(Partial),
    )
    .unwrap();
    assert_eq!(sorted[..4], [f64::NEG_INFINITY, -2.0, 1.0, 3.0]);
    assert!(sorted[4..].iter().all(|x| x.is_nan()));
}

#[test]
fn sort_result_is_repeatable() {
    let sorted = vec![3, 1, 2].sorted_by(|x| *x);
    let first: Vec<_> = sorted.iter().collect();
    let second: Vec<_> = sorted.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn sort_missing_comparer_fails_eagerly() {
    let err = sort_by_with(Some(vec![1, 2]), Some(|x: &i32| *x), None::<Natural>).unwrap_err();
    assert_eq!(err, SeqError::missing("comparer"));
}

// ============================================================================
// CastTo
// ============================================================================

#[test]
fn cast_ints() {
    let items: Vec<Box<dyn Any>> = vec![Box::new(5i32), Box::new(7i32), Box::new(-8i32)];
    let ints: Result<Vec<i32>, SeqError> = cast_to::<i32, _>(Some(items)).collect();
    assert_eq!(ints, Ok(vec![5, 7, -8]));
}

#[test]
fn cast_int_and_string_to_string_fails_at_zero() {
    let items: Vec<Box<dyn Any>> = vec![Box::new(12i32), Box::new("hi")];
    let mut cursor = cast_to::<&str, _>(Some(items));
    match cursor.next() {
        Some(Err(SeqError::TypeMismatch { index, .. })) => assert_eq!(index, 0),
        other => panic!("expected type mismatch, got {other:?}"),
    }
    assert_eq!(cursor.next(), None);
}

#[test]
fn cast_yields_prefix_before_failing() {
    let items: Vec<Box<dyn Any>> = vec![
        Box::new(String::from("a")),
        Box::new(String::from("b")),
        Box::new(3u32),
        Box::new(String::from("d")),
    ];
    let pulled: Vec<_> = cast_to::<String, _>(Some(items)).collect();
    assert_eq!(pulled.len(), 3);
    assert_eq!(pulled[0], Ok("a".to_string()));
    assert_eq!(pulled[1], Ok("b".to_string()));
    assert!(pulled[2].as_ref().unwrap_err().is_type_mismatch());
}

#[test]
fn cast_with_missing_converter_is_deferred() {
    let mut cursor = cast_with(Some(vec![1]), None::<fn(i32) -> Option<u8>>);
    assert_eq!(cursor.state(), CursorState::Created);
    assert_eq!(cursor.next(), Some(Err(SeqError::missing("converter"))));
}

#[test]
fn cast_with_narrowing_conversion() {
    let result: Result<Vec<u8>, SeqError> =
        cast_with(Some(vec![1i32, 255, 256]), Some(|x: i32| u8::try_from(x).ok())).collect();
    assert_eq!(
        result,
        Err(SeqError::TypeMismatch {
            index: 2,
            expected: "u8"
        })
    );
}

// ============================================================================
// ForAll
// ============================================================================

#[test]
fn for_all_scenarios() {
    assert_eq!(for_all(Some(vec![-5, -7, -8, -9]), Some(|x: &i32| *x < 0)), Ok(true));
    assert_eq!(for_all(Some(vec![5, 7, -8, 9]), Some(|x: &i32| *x < 0)), Ok(false));
    assert_eq!(for_all(Some(vec![5, 7, 8, 9]), Some(|x: &i32| *x < 0)), Ok(false));
}

#[test]
fn for_all_empty_is_true() {
    assert_eq!(for_all(Some(Vec::<String>::new()), Some(|_: &String| false)), Ok(true));
}

#[test]
fn for_all_checks_arguments_before_reading() {
    let touched = Cell::new(false);
    let source = std::iter::from_fn(|| {
        touched.set(true);
        Some(1)
    });
    let result = for_all(Some(source), None::<fn(&i32) -> bool>);
    assert_eq!(result, Err(SeqError::missing("predicate")));
    assert!(!touched.get());
}

// ============================================================================
// Generator
// ============================================================================

#[test]
fn sequential_counts() {
    let numbers: Vec<i64> = sequential(10, 4).unwrap().collect();
    assert_eq!(numbers, vec![10, 11, 12, 13]);
}

#[test]
fn sequential_negative_count_is_invalid() {
    let err = sequential(10, -1).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn sequential_feeds_other_operators() {
    let evens = sequential(0, 10).unwrap().filtered(|x| x % 2 == 0);
    assert_eq!(evens.sorted_by_descending(|x| *x), Ok(vec![8, 6, 4, 2, 0]));
}

// ============================================================================
// Pipelines
// ============================================================================

#[test]
fn pipeline_filter_transform_sort_for_all() {
    let words = vec!["pear", "fig", "apple", "kiwi", "banana"];
    let lengths = words
        .filtered(|w| w.len() > 3)
        .transformed(|w| (w, w.len()))
        .sorted_by_keys(|p| p.0, |p| p.1)
        .unwrap();
    assert_eq!(
        lengths,
        vec![("kiwi", 4), ("pear", 4), ("apple", 5), ("banana", 6)]
    );
    assert!(lengths.for_all(|p| p.1 >= 4));
}

#[test]
fn pipeline_cast_error_reaches_eager_stage() {
    let items: Vec<Box<dyn Any>> = vec![Box::new(1i64), Box::new(2.0f64)];
    let result = items.cast_to::<i64>().sorted_by(|x| *x);
    assert_eq!(
        result,
        Err(SeqError::TypeMismatch {
            index: 1,
            expected: "i64"
        })
    );
}
