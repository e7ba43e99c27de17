//! Unit tests for the primitive producers and factories.

use lazyseq::prelude::*;
use lazyseq::source::{Count, Range};
use rstest::rstest;

// =============================================================================
// Range
// =============================================================================

#[rstest]
#[case(0, 5, 1, vec![0, 1, 2, 3, 4])]
#[case(0, 10, 3, vec![0, 3, 6, 9])]
#[case(0, 9, 3, vec![0, 3, 6])]
#[case(5, 0, -1, vec![5, 4, 3, 2, 1])]
#[case(5, 0, -2, vec![5, 3, 1])]
#[case(-3, 3, 2, vec![-3, -1, 1])]
#[case(3, 3, 1, vec![])]
#[case(5, 0, 1, vec![])]
#[case(0, 5, -1, vec![])]
fn test_range_values(
    #[case] start: i64,
    #[case] stop: i64,
    #[case] step: i64,
    #[case] expected: Vec<i64>,
) {
    let mut cursor = range(start, stop, step).unwrap();
    assert_eq!(cursor.len(), Some(expected.len()));
    assert_eq!(cursor.to_values().unwrap(), expected);
}

#[rstest]
fn test_range_rejects_zero_step() {
    assert!(matches!(range(0, 5, 0), Err(SequenceError::ZeroStep)));
    assert_eq!(Range::new(0, 5, 0), Err(SequenceError::ZeroStep));
}

#[rstest]
fn test_impossible_range_is_flagged() {
    let impossible = Range::new(5, 0, 1).unwrap();
    assert!(impossible.is_impossible());
    assert_eq!(impossible.stop(), 0);
    assert!(!Range::new(0, 5, 1).unwrap().is_impossible());
}

#[rstest]
fn test_range_is_fully_capable() {
    assert_eq!(range(0, 3, 1).unwrap().capabilities(), Capabilities::ALL);
}

#[rstest]
#[case(0, Some((0, 10)))]
#[case(3, Some((3, 40)))]
fn test_range_seek(#[case] ordinal: usize, #[case] expected: Option<(usize, i64)>) {
    let mut cursor = range(10, 50, 10).unwrap();
    cursor.seek(ordinal).unwrap();
    assert_eq!(cursor.current().map(|(key, value)| (*key, *value)), expected);
}

#[rstest]
fn test_range_seek_past_end_is_transactional() {
    let mut cursor = range(10, 50, 10).unwrap();
    cursor.seek(1).unwrap();

    assert_eq!(
        cursor.seek(4),
        Err(SequenceError::OutOfBounds { ordinal: 4, len: 4 })
    );
    assert_eq!(cursor.current(), Some((&1, &20)));
    cursor.advance().unwrap();
    assert_eq!(cursor.current(), Some((&2, &30)));
}

// =============================================================================
// Count
// =============================================================================

#[rstest]
fn test_count_is_unbounded() {
    let cursor = count(0, 1);
    assert_eq!(cursor.len(), None);
    assert!(cursor.capabilities().is_seekable());
    assert!(!cursor.capabilities().is_countable());
}

#[rstest]
#[case(0, 1, vec![0, 1, 2, 3])]
#[case(10, -5, vec![10, 5, 0, -5])]
#[case(7, 0, vec![7, 7, 7, 7])]
fn test_count_prefix(#[case] start: i64, #[case] step: i64, #[case] expected: Vec<i64>) {
    assert_eq!(count(start, step).take(4).unwrap().to_values().unwrap(), expected);
}

#[rstest]
fn test_count_seek_is_direct() {
    let mut cursor = count(1, 2);
    cursor.seek(1_000_000).unwrap();
    assert_eq!(cursor.current(), Some((&1_000_000, &2_000_001)));
}

#[rstest]
fn test_count_reports_overflow() {
    let generator = Count::new(i64::MAX - 1, 1);
    assert_eq!(generator.value_at(1), Ok(i64::MAX));
    assert_eq!(generator.value_at(2), Err(SequenceError::Overflow { ordinal: 2 }));

    let mut cursor = count(i64::MAX, 1);
    cursor.reset().unwrap();
    assert_eq!(
        cursor.advance(),
        Err(SequenceError::Overflow { ordinal: 1 })
    );
}

#[rstest]
fn test_count_accessors() {
    let generator = Count::new(3, -2);
    assert_eq!(generator.start(), 3);
    assert_eq!(generator.step(), -2);
}

// =============================================================================
// Repeat
// =============================================================================

#[rstest]
fn test_repeat_forever_is_seekable_not_countable() {
    let mut cursor = repeat("x");
    assert_eq!(cursor.len(), None);
    cursor.seek(99).unwrap();
    assert_eq!(cursor.current(), Some((&99, &"x")));
}

#[rstest]
fn test_repeat_n_is_countable() {
    let mut cursor = repeat_n('z', 2);
    assert_eq!(cursor.capabilities(), Capabilities::ALL);
    assert_eq!(cursor.to_pairs().unwrap(), vec![(0, 'z'), (1, 'z')]);
    assert_eq!(
        cursor.seek(2),
        Err(SequenceError::OutOfBounds { ordinal: 2, len: 2 })
    );
}

#[rstest]
fn test_repeat_zero_times_is_empty() {
    let mut cursor = repeat_n(1, 0);
    assert!(cursor.to_values().unwrap().is_empty());
}

// =============================================================================
// Single-pass sources
// =============================================================================

#[rstest]
fn test_single_pass_traverses_once() {
    let mut stream = single_pass(vec![1, 2, 3]);
    assert_eq!(stream.to_values().unwrap(), vec![1, 2, 3]);
    assert_eq!(
        stream.to_values(),
        Err(SequenceError::CannotRewind {
            sequence: "single_pass"
        })
    );
}

#[rstest]
fn test_single_pass_capabilities() {
    let exact = single_pass(vec![1, 2, 3]);
    assert_eq!(exact.len(), Some(3));
    assert!(!exact.capabilities().is_rewindable());
    assert!(!exact.capabilities().is_seekable());

    let inexact = single_pass((1..10).filter(|value| value % 2 == 0));
    assert_eq!(inexact.len(), None);
    assert_eq!(inexact.capabilities(), Capabilities::NONE);
}

#[rstest]
fn test_single_pass_cannot_be_cycled() {
    let mut looped = single_pass(vec![1, 2]).cycle();
    looped.reset().unwrap();
    looped.advance().unwrap();
    assert!(matches!(
        looped.advance(),
        Err(SequenceError::CannotRewind { .. })
    ));
}

// =============================================================================
// Factories
// =============================================================================

#[rstest]
fn test_from_values_keys_by_position() {
    let mut cursor = from_values(vec!["a", "b"]);
    assert_eq!(cursor.to_pairs().unwrap(), vec![(0, "a"), (1, "b")]);
}

#[rstest]
fn test_array_cursor_reads_before_reset_unlike_generators() {
    let array = from_values(vec![7, 8]);
    assert_eq!(array.current(), Some((&0, &7)));

    let generated = range(0, 3, 1).unwrap();
    assert_eq!(generated.current(), None);
}

#[rstest]
fn test_from_pairs_keeps_keys_including_duplicates() {
    let mut cursor = from_pairs(vec![("k", 1), ("k", 2)]);
    assert_eq!(cursor.to_pairs().unwrap(), vec![("k", 1), ("k", 2)]);
}

#[rstest]
fn test_from_value_adapts_lists() {
    let mut cursor = from_value(Value::from(vec!["a", "b"])).unwrap();
    assert_eq!(
        cursor.to_pairs().unwrap(),
        vec![
            (Scalar::Int(0), Value::from("a")),
            (Scalar::Int(1), Value::from("b"))
        ]
    );
}

#[rstest]
fn test_from_value_adapts_maps() {
    let mut cursor = from_value(Value::map([("x", 1), ("y", 2)])).unwrap();
    assert_eq!(
        cursor.to_pairs().unwrap(),
        vec![
            (Scalar::from("x"), Value::Int(1)),
            (Scalar::from("y"), Value::Int(2))
        ]
    );
}

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::Int(3), "int")]
#[case(Value::from("text"), "string")]
#[case(Value::Bool(false), "bool")]
fn test_from_value_rejects_scalars(#[case] value: Value, #[case] kind: &'static str) {
    assert_eq!(
        from_value(value),
        Err(SequenceError::NotTraversable { kind })
    );
}
