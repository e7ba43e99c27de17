//! Unit tests for the terminal operations.

use lazyseq::prelude::*;
use rstest::rstest;

/// Compares by `rank` only, so ties are observable through `label`.
#[derive(Debug, Clone, PartialEq)]
struct Ranked {
    rank: i32,
    label: &'static str,
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rank.partial_cmp(&other.rank)
    }
}

fn ranked() -> ArrayCursor<usize, Ranked> {
    from_values([
        Ranked { rank: 2, label: "first two" },
        Ranked { rank: 1, label: "first one" },
        Ranked { rank: 2, label: "second two" },
        Ranked { rank: 1, label: "second one" },
    ])
}

// =============================================================================
// Collecting
// =============================================================================

#[rstest]
fn test_terminal_operations_reset_first() {
    let mut cursor = from_values([1, 2, 3]);
    cursor.reset().unwrap();
    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert_eq!(cursor.to_values().unwrap(), vec![1, 2, 3]);
    assert_eq!(cursor.sum().unwrap(), 6);
}

#[rstest]
fn test_to_map_keeps_last_value_at_first_position() {
    let mut pairs = from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    let map = pairs.to_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(
        map.into_iter().collect::<Vec<_>>(),
        vec![("a", 3), ("b", 2)]
    );
}

#[rstest]
fn test_to_pairs_keeps_duplicate_keys() {
    let mut pairs = from_pairs([("a", 1), ("a", 2)]);
    assert_eq!(pairs.to_pairs().unwrap(), vec![("a", 1), ("a", 2)]);
}

#[rstest]
fn test_to_set_is_type_strict() {
    let mut values = from_values([Value::Int(1), Value::from("1"), Value::Bool(true), Value::Int(1)]);
    let set = values.to_set().unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&Value::from("1")));
}

#[rstest]
fn test_to_set_rejects_composites() {
    let mut values = from_values([Value::Int(1), Value::from(vec![2])]);
    assert_eq!(
        values.to_set(),
        Err(SequenceError::NonScalar { kind: "list" })
    );
}

// =============================================================================
// Folding
// =============================================================================

#[rstest]
fn test_fold_sees_keys() {
    let mut pairs = from_pairs([("x", 2_usize), ("yy", 3)]);
    let weighted = pairs
        .fold(0, |total, value, key| total + value * key.len())
        .unwrap();
    assert_eq!(weighted, 2 + 6);
}

#[rstest]
fn test_reduce_uses_first_element_as_seed() {
    let mut words = from_values(["a", "b", "c"].map(String::from));
    let joined = words
        .reduce(|joined, word, _| format!("{joined}-{word}"))
        .unwrap();
    assert_eq!(joined, "a-b-c");
}

#[rstest]
fn test_reduce_on_empty_fails() {
    let mut nothing = empty::<usize, i32>();
    assert_eq!(
        nothing.reduce(|left, right, _| left + right),
        Err(SequenceError::EmptyIterable {
            operation: "reduce"
        })
    );
}

#[rstest]
fn test_reduce_from_on_empty_returns_seed() {
    let mut nothing = empty::<usize, i32>();
    assert_eq!(nothing.reduce_from(42, |left, right, _| left + right), Ok(42));

    let mut numbers = from_values([1, 2]);
    assert_eq!(numbers.reduce_from(10, |left, right, _| left + right), Ok(13));
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![5], 5)]
#[case(vec![1, -2, 3], 2)]
fn test_sum(#[case] values: Vec<i64>, #[case] expected: i64) {
    assert_eq!(from_values(values).sum().unwrap(), expected);
}

#[rstest]
fn test_sum_of_floats() {
    let total: f64 = from_values([0.5, 0.25]).sum().unwrap();
    assert!((total - 0.75).abs() < f64::EPSILON);
}

#[rstest]
fn test_count_of_countable_does_not_traverse() {
    let mut huge = range(0, i64::MAX, 1).unwrap();
    assert_eq!(huge.count().unwrap(), usize::try_from(i64::MAX).unwrap());
}

#[rstest]
fn test_count_of_uncountable_traverses() {
    let mut odd = from_values(0..9).filter(|value, _| value % 2 == 1);
    assert_eq!(odd.count().unwrap(), 4);
}

// =============================================================================
// Extremes
// =============================================================================

#[rstest]
fn test_min_and_max() {
    let mut numbers = from_values([3, -1, 7, 0]);
    assert_eq!(numbers.min(), Ok(-1));
    assert_eq!(numbers.max(), Ok(7));
}

#[rstest]
fn test_extremes_keep_the_first_tie() {
    let mut values = ranked();
    assert_eq!(values.min().unwrap().label, "first one");
    assert_eq!(values.max().unwrap().label, "first two");
}

#[rstest]
fn test_extremes_by_key_keep_the_first_tie() {
    let mut values = ranked();
    assert_eq!(values.min_by_key(|value| value.rank).unwrap().label, "first one");
    assert_eq!(values.max_by_key(|value| value.rank).unwrap().label, "first two");
}

#[rstest]
fn test_optimal_with_custom_preference() {
    let mut words = from_values(["pear", "fig", "banana", "kiwi"]);
    let shortest = words.optimal(|candidate, best| candidate.len() < best.len());
    assert_eq!(shortest, Ok("fig"));

    let longest_or_first = words.optimal(|candidate, best| candidate.len() > best.len());
    assert_eq!(longest_or_first, Ok("banana"));
}

#[rstest]
fn test_extremes_on_empty_name_the_operation() {
    let mut nothing = empty::<usize, i32>();
    assert_eq!(
        nothing.min(),
        Err(SequenceError::EmptyIterable { operation: "min" })
    );
    assert_eq!(
        nothing.max_by_key(|value| *value),
        Err(SequenceError::EmptyIterable {
            operation: "max_by_key"
        })
    );
    assert_eq!(
        nothing.optimal(|_, _| true),
        Err(SequenceError::EmptyIterable {
            operation: "optimal"
        })
    );
}

// =============================================================================
// Join
// =============================================================================

#[rstest]
#[case(vec![], "")]
#[case(vec![1], "1")]
#[case(vec![1, 2, 3], "1, 2, 3")]
fn test_join(#[case] values: Vec<i32>, #[case] expected: &str) {
    assert_eq!(from_values(values).join(", ").unwrap(), expected);
}

#[rstest]
fn test_join_values() {
    let mut mixed = from_values([Value::Int(1), Value::Null, Value::from("x")]);
    assert_eq!(mixed.join("|").unwrap(), "1|null|x");
}

// =============================================================================
// Partition
// =============================================================================

#[rstest]
fn test_partition_buckets_in_first_seen_order() {
    let mut numbers = from_values(1..=7);
    let by_remainder = numbers
        .partition(|value, _| value % 3, NullBucket::Drop)
        .unwrap();

    let buckets: Vec<(Scalar, Vec<i32>)> = by_remainder
        .iter()
        .map(|(bucket, values)| (bucket.clone(), values.clone()))
        .collect();
    assert_eq!(
        buckets,
        vec![
            (Scalar::Int(1), vec![1, 4, 7]),
            (Scalar::Int(2), vec![2, 5]),
            (Scalar::Int(0), vec![3, 6]),
        ]
    );
}

#[rstest]
#[case(NullBucket::Drop, None)]
#[case(NullBucket::Keep, Some(vec![2, 4]))]
fn test_partition_null_buckets(#[case] nulls: NullBucket, #[case] expected: Option<Vec<i32>>) {
    let mut numbers = from_values([1, 2, 3, 4]);
    let odd = numbers
        .partition(|value, _| (value % 2 == 1).then_some("odd"), nulls)
        .unwrap();

    assert_eq!(odd.len(), 1);
    assert_eq!(odd.get(&Scalar::from("odd")), Some(&[1, 3][..]));
    assert_eq!(odd.nulls().map(<[_]>::to_vec), expected);
}

#[rstest]
fn test_partition_keeps_nulls_group_even_when_empty() {
    let mut numbers = from_values([1]);
    let partition = numbers.partition(|_, _| "all", NullBucket::Keep).unwrap();
    assert_eq!(partition.nulls(), Some(&[][..]));
}

#[rstest]
fn test_partition_rejects_composite_buckets() {
    let mut numbers = from_values([1]);
    assert_eq!(
        numbers.partition(|value, _| vec![*value], NullBucket::Drop),
        Err(SequenceError::NonScalar { kind: "list" })
    );
}

#[rstest]
fn test_partition_by_field() {
    let mut records = from_values([
        Value::map([("team", Value::from("red")), ("id", Value::from(1))]),
        Value::map([("id", Value::from(2))]),
        Value::map([("team", Value::from("blue")), ("id", Value::from(3))]),
        Value::map([("team", Value::from("red")), ("id", Value::from(4))]),
    ]);

    let teams = records.partition_by("team", NullBucket::Keep).unwrap();
    let (buckets, nulls) = teams.into_parts();
    assert_eq!(
        buckets.keys().cloned().collect::<Vec<_>>(),
        vec![Scalar::from("red"), Scalar::from("blue")]
    );
    assert_eq!(buckets[&Scalar::from("red")].len(), 2);
    assert_eq!(nulls.map(|group| group.len()), Some(1));
}

#[rstest]
fn test_partition_by_on_scalars_fails() {
    let mut numbers = from_values([Value::Int(1)]);
    assert!(matches!(
        numbers.partition_by("team", NullBucket::Drop),
        Err(SequenceError::Unpluckable { .. })
    ));
}
