//! Unit tests for `Set`.

use lazyseq::prelude::*;
use rstest::rstest;

fn set_of(values: &[i64]) -> Set {
    Set::from_values(values.iter().copied()).unwrap()
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
fn test_members_are_distinct_by_type_and_value() {
    let set = Set::from_values([Value::Int(1), Value::from("1"), Value::Bool(true)]).unwrap();
    assert_eq!(set.len(), 3);

    assert!(set.contains(&Value::Int(1)));
    assert!(set.contains(&Value::from("1")));
    assert!(set.contains(&Value::Bool(true)));
    assert!(!set.contains(&Value::Float(1.0)));
    assert!(!set.contains(&Value::Str("true".to_string())));
}

#[rstest]
fn test_composites_are_never_members() {
    let set = set_of(&[1]);
    assert!(!set.contains(&Value::from(vec![1])));
}

#[rstest]
fn test_null_is_a_member_like_any_other() {
    let mut set = Set::new();
    assert!(set.add(Value::Null).unwrap());
    assert!(set.contains(&Value::Null));
    assert!(set.contains_scalar(&Scalar::Null));
}

#[rstest]
fn test_add_reports_novelty() {
    let mut set = Set::new();
    assert!(set.add("a").unwrap());
    assert!(!set.add("a").unwrap());
    assert!(set.add('a').is_ok_and(|added| !added));
    assert_eq!(set.len(), 1);
}

#[rstest]
#[case(Value::from(vec![1, 2]), "list")]
#[case(Value::map([("a", 1)]), "map")]
fn test_add_rejects_composites(#[case] value: Value, #[case] kind: &'static str) {
    let mut set = set_of(&[1]);
    assert_eq!(set.add(value), Err(SequenceError::NonScalar { kind }));
    assert_eq!(set, set_of(&[1]));
}

#[rstest]
fn test_remove() {
    let mut set = set_of(&[1, 2]);
    assert!(set.remove(&Value::Int(1)));
    assert!(!set.remove(&Value::Int(1)));
    assert!(!set.remove(&Value::from("2")));
    assert!(!set.remove(&Value::from(vec![2])));
    assert_eq!(set, set_of(&[2]));
}

#[rstest]
fn test_membership_accepts_the_same_arguments_as_add() {
    let mut set = Set::new();
    set.add(1).unwrap();
    set.add("one").unwrap();

    assert!(set.contains(1));
    assert!(set.contains("one"));
    assert!(!set.contains(1.0));
    assert!(set.remove(1));
    assert!(!set.contains(1));
    assert!(set.remove(String::from("one")));
    assert!(set.is_empty());
}

#[rstest]
fn test_update_is_all_or_nothing() {
    let mut set = set_of(&[1]);
    let result = set.update([Value::Int(2), Value::from(vec![3]), Value::Int(4)]);
    assert_eq!(result, Err(SequenceError::NonScalar { kind: "list" }));
    assert_eq!(set, set_of(&[1]));

    set.update([2, 3]).unwrap();
    assert_eq!(set, set_of(&[1, 2, 3]));
}

#[rstest]
fn test_clear() {
    let mut set = set_of(&[1, 2]);
    set.clear();
    assert!(set.is_empty());
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn test_union() {
    assert_eq!(set_of(&[1, 2]).union(&set_of(&[2, 3])), set_of(&[1, 2, 3]));
}

#[rstest]
fn test_intersection() {
    assert_eq!(
        set_of(&[1, 2, 3]).intersection(&set_of(&[2, 3, 4, 5])),
        set_of(&[2, 3])
    );
    assert!(set_of(&[1]).intersection(&set_of(&[2])).is_empty());
}

#[rstest]
fn test_difference() {
    assert_eq!(set_of(&[1, 2, 3]).difference(&set_of(&[2])), set_of(&[1, 3]));
    assert_eq!(set_of(&[2]).difference(&set_of(&[1, 2, 3])), Set::new());
}

#[rstest]
fn test_symmetric_difference() {
    assert_eq!(
        set_of(&[1, 2, 3]).symmetric_difference(&set_of(&[3, 4])),
        set_of(&[1, 2, 4])
    );
}

#[rstest]
fn test_algebra_leaves_operands_untouched() {
    let left = set_of(&[1, 2]);
    let right = set_of(&[2, 3]);
    let _ = left.union(&right);
    let _ = left.difference(&right);
    assert_eq!(left, set_of(&[1, 2]));
    assert_eq!(right, set_of(&[2, 3]));
}

#[rstest]
fn test_mixed_kinds_do_not_intersect() {
    let numbers = set_of(&[1]);
    let strings = Set::from_values(["1"]).unwrap();
    assert!(numbers.intersection(&strings).is_empty());
    assert_eq!(numbers.union(&strings).len(), 2);
}

// =============================================================================
// Comparison
// =============================================================================

#[rstest]
#[case(&[], &[], true, true)]
#[case(&[], &[1], true, false)]
#[case(&[1], &[1, 2], true, false)]
#[case(&[1, 2], &[1], false, true)]
#[case(&[1, 2], &[2, 1], true, true)]
#[case(&[1, 3], &[1, 2], false, false)]
fn test_subset_and_superset(
    #[case] left: &[i64],
    #[case] right: &[i64],
    #[case] subset: bool,
    #[case] superset: bool,
) {
    let (left, right) = (set_of(left), set_of(right));
    assert_eq!(left.is_subset(&right), subset);
    assert_eq!(left.is_superset(&right), superset);
    assert_eq!(left.equals(&right), subset && superset);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_to_sequence_is_a_snapshot() {
    let mut set = set_of(&[1, 2, 3]);
    let mut members = set.to_sequence();
    set.clear();

    assert_eq!(members.len(), Some(3));
    let mut values = members.to_values().unwrap();
    values.sort();
    assert_eq!(values, vec![Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)]);
}

#[rstest]
fn test_to_sequence_round_trips_through_to_set() {
    let set = Set::from_values([Value::Null, Value::Float(0.5), Value::from("x")]).unwrap();
    assert_eq!(set.to_sequence().to_set().unwrap(), set);
}

#[rstest]
fn test_from_iterator_and_extend() {
    let mut set: Set = [Scalar::Int(1), Scalar::Int(1)].into_iter().collect();
    set.extend([Scalar::from("two")]);
    assert_eq!(set.len(), 2);

    let mut members: Vec<Scalar> = set.into_iter().collect();
    members.sort();
    assert_eq!(members, vec![Scalar::Int(1), Scalar::from("two")]);
}

#[rstest]
fn test_debug_lists_members() {
    assert_eq!(format!("{:?}", set_of(&[7])), "{Int(7)}");
    assert_eq!(format!("{:?}", Set::new()), "{}");
}
