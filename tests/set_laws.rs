//! Property-based tests for `Set` laws.
//!
//! These tests verify that `Set` satisfies the algebraic properties
//! expected of a set of scalars.

use lazyseq::prelude::*;
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-20_i64..20).prop_map(Value::Int),
        "[a-c]{0,2}".prop_map(Value::Str),
    ]
}

fn set_strategy() -> impl Strategy<Value = Set> {
    prop::collection::vec(scalar_strategy(), 0..30)
        .prop_map(|values| Set::from_values(values).unwrap())
}

// =============================================================================
// Add-Contains Law
// Description: An added scalar is always a member
// =============================================================================

proptest! {
    #[test]
    fn prop_add_contains_law(mut set in set_strategy(), value in scalar_strategy()) {
        set.add(value.clone()).unwrap();
        prop_assert!(set.contains(&value));
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed scalar is never a member
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(mut set in set_strategy(), value in scalar_strategy()) {
        set.remove(&value);
        prop_assert!(!set.contains(&value));
    }
}

// =============================================================================
// Commutativity Laws
// Description: A ∪ B = B ∪ A, A ∩ B = B ∩ A, A △ B = B △ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(left in set_strategy(), right in set_strategy()) {
        prop_assert_eq!(left.union(&right), right.union(&left));
    }

    #[test]
    fn prop_intersection_commutativity_law(left in set_strategy(), right in set_strategy()) {
        prop_assert_eq!(left.intersection(&right), right.intersection(&left));
    }

    #[test]
    fn prop_symmetric_difference_commutativity_law(
        left in set_strategy(),
        right in set_strategy()
    ) {
        prop_assert_eq!(
            left.symmetric_difference(&right),
            right.symmetric_difference(&left)
        );
    }
}

// =============================================================================
// Identity Laws
// Description: A ∪ ∅ = A, A ∩ ∅ = ∅, A \ ∅ = A
// =============================================================================

proptest! {
    #[test]
    fn prop_empty_identity_law(set in set_strategy()) {
        let empty = Set::new();
        prop_assert_eq!(set.union(&empty), set.clone());
        prop_assert!(set.intersection(&empty).is_empty());
        prop_assert_eq!(set.difference(&empty), set);
    }
}

// =============================================================================
// Decomposition Law
// Description: A △ B = (A ∪ B) \ (A ∩ B)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_decomposition_law(
        left in set_strategy(),
        right in set_strategy()
    ) {
        let expected = left.union(&right).difference(&left.intersection(&right));
        prop_assert_eq!(left.symmetric_difference(&right), expected);
    }
}

// =============================================================================
// Difference Law
// Description: A \ B shares no member with B and is a subset of A
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_law(left in set_strategy(), right in set_strategy()) {
        let difference = left.difference(&right);
        prop_assert!(difference.intersection(&right).is_empty());
        prop_assert!(difference.is_subset(&left));
    }
}

// =============================================================================
// Subset Antisymmetry Law
// Description: A ⊆ B and B ⊆ A exactly when A = B
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_antisymmetry_law(left in set_strategy(), right in set_strategy()) {
        let both = left.is_subset(&right) && right.is_subset(&left);
        prop_assert_eq!(both, left.equals(&right));
        prop_assert!(left.intersection(&right).is_subset(&left));
        prop_assert!(left.union(&right).is_superset(&right));
    }
}

// =============================================================================
// Sequence Round-Trip Law
// Description: A set rebuilt from its own sequence is equal to it
// =============================================================================

proptest! {
    #[test]
    fn prop_sequence_round_trip_law(set in set_strategy()) {
        let mut members = set.to_sequence();
        prop_assert_eq!(members.len(), Some(set.len()));
        prop_assert_eq!(members.to_set().unwrap(), set);
    }
}
