mod common;

use common::fails;
use proptest::prelude::*;
use std::collections::BTreeMap;
use vouch_core::{
    assert_equal, assert_false, assert_nil, assert_not_equal, assert_not_nil, assert_true,
};

#[derive(Debug, Clone, PartialEq)]
struct Sample {
    id: u32,
    tags: Vec<String>,
    scores: BTreeMap<String, i64>,
}

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (
        any::<u32>(),
        prop::collection::vec("[a-z]{0,8}", 0..4),
        prop::collection::btree_map("[a-z]{1,4}", any::<i64>(), 0..4),
    )
        .prop_map(|(id, tags, scores)| Sample { id, tags, scores })
}

proptest! {
    #[test]
    fn prop_assert_true_fails_iff_false(b in any::<bool>()) {
        prop_assert_eq!(fails(move || assert_true(b, "p")), !b);
    }

    #[test]
    fn prop_assert_false_fails_iff_true(b in any::<bool>()) {
        prop_assert_eq!(fails(move || assert_false(b, "p")), b);
    }

    #[test]
    fn prop_equal_is_reflexive(value in sample_strategy()) {
        let copy = value.clone();
        prop_assert!(!fails(|| assert_equal(&value, &copy, "p")));
        prop_assert!(fails(|| assert_not_equal(&value, &copy, "p")));
    }

    #[test]
    fn prop_differing_types_never_equal(n in any::<i64>()) {
        let text = n.to_string();
        prop_assert!(fails(|| assert_equal(&n, &text, "p")));
        prop_assert!(!fails(|| assert_not_equal(&n, &text, "p")));
    }

    #[test]
    fn prop_single_field_change_breaks_equality(value in sample_strategy()) {
        let mut changed = value.clone();
        changed.id = value.id.wrapping_add(1);
        prop_assert!(fails(|| assert_equal(&value, &changed, "p")));
        prop_assert!(!fails(|| assert_not_equal(&value, &changed, "p")));
    }

    #[test]
    fn prop_not_nil_negates_nil(value in prop::option::of(any::<i32>())) {
        let nil_failed = fails(|| assert_nil(&value, "p"));
        let not_nil_failed = fails(|| assert_not_nil(&value, "p"));
        prop_assert_ne!(nil_failed, not_nil_failed);
        prop_assert_eq!(nil_failed, value.is_some());
    }

    #[test]
    fn prop_value_types_are_never_nil(n in any::<i64>(), s in ".*") {
        prop_assert!(fails(|| assert_nil(&n, "p")));
        prop_assert!(fails(|| assert_nil(&s, "p")));
    }

    #[test]
    fn prop_diagnostic_echoes_message(message in "[^\\n]{0,40}", a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let expected = format!("Assertion failed: {} - Expected: {}, Actual: {}", message, a, b);
        let actual = common::catch_failure(|| assert_equal(&a, &b, &message));
        prop_assert_eq!(actual, Some(expected));
    }
}
