//! Deep structural equality across dynamically typed values
//!
//! Equality is decided by the value's own `PartialEq` after a runtime type
//! check: two values of different dynamic types are never equal, even when
//! they print the same (`1` and `"1"`, or `1_i32` and `1_i64`).
//!
//! Product types get field-by-field equality from `#[derive(PartialEq)]`,
//! ordered containers compare element-wise in order, and maps compare by key
//! set and per-key value. An absent container is not an empty one:
//! `None::<Vec<i32>>` and `Some(Vec::new())` are unequal, as are
//! `serde_json::Value::Null` and `[]`.

use std::any::Any;

/// Capability to compare against a value of unknown dynamic type
pub trait StructurallyComparable: Any {
    /// Returns true iff `other` has the same dynamic type as `self` and is
    /// structurally equal to it.
    fn structurally_eq(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Any> StructurallyComparable for T {
    fn structurally_eq(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Deep equality of two independently typed values
pub fn deep_equal<E, A>(expected: &E, actual: &A) -> bool
where
    E: StructurallyComparable,
    A: Any,
{
    expected.structurally_eq(actual)
}
