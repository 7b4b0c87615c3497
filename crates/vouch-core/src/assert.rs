//! Runtime assertions
//!
//! Each function checks one invariant and returns normally when it holds.
//! On violation it logs an `assertion_failed` event and panics with the
//! diagnostic, so control leaves the caller instead of receiving an error
//! value. Callers that need to keep going after a failure install their own
//! boundary with [`std::panic::catch_unwind`].
//!
//! All functions are `#[track_caller]`: the reported panic location is the
//! line that made the assertion.

use std::any::Any;
use std::fmt::Debug;

use crate::equality::{deep_equal, StructurallyComparable};
use crate::errors::AssertionFailure;
use crate::log_assertion_failure;
use crate::nil::Nullable;

#[track_caller]
fn fail(failure: AssertionFailure) -> ! {
    log_assertion_failure!(failure);
    panic!("{}", failure);
}

/// Panics unless `condition` is true.
///
/// Diagnostic: `Assertion failed: {message}`
///
/// # Example
///
/// ```
/// use vouch_core::assert_true;
///
/// assert_true(1 + 1 == 2, "arithmetic still works");
/// ```
#[track_caller]
pub fn assert_true(condition: bool, message: &str) {
    if !condition {
        fail(AssertionFailure::NotTrue {
            message: message.to_string(),
        });
    }
}

/// Panics unless `condition` is false.
///
/// Diagnostic: `Assertion failed: {message} - Expected false, but got true`
#[track_caller]
pub fn assert_false(condition: bool, message: &str) {
    if condition {
        fail(AssertionFailure::NotFalse {
            message: message.to_string(),
        });
    }
}

/// Panics unless `expected` and `actual` are structurally equal.
///
/// The two arguments may have different types; values of different
/// dynamic types are never equal. That includes `1_i32` against `1_i64`,
/// and a `&str` literal against a `String` with the same text: compare
/// `&"abc".to_string()` with a `String`, not `&"abc"`.
///
/// Diagnostic: `Assertion failed: {message} - Expected: {expected:?}, Actual: {actual:?}`
///
/// # Example
///
/// ```
/// use vouch_core::assert_equal;
///
/// assert_equal(&vec![1, 2], &vec![1, 2], "same elements");
/// ```
///
/// ```should_panic
/// use vouch_core::assert_equal;
///
/// assert_equal(&1, &"1", "an integer is not text");
/// ```
#[track_caller]
pub fn assert_equal<E, A>(expected: &E, actual: &A, message: &str)
where
    E: StructurallyComparable + Debug,
    A: Any + Debug,
{
    if !deep_equal(expected, actual) {
        fail(AssertionFailure::NotEqual {
            message: message.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        });
    }
}

/// Panics if `expected` and `actual` are structurally equal.
///
/// Diagnostic: `Assertion failed: {message} - Values should not be equal: {actual:?}`
#[track_caller]
pub fn assert_not_equal<E, A>(expected: &E, actual: &A, message: &str)
where
    E: StructurallyComparable + Debug,
    A: Any + Debug,
{
    if deep_equal(expected, actual) {
        fail(AssertionFailure::Equal {
            message: message.to_string(),
            actual: format!("{:?}", actual),
        });
    }
}

/// Panics unless `value` is absence-capable and currently absent.
///
/// Diagnostic: `Assertion failed: {message} - Expected nil, but got: {value:?}`
///
/// # Example
///
/// ```
/// use vouch_core::assert_nil;
///
/// let cached: Option<Box<String>> = None;
/// assert_nil(&cached, "cache starts empty");
/// ```
#[track_caller]
pub fn assert_nil<T>(value: &T, message: &str)
where
    T: Nullable + Debug + ?Sized,
{
    if !value.is_nil() {
        fail(AssertionFailure::NotNil {
            message: message.to_string(),
            value: format!("{:?}", value),
        });
    }
}

/// Panics if `value` is absence-capable and currently absent.
///
/// Diagnostic: `Assertion failed: {message} - Expected non-nil value`
#[track_caller]
pub fn assert_not_nil<T>(value: &T, message: &str)
where
    T: Nullable + Debug + ?Sized,
{
    if value.is_nil() {
        fail(AssertionFailure::Nil {
            message: message.to_string(),
        });
    }
}
