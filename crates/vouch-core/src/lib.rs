//! Vouch Core - runtime assertions for enforcing invariants
//!
//! This crate provides six assertion functions that either return normally
//! or abort the current call stack with a descriptive diagnostic:
//! - `assert_true` / `assert_false` on boolean conditions
//! - `assert_equal` / `assert_not_equal` using deep structural equality
//! - `assert_nil` / `assert_not_nil` using absence-capability checks
//!
//! Failures are panics, never `Result` values. Each failure is also logged
//! as a structured `tracing` event before unwinding.

pub mod assert;
pub mod equality;
pub mod errors;
pub mod logging_facility;
pub mod nil;

// Re-export commonly used types
pub use assert::{
    assert_equal, assert_false, assert_nil, assert_not_equal, assert_not_nil, assert_true,
};
pub use equality::{deep_equal, StructurallyComparable};
pub use errors::{AssertionFailure, AssertionKind};
pub use nil::{Nil, Nullable};
