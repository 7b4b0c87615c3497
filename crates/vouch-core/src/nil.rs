//! Absence ("nil") semantics
//!
//! Only types that can represent "no value" are ever nil. The check is
//! split in two: first whether the type is absence-capable at all, then
//! whether this instance is currently absent. Plain values, strings,
//! collections and user structs are never nil, however empty they look.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Capability to report absence
///
/// Both methods default to `false`, so a user type opts in as a plain
/// never-nil value with an empty impl:
///
/// ```
/// use vouch_core::Nullable;
///
/// #[derive(Debug)]
/// struct Config {
///     retries: u32,
/// }
///
/// impl Nullable for Config {}
///
/// assert!(!Config { retries: 0 }.is_nil());
/// ```
pub trait Nullable {
    /// Whether the type admits an explicit absent state
    fn is_absence_capable(&self) -> bool {
        false
    }

    /// Whether this instance holds no underlying target
    fn is_absent(&self) -> bool {
        false
    }

    /// Absence-capable and currently absent
    fn is_nil(&self) -> bool {
        self.is_absence_capable() && self.is_absent()
    }
}

/// The untyped "no value" marker. Always nil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

impl Nullable for Nil {
    fn is_absence_capable(&self) -> bool {
        true
    }

    fn is_absent(&self) -> bool {
        true
    }
}

impl<T> Nullable for Option<T> {
    fn is_absence_capable(&self) -> bool {
        true
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_absence_capable(&self) -> bool {
        true
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_absence_capable(&self) -> bool {
        true
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl Nullable for serde_json::Value {
    fn is_absence_capable(&self) -> bool {
        true
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

// Pointer-like types that always hold a target.
macro_rules! impl_never_absent {
    ($($ty:ident),*) => {
        $(
            impl<T: ?Sized> Nullable for $ty<T> {
                fn is_absence_capable(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_never_absent!(Box, Rc, Arc);

impl<T: ?Sized> Nullable for &T {
    fn is_absence_capable(&self) -> bool {
        true
    }
}

macro_rules! impl_value_type {
    ($($ty:ty),*) => {
        $(impl Nullable for $ty {})*
    };
}

impl_value_type!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, str
);

impl<T> Nullable for Vec<T> {}
impl<T> Nullable for VecDeque<T> {}
impl<T> Nullable for [T] {}
impl<T, const N: usize> Nullable for [T; N] {}
impl<K, V, S> Nullable for HashMap<K, V, S> {}
impl<K, V> Nullable for BTreeMap<K, V> {}
impl<T, S> Nullable for HashSet<T, S> {}
impl<T> Nullable for BTreeSet<T> {}
