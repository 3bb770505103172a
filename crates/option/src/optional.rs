//! The `Optional` container

use crate::errors::{AbsentError, Result};

/// A value that is either present or absent, with no record of why it is absent
///
/// Ordering matches `std::option::Option`: `Absent` sorts before any `Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    Absent,
    Present(T),
}

impl<T> Optional<T> {
    /// Wrap `value` in a present container
    #[must_use]
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Create an absent container
    #[must_use]
    pub const fn absent() -> Self {
        Optional::Absent
    }

    /// Returns `true` if a value is present
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if no value is present
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Take the inner value out, reporting absence as [`AbsentError`]
    pub fn extract(self) -> Result<T> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(AbsentError),
        }
    }

    /// Take the inner value out as a `(value, found)` pair
    ///
    /// An absent container yields `T::default()` and `false`.
    pub fn extract_or_default(self) -> (T, bool)
    where
        T: Default,
    {
        match self {
            Optional::Present(value) => (value, true),
            Optional::Absent => (T::default(), false),
        }
    }

    /// Borrow the inner value without consuming the container
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Return the present value or `default`
    pub fn unwrap_or(self, default: T) -> T {
        self.unwrap_or_else(|| default)
    }

    /// Return the present value or compute one with `f`
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Apply `f` to a present value, keeping absence as is
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Combine two present values with `f`
    ///
    /// `self` is inspected before `other`, so an absent `self` short-circuits.
    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        let Optional::Present(left) = self else {
            return Optional::Absent;
        };
        let Optional::Present(right) = other else {
            return Optional::Absent;
        };
        Optional::Present(f(left, right))
    }

    /// Chain a container-returning function, without re-wrapping its output
    pub fn and_then<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Optional::Present(x),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(x) => Some(x),
            Optional::Absent => None,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Optional<T> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(x) => Optional::Present(x),
            Err(err) => crate::combinators::discard(err),
        }
    }
}
