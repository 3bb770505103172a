//! The `Outcome` container

/// Either a successfully produced value or the failure that prevented it
///
/// The failure type `E` belongs to the caller. It is carried through every
/// combinator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    Ok(T),
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a successfully produced `value`
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Wrap the `error` that prevented a value
    #[must_use]
    pub const fn failed(error: E) -> Self {
        Outcome::Failed(error)
    }

    /// Returns `true` if the outcome holds a value
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome holds a failure
    pub const fn is_failed(&self) -> bool {
        !self.is_ok()
    }

    /// Convert into a std `Result`, handing back the original failure
    pub fn extract(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Failed(error) => Err(error),
        }
    }

    /// Split into a `(value, failure)` pair
    ///
    /// A failed outcome yields `T::default()` alongside its error.
    pub fn into_legacy(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Ok(value) => (value, None),
            Outcome::Failed(error) => (T::default(), Some(error)),
        }
    }

    /// Borrow the value or failure without consuming the outcome
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Borrow the failure, if there is one
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Failed(error) => Some(error),
        }
    }

    /// Apply `f` to a successful value, passing a failure through untouched
    pub fn map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Apply `f` to the failure, leaving a successful value as is
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Failed(error) => Outcome::Failed(f(error)),
        }
    }

    /// Combine two successful values with `f`
    ///
    /// When both sides failed, the failure from `self` wins.
    pub fn zip_with<U, R, F>(self, other: Outcome<U, E>, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        let left = match self {
            Outcome::Ok(value) => value,
            Outcome::Failed(error) => return Outcome::Failed(error),
        };
        let right = match other {
            Outcome::Ok(value) => value,
            Outcome::Failed(error) => return Outcome::Failed(error),
        };
        Outcome::Ok(f(left, right))
    }

    /// Chain an outcome-returning function without re-wrapping its output
    pub fn and_then<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(x) => Outcome::Ok(x),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.extract()
    }
}
