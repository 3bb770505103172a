//! Curried combinators over [`Optional`]
//!
//! Each combinator takes a plain function and returns a new function that works on
//! containers, so lifted functions can be stored, passed around and composed before
//! any container exists.

use crate::optional::Optional;
use tracing::trace;

/// Lift `f` so it maps `Present(x)` to `Present(f(x))` and keeps `Absent`
pub fn lift<T, R, F>(f: F) -> impl Fn(Optional<T>) -> Optional<R>
where
    F: Fn(T) -> R,
{
    move |x| x.map(&f)
}

/// Lift a binary `f`; the result is absent if either argument is
pub fn lift2<A, B, C, F>(f: F) -> impl Fn(Optional<A>, Optional<B>) -> Optional<C>
where
    F: Fn(A, B) -> C,
{
    move |x, y| x.zip_with(y, &f)
}

/// Lift a container-returning `f` and flatten, so `Present(x)` maps to exactly `f(x)`
pub fn bind<T, R, F>(f: F) -> impl Fn(Optional<T>) -> Optional<R>
where
    F: Fn(T) -> Optional<R>,
{
    move |x| x.and_then(&f)
}

/// Wrap a value-plus-failure pair
///
/// Any failure yields `Absent`. The failure itself is dropped, since an
/// [`Optional`] has nowhere to keep it.
pub fn from_legacy<T, E>(value: T, failure: Option<E>) -> Optional<T> {
    match failure {
        Some(failure) => discard(failure),
        None => Optional::Present(value),
    }
}

pub(crate) fn discard<T, E>(failure: E) -> Optional<T> {
    trace!(
        failure = std::any::type_name::<E>(),
        "discarding failure, value is absent"
    );
    drop(failure);
    Optional::Absent
}
