//! Curried combinators over [`Outcome`]
//!
//! None of these combinators touch a failure: whatever error enters is the error
//! that comes out.

use crate::composition::forward_compose;
use crate::outcome::Outcome;
use tracing::trace;

/// Lift `f` so it maps `Ok(x)` to `Ok(f(x))` and passes failures through
pub fn lift<T, R, E, F>(f: F) -> impl Fn(Outcome<T, E>) -> Outcome<R, E>
where
    F: Fn(T) -> R,
{
    move |x| x.map(&f)
}

/// Lift a binary `f`
///
/// The left argument is checked first, so when both arguments failed the left
/// failure is the one returned.
pub fn lift2<A, B, C, E, F>(f: F) -> impl Fn(Outcome<A, E>, Outcome<B, E>) -> Outcome<C, E>
where
    F: Fn(A, B) -> C,
{
    move |x, y| x.zip_with(y, &f)
}

/// Lift an outcome-returning `f` and flatten, so `Ok(x)` maps to exactly `f(x)`
pub fn bind<T, R, E, F>(f: F) -> impl Fn(Outcome<T, E>) -> Outcome<R, E>
where
    F: Fn(T) -> Outcome<R, E>,
{
    move |x| x.and_then(&f)
}

/// Wrap a value-plus-failure pair, keeping the failure as is
pub fn from_legacy<T, E>(value: T, failure: Option<E>) -> Outcome<T, E> {
    match failure {
        Some(error) => Outcome::Failed(error),
        None => Outcome::Ok(value),
    }
}

/// Left-to-right Kleisli composition: `kleisli(f, g)(a)` is `bind(g)(f(a))`
///
/// `g` only runs when `f` succeeds. A failure from `f` is returned unchanged.
pub fn kleisli<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Outcome<C, E>
where
    F: Fn(A) -> Outcome<B, E>,
    G: Fn(B) -> Outcome<C, E>,
{
    let first = move |a: A| {
        let outcome = f(a);
        if outcome.is_failed() {
            trace!("first stage failed, skipping second stage");
        }
        outcome
    };
    forward_compose(first, bind(g))
}
