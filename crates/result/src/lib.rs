//! A failure-carrying result container and its combinators.
//!
//! [`Outcome`] is the counterpart of `fpkit-option`'s `Optional` for
//! computations whose failures have a cause worth keeping. The failure type is
//! chosen by the caller and is passed through every combinator unchanged.
//!
//! ```
//! use fpkit_result::{kleisli, Outcome};
//!
//! let parse = |s: &str| Outcome::from(s.parse::<u32>().map_err(|e| e.to_string()));
//! let invert = |n: u32| {
//!     if n == 0 {
//!         Outcome::Failed("divide by zero".to_string())
//!     } else {
//!         Outcome::Ok(1.0 / f64::from(n))
//!     }
//! };
//! let parse_and_invert = kleisli(parse, invert);
//!
//! assert_eq!(parse_and_invert("4"), Outcome::Ok(0.25));
//! assert_eq!(parse_and_invert("0"), Outcome::Failed("divide by zero".to_string()));
//! assert!(parse_and_invert("four").is_failed());
//! ```

pub mod combinators;
pub mod composition;
pub mod outcome;

pub use self::{
    combinators::{bind, from_legacy, kleisli, lift, lift2},
    composition::forward_compose,
    outcome::Outcome,
};
