//! An optional-value container and its combinators.
//!
//! [`Optional`] records whether a value exists and nothing else: when a value is
//! missing there is no reason attached. Use `fpkit-result` when the cause of a
//! failure has to travel with it.
//!
//! ## Key Components
//!
//! - **`optional`**: the [`Optional`] enum with its queries, extraction and
//!   method-style combinators.
//! - **`combinators`**: curried [`lift`], [`lift2`], [`bind`] and the
//!   [`from_legacy`] adapter for value-plus-failure pairs.
//! - **`errors`**: [`AbsentError`], returned when extracting from an absent
//!   container.
//!
//! ```
//! use fpkit_option::{bind, lift, Optional};
//!
//! let half = bind(|n: i32| if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent });
//! let describe = lift(|n: i32| format!("half is {n}"));
//!
//! assert_eq!(describe(half(Optional::Present(8))), Optional::Present("half is 4".to_string()));
//! assert!(describe(half(Optional::Present(7))).is_absent());
//! ```

pub mod combinators;
pub mod errors;
pub mod optional;

pub use self::{
    combinators::{bind, from_legacy, lift, lift2},
    errors::{AbsentError, Result},
    optional::Optional,
};
