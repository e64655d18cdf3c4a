//! Sum-type monads for absence- and failure-safe computation.
//!
//! This module provides the two closed, two-variant containers the iterator
//! engine composes with:
//!
//! - [`OptionalValue`]: `Present(T)` or `Absent`
//! - [`ResultValue`]: `Success(T)` or `Failure(E)`
//!
//! Both are plain enums, so matching on them is exhaustive and no third
//! variant can exist.
//!
//! Absence and failure are ordinary return values. Unwrapping the wrong
//! variant is a contract violation and panics. [`ResultValue::catch`] is the
//! single boundary that turns a panic from a wrapped call into a
//! [`CaughtPanic`] failure.
//!
//! # Examples
//!
//! ```rust
//! use monadic_iter::monad::{OptionalValue, ResultValue};
//!
//! let parse = |text: &str| ResultValue::from_result(text.parse::<i32>());
//!
//! let first_even = ["7", "x", "12"]
//!     .into_iter()
//!     .map(|text| parse(text).ok())
//!     .find(|value| value.is_present_and(|n| n % 2 == 0));
//!
//! assert_eq!(first_even, Some(OptionalValue::Present(12)));
//! ```

mod error;
mod optional;
mod result;

pub use error::CaughtPanic;
pub use optional::{OptionalIntoIter, OptionalIter, OptionalValue};
pub use result::ResultValue;

static_assertions::assert_impl_all!(OptionalValue<i32>: Copy, Eq, std::hash::Hash, Send, Sync);
static_assertions::assert_impl_all!(ResultValue<i32, u8>: Copy, Eq, std::hash::Hash, Send, Sync);
static_assertions::assert_impl_all!(CaughtPanic: std::error::Error, Send, Sync);
