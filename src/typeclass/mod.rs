//! Type class traits over the sum-type monads.
//!
//! This module provides the type classes implemented by [`OptionalValue`]
//! and [`ResultValue`]:
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types (GAT) emulate them, so `Functor` and `Monad`
//! can be stated once for every container.
//!
//! # Examples
//!
//! ```rust
//! use monadic_iter::monad::{OptionalValue, ResultValue};
//! use monadic_iter::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(OptionalValue::Present(4)), OptionalValue::Present(8));
//! assert_eq!(double_all(ResultValue::<i32, ()>::Success(4)), ResultValue::Success(8));
//!
//! let chained = OptionalValue::Present(3).flat_map(|x| OptionalValue::Present(x + 1));
//! assert_eq!(chained, OptionalValue::Present(4));
//! ```
//!
//! [`OptionalValue`]: crate::monad::OptionalValue
//! [`ResultValue`]: crate::monad::ResultValue

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
