//! # monadic-iter
//!
//! Lazy iterator pipelines and the two sum-type monads that drive them.
//!
//! ## Overview
//!
//! - **Monads**: [`OptionalValue`](monad::OptionalValue) (`Present` / `Absent`)
//!   and [`ResultValue`](monad::ResultValue) (`Success` / `Failure`), with
//!   combinators, operator overloads and conversions to `Option` / `Result`
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` implemented for
//!   both monads through GAT-based higher-kinded type emulation
//! - **Lazy Iterators**: a pull protocol whose exhaustion signal is
//!   `OptionalValue::Absent`, with sources, combinators and terminal operations
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (default)
//! - `iter`: Lazy iterator pipelines (default)
//! - `serde`: `Serialize` / `Deserialize` for both monads
//! - `fxhash`: Use `FxHash` for `unique` bookkeeping
//! - `ahash`: Use `aHash` for `unique` bookkeeping
//! - `tracing`: Emit a debug event when a panic is captured as a failure
//! - `full`: Enable all features except the hasher choices
//!
//! ## Example
//!
//! ```rust
//! use monadic_iter::prelude::*;
//!
//! let words = iter::from_iter(["3", "x", "4", "5"])
//!     .map(|text| ResultValue::from_result(text.parse::<u32>()))
//!     .filter_map(ResultValue::ok)
//!     .intersperse(0)
//!     .collect_vec();
//! assert_eq!(words, vec![3, 0, 4, 0, 5]);
//!
//! let total = OptionalValue::Present(2).flat_map(|x| OptionalValue::Present(x * 21));
//! assert_eq!(total, OptionalValue::Present(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the monads, the type class traits and the iterator traits.
///
/// # Usage
///
/// ```rust
/// use monadic_iter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::monad::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "iter")]
    pub use crate::iter::{self, IntoLazyIterator, LazyIterator, Terminal};
}

pub mod monad;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "iter")]
pub mod iter;
