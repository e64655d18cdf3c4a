//! Monad type class - sequencing computations with dependency.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::monad::{OptionalValue, ResultValue};

/// A type class for applicatives whose next step may depend on the previous value.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::monad::OptionalValue;
/// use monadic_iter::typeclass::Monad;
///
/// let safe_div = |x: i32| if x == 0 { OptionalValue::Absent } else { OptionalValue::Present(100 / x) };
/// assert_eq!(OptionalValue::Present(4).flat_map(safe_div), OptionalValue::Present(25));
/// assert_eq!(OptionalValue::Present(0).flat_map(safe_div), OptionalValue::Absent);
/// ```
pub trait Monad: Applicative {
    /// Chains a computation that produces a new context.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two contexts, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for OptionalValue<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> OptionalValue<B>
    where
        F: FnOnce(A) -> OptionalValue<B>,
    {
        OptionalValue::and_then(self, function)
    }
}

impl<T, E> Monad for ResultValue<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> ResultValue<B, E>
    where
        F: FnOnce(T) -> ResultValue<B, E>,
    {
        ResultValue::and_then(self, function)
    }
}
