//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```

use super::functor::Functor;
use crate::monad::{OptionalValue, ResultValue};

/// A type class for functors that can lift a plain value and combine two contexts.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::monad::OptionalValue;
/// use monadic_iter::typeclass::Applicative;
///
/// let lifted: OptionalValue<i32> = <OptionalValue<()>>::pure(42);
/// assert_eq!(lifted, OptionalValue::Present(42));
///
/// let sum = OptionalValue::Present(1).map2(OptionalValue::Present(2), |x, y| x + y);
/// assert_eq!(sum, OptionalValue::Present(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;
}

impl<A> Applicative for OptionalValue<A> {
    #[inline]
    fn pure<B>(value: B) -> OptionalValue<B> {
        OptionalValue::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: OptionalValue<B>, function: F) -> OptionalValue<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }
}

impl<T, E> Applicative for ResultValue<T, E> {
    #[inline]
    fn pure<B>(value: B) -> ResultValue<B, E> {
        ResultValue::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: ResultValue<B, E>, function: F) -> ResultValue<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.and_then(|left| other.map(|right| function(left, right)))
    }
}
