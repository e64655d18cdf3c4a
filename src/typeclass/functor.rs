//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic_iter::monad::OptionalValue;
//! use monadic_iter::typeclass::Functor;
//!
//! let present = OptionalValue::Present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), OptionalValue::Present("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::monad::{OptionalValue, ResultValue};

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for OptionalValue<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> OptionalValue<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for ResultValue<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> ResultValue<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_fmap_present() {
        assert_eq!(OptionalValue::Present(2).fmap(|x| x + 1), OptionalValue::Present(3));
    }

    #[rstest]
    fn optional_fmap_absent() {
        let absent: OptionalValue<i32> = OptionalValue::Absent;
        assert_eq!(absent.fmap(|x| x + 1), OptionalValue::Absent);
    }

    #[rstest]
    fn result_fmap_leaves_failure() {
        let failure: ResultValue<i32, &str> = ResultValue::Failure("e");
        assert_eq!(failure.fmap(|x| x * 2), ResultValue::Failure("e"));
    }

    #[rstest]
    fn optional_void() {
        assert_eq!(OptionalValue::Present("x").void(), OptionalValue::Present(()));
    }
}
