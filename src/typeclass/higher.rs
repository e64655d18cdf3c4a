//! Higher-kinded type emulation using Generic Associated Types (GAT).
//!
//! Rust has no native higher-kinded types, so a type constructor such as
//! `OptionalValue<_>` is described by a trait with a generic associated type
//! that rebuilds the same container around a different element type.

use crate::monad::{OptionalValue, ResultValue};

/// A trait for emulating higher-kinded types.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::monad::OptionalValue;
/// use monadic_iter::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<OptionalValue<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type held by this container.
    type Inner;

    /// The same container with its element type replaced by `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for OptionalValue<A> {
    type Inner = A;
    type WithType<B> = OptionalValue<B>;
}

impl<T, E> TypeConstructor for ResultValue<T, E> {
    type Inner = T;
    type WithType<B> = ResultValue<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<OptionalValue<String>>();
    }

    #[test]
    fn optional_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: OptionalValue<String> = transform(OptionalValue::Present(42));
        assert_eq!(result, OptionalValue::Absent);
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            ResultValue<T, E>: TypeConstructor<Inner = T, WithType<B> = ResultValue<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<Vec<u8>, (), char>();
    }
}
