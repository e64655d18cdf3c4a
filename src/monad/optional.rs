//! Optional value - a value that may or may not be present.
//!
//! This module provides the `OptionalValue<T>` type, which represents either
//! a `Present(T)` payload or an `Absent` marker. It is the return type of
//! every pull on a [`LazyIterator`](crate::iter::LazyIterator), where `Absent`
//! is the sole exhaustion signal.
//!
//! # Examples
//!
//! ```rust
//! use monadic_iter::monad::OptionalValue;
//!
//! let present = OptionalValue::present(21);
//! let absent: OptionalValue<i32> = OptionalValue::absent();
//!
//! assert_eq!(present.map(|x| x * 2), OptionalValue::Present(42));
//! assert_eq!(absent.map(|x| x * 2), OptionalValue::Absent);
//!
//! // Chaining computations that may fail
//! let halve = |x: i32| {
//!     if x % 2 == 0 {
//!         OptionalValue::Present(x / 2)
//!     } else {
//!         OptionalValue::Absent
//!     }
//! };
//! assert_eq!(OptionalValue::present(8).and_then(halve).and_then(halve), OptionalValue::Present(2));
//! assert_eq!(OptionalValue::present(6).and_then(halve).and_then(halve), OptionalValue::Absent);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

use super::result::ResultValue;

/// A value that is either present or absent.
///
/// Exactly one variant is active at a time. `Absent` carries no payload and
/// equality is structural.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionalValue<T> {
    /// No value.
    Absent,
    /// Some value of type `T`.
    Present(T),
}

impl<T> OptionalValue<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Present`.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// assert!(OptionalValue::present(1).is_present());
    /// assert!(!OptionalValue::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is `Present` and the value satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// assert!(OptionalValue::present(2).is_present_and(|x| x > 1));
    /// assert!(!OptionalValue::present(0).is_present_and(|x| x > 1));
    /// assert!(!OptionalValue::<i32>::Absent.is_present_and(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_present_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&OptionalValue<T>` to `OptionalValue<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> OptionalValue<&T> {
        match self {
            Self::Present(value) => OptionalValue::Present(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Converts from `&mut OptionalValue<T>` to `OptionalValue<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> OptionalValue<&mut T> {
        match self {
            Self::Present(value) => OptionalValue::Present(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the present value, panicking with `message` if absent.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Absent`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }

    /// Returns the present value, consuming the optional.
    ///
    /// Unwrapping `Absent` is a contract violation, not a recoverable failure.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present("air").unwrap(), "air");
    /// ```
    ///
    /// ```rust,should_panic
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let absent: OptionalValue<&str> = OptionalValue::Absent;
    /// absent.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `OptionalValue::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns the present value or the provided default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present("car").unwrap_or("bike"), "car");
    /// assert_eq!(OptionalValue::Absent.unwrap_or("bike"), "bike");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the present value or computes one from a closure.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Returns the present value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Calls `function` with a reference to the present value, passing the optional on.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    /// Maps `Present(v)` to `Present(function(v))`, leaving `Absent` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let text = OptionalValue::present("Hello, World!".to_string());
    /// assert_eq!(text.map(|s| s.len()), OptionalValue::Present(13));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => OptionalValue::Present(function(value)),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Applies `function` to the present value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the present value, or computes a fallback from `default`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Result Conversion
    // =========================================================================

    /// Transforms `Present(v)` into `Success(v)` and `Absent` into `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::{OptionalValue, ResultValue};
    ///
    /// assert_eq!(OptionalValue::present(1).ok_or("none"), ResultValue::Success(1));
    /// assert_eq!(OptionalValue::<i32>::Absent.ok_or("none"), ResultValue::Failure("none"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> ResultValue<T, E> {
        match self {
            Self::Present(value) => ResultValue::Success(value),
            Self::Absent => ResultValue::Failure(error),
        }
    }

    /// Like [`ok_or`](Self::ok_or), computing the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> ResultValue<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => ResultValue::Success(value),
            Self::Absent => ResultValue::Failure(function()),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `Absent` if self is `Absent`, otherwise returns `other`.
    #[inline]
    pub fn and<U>(self, other: OptionalValue<U>) -> OptionalValue<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Monadic bind: chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let get = |index: usize| {
    ///     let data = [10, 20, 30];
    ///     OptionalValue::from_option(data.get(index).copied())
    /// };
    /// assert_eq!(OptionalValue::present(1).and_then(get), OptionalValue::Present(20));
    /// assert_eq!(OptionalValue::present(9).and_then(get), OptionalValue::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> OptionalValue<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Returns self if it is `Present`, otherwise returns `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns self if it is `Present`, otherwise calls `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => function(),
        }
    }

    /// Returns `Present` if exactly one of self and `other` is `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present(2).xor(OptionalValue::Absent), OptionalValue::Present(2));
    /// assert_eq!(OptionalValue::present(2).xor(OptionalValue::present(3)), OptionalValue::Absent);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (present @ Self::Present(_), Self::Absent) | (Self::Absent, present @ Self::Present(_)) => {
                present
            }
            _ => Self::Absent,
        }
    }

    /// Keeps `Present(v)` only if `predicate(&v)` holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Zipping
    // =========================================================================

    /// Pairs two present values; `Absent` if either side is absent.
    #[inline]
    pub fn zip<U>(self, other: OptionalValue<U>) -> OptionalValue<(T, U)> {
        match (self, other) {
            (Self::Present(left), OptionalValue::Present(right)) => OptionalValue::Present((left, right)),
            _ => OptionalValue::Absent,
        }
    }

    /// Combines two present values with `function`.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: OptionalValue<U>, function: F) -> OptionalValue<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(left, right)| function(left, right))
    }

    // =========================================================================
    // In-place Manipulation
    // =========================================================================

    /// Takes the value out, leaving `Absent` in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    /// Replaces the value with `Present(value)`, returning the old one.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Present(value))
    }

    /// Stores `value` and returns a mutable reference to it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Present(value);
        match self {
            Self::Present(value) => value,
            Self::Absent => unreachable!(),
        }
    }

    /// Inserts a computed value if absent, then returns a mutable reference to the payload.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, function: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Self::Absent = self {
            *self = Self::Present(function());
        }
        match self {
            Self::Present(value) => value,
            Self::Absent => unreachable!(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Collects the payload into a `Vec` of zero or one element.
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Present(value) => vec![value],
            Self::Absent => Vec::new(),
        }
    }

    /// Returns a borrowing iterator over the zero-or-one payload.
    #[inline]
    pub fn iter(&self) -> OptionalIter<'_, T> {
        OptionalIter::new(self.as_ref())
    }

    /// Converts from the standard nullable representation.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Converts into the standard nullable representation.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Nested Structures
// =============================================================================

impl<T> OptionalValue<OptionalValue<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> OptionalValue<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => OptionalValue::Absent,
        }
    }
}

impl<T, U> OptionalValue<(T, U)> {
    /// Splits an optional pair into a pair of optionals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// assert_eq!(
    ///     OptionalValue::present((1, 'a')).unzip(),
    ///     (OptionalValue::Present(1), OptionalValue::Present('a'))
    /// );
    /// ```
    #[inline]
    pub fn unzip(self) -> (OptionalValue<T>, OptionalValue<U>) {
        match self {
            Self::Present((left, right)) => (OptionalValue::Present(left), OptionalValue::Present(right)),
            Self::Absent => (OptionalValue::Absent, OptionalValue::Absent),
        }
    }
}

impl<T, E> OptionalValue<ResultValue<T, E>> {
    /// Swaps an optional result into a result of an optional.
    ///
    /// `Absent` maps to `Success(Absent)`.
    #[inline]
    pub fn transpose(self) -> ResultValue<OptionalValue<T>, E> {
        match self {
            Self::Present(ResultValue::Success(value)) => ResultValue::Success(OptionalValue::Present(value)),
            Self::Present(ResultValue::Failure(error)) => ResultValue::Failure(error),
            Self::Absent => ResultValue::Success(OptionalValue::Absent),
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T> BitAnd for OptionalValue<T> {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        self.and(other)
    }
}

impl<T> BitOr for OptionalValue<T> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.or(other)
    }
}

impl<T> BitXor for OptionalValue<T> {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self {
        self.xor(other)
    }
}

impl<T: fmt::Display> fmt::Display for OptionalValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "{value}"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for OptionalValue<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    #[inline]
    fn from(optional: OptionalValue<T>) -> Self {
        optional.into_option()
    }
}

impl<T> Default for OptionalValue<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Owning std iterator over an [`OptionalValue`].
#[derive(Debug, Clone)]
pub struct OptionalIntoIter<T> {
    inner: OptionalValue<T>,
}

impl<T> Iterator for OptionalIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_present());
        (length, Some(length))
    }
}

impl<T> ExactSizeIterator for OptionalIntoIter<T> {}

/// Borrowing std iterator over an [`OptionalValue`].
#[derive(Debug, Clone)]
pub struct OptionalIter<'a, T> {
    inner: OptionalValue<&'a T>,
}

impl<'a, T> OptionalIter<'a, T> {
    pub(crate) const fn new(inner: OptionalValue<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for OptionalIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_present());
        (length, Some(length))
    }
}

impl<T> ExactSizeIterator for OptionalIter<'_, T> {}

impl<T> IntoIterator for OptionalValue<T> {
    type Item = T;
    type IntoIter = OptionalIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        OptionalIntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a OptionalValue<T> {
    type Item = &'a T;
    type IntoIter = OptionalIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, V: FromIterator<A>> FromIterator<OptionalValue<A>> for OptionalValue<V> {
    /// Collects every payload, or returns `Absent` on the first `Absent` element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let all: OptionalValue<Vec<i32>> =
    ///     vec![OptionalValue::present(1), OptionalValue::present(2)].into_iter().collect();
    /// assert_eq!(all, OptionalValue::Present(vec![1, 2]));
    ///
    /// let gap: OptionalValue<Vec<i32>> =
    ///     vec![OptionalValue::present(1), OptionalValue::Absent].into_iter().collect();
    /// assert_eq!(gap, OptionalValue::Absent);
    /// ```
    fn from_iter<I: IntoIterator<Item = OptionalValue<A>>>(iterable: I) -> Self {
        let mut saw_absent = false;
        let collected = iterable
            .into_iter()
            .map_while(|element| {
                let value = element.into_option();
                saw_absent = value.is_none();
                value
            })
            .collect();
        if saw_absent { Self::Absent } else { Self::Present(collected) }
    }
}
