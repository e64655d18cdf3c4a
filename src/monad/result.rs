//! Result value - a computation that either succeeded or failed.
//!
//! This module provides the `ResultValue<T, E>` type with two independent
//! payload channels: `Success(T)` and `Failure(E)`. Failures are ordinary
//! return values. The only place where a panic raised by foreign code is
//! turned into a `Failure` is [`ResultValue::catch`] (and
//! [`ResultValue::catch_from`]).
//!
//! # Examples
//!
//! ```rust
//! use monadic_iter::monad::{OptionalValue, ResultValue};
//!
//! let parsed: ResultValue<i32, String> = ResultValue::success(4);
//! let failed: ResultValue<i32, String> = ResultValue::failure("bad input".to_string());
//!
//! assert_eq!(parsed.clone().map(|x| x * 10), ResultValue::Success(40));
//! assert_eq!(failed.clone().map(|x| x * 10), ResultValue::Failure("bad input".to_string()));
//!
//! // Projecting each channel onto OptionalValue
//! assert_eq!(parsed.ok(), OptionalValue::Present(4));
//! assert_eq!(failed.err(), OptionalValue::Present("bad input".to_string()));
//! ```

use std::fmt;
use std::ops::{Add, Mul};
use std::panic::{self, AssertUnwindSafe};

use super::error::CaughtPanic;
use super::optional::{OptionalIntoIter, OptionalIter, OptionalValue};

/// A value that is either a success or a failure.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultValue<T, E> {
    /// The success channel.
    Success(T),
    /// The failure channel.
    Failure(E),
}

impl<T, E> ResultValue<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error in `Failure`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies the predicate.
    #[inline]
    pub fn is_success_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose error satisfies the predicate.
    #[inline]
    pub fn is_failure_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Channel Projection
    // =========================================================================

    /// Projects the success channel onto an [`OptionalValue`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::{OptionalValue, ResultValue};
    ///
    /// let success: ResultValue<u32, &str> = ResultValue::Success(2);
    /// assert_eq!(success.ok(), OptionalValue::Present(2));
    ///
    /// let failure: ResultValue<u32, &str> = ResultValue::Failure("nothing here");
    /// assert_eq!(failure.ok(), OptionalValue::Absent);
    /// ```
    #[inline]
    pub fn ok(self) -> OptionalValue<T> {
        match self {
            Self::Success(value) => OptionalValue::Present(value),
            Self::Failure(_) => OptionalValue::Absent,
        }
    }

    /// Projects the failure channel onto an [`OptionalValue`].
    #[inline]
    pub fn err(self) -> OptionalValue<E> {
        match self {
            Self::Success(_) => OptionalValue::Absent,
            Self::Failure(error) => OptionalValue::Present(error),
        }
    }

    /// Converts from `&ResultValue<T, E>` to `ResultValue<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> ResultValue<&T, &E> {
        match self {
            Self::Success(value) => ResultValue::Success(value),
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps the success channel, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> ResultValue<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ResultValue::Success(function(value)),
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    /// Maps the failure channel, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let failure: ResultValue<i32, i32> = ResultValue::Failure(13);
    /// assert_eq!(failure.map_err(|code| format!("error code {code}")), ResultValue::Failure("error code 13".to_string()));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, function: F) -> ResultValue<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => ResultValue::Success(value),
            Self::Failure(error) => ResultValue::Failure(function(error)),
        }
    }

    /// Calls `function` with a reference to the success value.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the failure value.
    #[inline]
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, panicking with `message` on failure.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with `message` followed by the error.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns the failure value, panicking with `message` on success.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`, with `message` followed by the value.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => panic!("{message}: {value:?}"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let failure: ResultValue<u32, &str> = ResultValue::Failure("emergency failure");
    /// failure.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `ResultValue::unwrap()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("called `ResultValue::unwrap_err()` on a `Success` value: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if self is a success, otherwise the failure of self.
    #[inline]
    pub fn and<U>(self, other: ResultValue<U, E>) -> ResultValue<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }

    /// Monadic bind over the success channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let checked_square = |x: u32| match x.checked_mul(x) {
    ///     Some(square) => ResultValue::Success(square),
    ///     None => ResultValue::Failure("overflowed"),
    /// };
    /// assert_eq!(ResultValue::Success(2).and_then(checked_square), ResultValue::Success(4));
    /// assert_eq!(ResultValue::Success(1_000_000).and_then(checked_square), ResultValue::Failure("overflowed"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> ResultValue<U, E>
    where
        F: FnOnce(T) -> ResultValue<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }

    /// Returns self if it is a success, otherwise `other`.
    #[inline]
    pub fn or<F2>(self, other: ResultValue<T, F2>) -> ResultValue<T, F2> {
        match self {
            Self::Success(value) => ResultValue::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Recovers from a failure by calling `function` with the error.
    #[inline]
    pub fn or_else<F2, F>(self, function: F) -> ResultValue<T, F2>
    where
        F: FnOnce(E) -> ResultValue<T, F2>,
    {
        match self {
            Self::Success(value) => ResultValue::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Collects the success value into a `Vec` of zero or one element.
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Success(value) => vec![value],
            Self::Failure(_) => Vec::new(),
        }
    }

    /// Returns a borrowing iterator over the success value.
    #[inline]
    pub fn iter(&self) -> OptionalIter<'_, T> {
        OptionalIter::new(self.as_ref().ok())
    }

    /// Converts from the standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into the standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Panic Boundary
// =============================================================================

impl<T> ResultValue<T, CaughtPanic> {
    /// Invokes `function`, translating a panic raised by it into `Failure`.
    ///
    /// Only a panic unwinding out of `function` itself is captured. The
    /// installed panic hook still runs, so the message is reported as usual.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let maybe_error = |v: i32| if v % 2 == 0 { v + 1 } else { panic!("odd input {v}") };
    ///
    /// assert_eq!(ResultValue::catch(|| maybe_error(2)), ResultValue::Success(3));
    /// assert_eq!(
    ///     ResultValue::catch(|| maybe_error(3)).unwrap_err().message(),
    ///     "odd input 3"
    /// );
    /// ```
    pub fn catch<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let caught = CaughtPanic::from_payload(payload.as_ref());
                #[cfg(feature = "tracing")]
                tracing::debug!(panic_message = caught.message(), "captured panic as failure");
                Self::Failure(caught)
            }
        }
    }

    /// Invokes `function(argument)` under the same rules as [`catch`](Self::catch).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let parse = |text: &str| text.parse::<i32>().unwrap();
    /// assert_eq!(ResultValue::catch_from(parse, "12"), ResultValue::Success(12));
    /// assert!(ResultValue::catch_from(parse, "twelve").is_failure());
    /// ```
    pub fn catch_from<A, F>(function: F, argument: A) -> Self
    where
        F: FnOnce(A) -> T,
    {
        Self::catch(move || function(argument))
    }
}

// =============================================================================
// Nested Structures
// =============================================================================

impl<T, E> ResultValue<ResultValue<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> ResultValue<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> ResultValue<OptionalValue<T>, E> {
    /// Swaps a result of an optional into an optional result.
    ///
    /// `Success(Absent)` maps to `Absent`.
    #[inline]
    pub fn transpose(self) -> OptionalValue<ResultValue<T, E>> {
        match self {
            Self::Success(OptionalValue::Present(value)) => OptionalValue::Present(ResultValue::Success(value)),
            Self::Success(OptionalValue::Absent) => OptionalValue::Absent,
            Self::Failure(error) => OptionalValue::Present(ResultValue::Failure(error)),
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Add<Output = T>, E> Add for ResultValue<T, E> {
    type Output = Self;

    /// Adds two successes; otherwise yields the first failure.
    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => Self::Success(left + right),
            (Self::Failure(error), _) | (_, Self::Failure(error)) => Self::Failure(error),
        }
    }
}

impl<T: Mul<Output = T>, E> Mul for ResultValue<T, E> {
    type Output = Self;

    /// Multiplies two successes; otherwise yields the first failure.
    fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => Self::Success(left * right),
            (Self::Failure(error), _) | (_, Self::Failure(error)) => Self::Failure(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for ResultValue<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for ResultValue<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<ResultValue<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: ResultValue<T, E>) -> Self {
        result.into_result()
    }
}

impl<T, E> IntoIterator for ResultValue<T, E> {
    type Item = T;
    type IntoIter = OptionalIntoIter<T>;

    /// Iterates over the success value; a failure yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<A, E, V: FromIterator<A>> FromIterator<ResultValue<A, E>> for ResultValue<V, E> {
    /// Collects every success, or returns the first failure.
    fn from_iter<I: IntoIterator<Item = ResultValue<A, E>>>(iterable: I) -> Self {
        let mut first_failure = None;
        let collected = iterable
            .into_iter()
            .map_while(|element| match element {
                ResultValue::Success(value) => Some(value),
                ResultValue::Failure(error) => {
                    first_failure = Some(error);
                    None
                }
            })
            .collect();
        match first_failure {
            Some(error) => Self::Failure(error),
            None => Self::Success(collected),
        }
    }
}
