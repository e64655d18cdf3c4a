//! Sources that start a pipeline, and the bridge back to `std::iter::Iterator`.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::protocol::LazyIterator;
use crate::monad::{OptionalValue, ResultValue};

// =============================================================================
// Source
// =============================================================================

/// Wraps any `std` iterable so it can be driven through [`LazyIterator`].
#[derive(Clone, Debug)]
pub struct Source<I> {
    inner: I,
}

impl<I> Source<I> {
    pub(crate) const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped `std` iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> LazyIterator for Source<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> OptionalValue<I::Item> {
        OptionalValue::from_option(self.inner.next())
    }

    fn nth(&mut self, index: usize) -> OptionalValue<I::Item> {
        OptionalValue::from_option(self.inner.nth(index))
    }
}

/// Creates a lazy iterator from anything that implements `IntoIterator`.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator};
/// use monadic_iter::monad::OptionalValue;
///
/// let mut letters = iter::from_iter(vec!['a', 'b']);
/// assert_eq!(letters.advance(), OptionalValue::Present('a'));
/// assert_eq!(letters.advance(), OptionalValue::Present('b'));
/// assert_eq!(letters.advance(), OptionalValue::Absent);
/// ```
pub fn from_iter<I: IntoIterator>(iterable: I) -> Source<I::IntoIter> {
    Source::new(iterable.into_iter())
}

// =============================================================================
// Once / OnceWith
// =============================================================================

/// Yields a single element. See [`once`].
#[derive(Clone, Debug)]
pub struct Once<T> {
    value: OptionalValue<T>,
}

impl<T> LazyIterator for Once<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> OptionalValue<T> {
        self.value.take()
    }
}

/// Creates an iterator that yields `value` exactly once.
pub const fn once<T>(value: T) -> Once<T> {
    Once {
        value: OptionalValue::Present(value),
    }
}

/// Yields the result of a deferred computation once. See [`once_with`].
#[derive(Clone)]
pub struct OnceWith<F> {
    function: OptionalValue<F>,
}

impl<F> fmt::Debug for OnceWith<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OnceWith")
            .field("pending", &self.function.is_present())
            .finish()
    }
}

impl<T, F: FnOnce() -> T> LazyIterator for OnceWith<F> {
    type Item = T;

    fn advance(&mut self) -> OptionalValue<T> {
        self.function.take().map(|function| function())
    }

    // Skipping the only element must not evaluate it.
    fn advance_by(&mut self, count: usize) -> ResultValue<(), usize> {
        if count == 0 {
            return ResultValue::Success(());
        }
        if self.function.take().is_present() {
            if count == 1 {
                ResultValue::Success(())
            } else {
                ResultValue::Failure(1)
            }
        } else {
            ResultValue::Failure(0)
        }
    }
}

/// Creates an iterator that calls `function` on the first pull and yields its result.
///
/// `function` is never called if the element is skipped or never pulled.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator};
/// use monadic_iter::monad::OptionalValue;
///
/// let mut lazy = iter::once_with(|| "computed");
/// assert_eq!(lazy.advance(), OptionalValue::Present("computed"));
/// assert_eq!(lazy.advance(), OptionalValue::Absent);
/// ```
pub const fn once_with<T, F: FnOnce() -> T>(function: F) -> OnceWith<F> {
    OnceWith {
        function: OptionalValue::Present(function),
    }
}

// =============================================================================
// Repeat / RepeatWith / FromFn / Empty
// =============================================================================

/// Yields clones of one value forever. See [`repeat`].
#[derive(Clone, Debug)]
pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> LazyIterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> OptionalValue<T> {
        OptionalValue::Present(self.value.clone())
    }

    fn advance_by(&mut self, _count: usize) -> ResultValue<(), usize> {
        ResultValue::Success(())
    }
}

/// Creates an infinite iterator of clones of `value`.
pub const fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Yields the results of repeated calls to a closure. See [`repeat_with`].
#[derive(Clone)]
pub struct RepeatWith<F> {
    function: F,
}

impl<F> fmt::Debug for RepeatWith<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("RepeatWith").finish_non_exhaustive()
    }
}

impl<T, F: FnMut() -> T> LazyIterator for RepeatWith<F> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> OptionalValue<T> {
        OptionalValue::Present((self.function)())
    }
}

/// Creates an infinite iterator whose elements come from calling `function`.
pub const fn repeat_with<T, F: FnMut() -> T>(function: F) -> RepeatWith<F> {
    RepeatWith { function }
}

/// Yields whatever a closure returns. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    function: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F: FnMut() -> OptionalValue<T>> LazyIterator for FromFn<F> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> OptionalValue<T> {
        (self.function)()
    }
}

/// Creates an iterator whose `advance` is `function`.
///
/// The result is not fused: `function` is called on every pull, even after
/// it has returned `Absent`.
pub const fn from_fn<T, F: FnMut() -> OptionalValue<T>>(function: F) -> FromFn<F> {
    FromFn { function }
}

/// Yields nothing. See [`empty`].
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

impl<T> LazyIterator for Empty<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> OptionalValue<T> {
        OptionalValue::Absent
    }
}

/// Creates an iterator that is exhausted from the start.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

// =============================================================================
// IntoStd
// =============================================================================

/// A `std::iter::Iterator` view of a [`LazyIterator`].
///
/// Created by [`LazyIterator::into_std`]. Use it to hand a pipeline to code
/// that expects a standard iterator, such as a `for` loop.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator};
///
/// let mut total = 0;
/// for value in iter::from_iter([1, 2, 3]).map(|x| x * x).into_std() {
///     total += value;
/// }
/// assert_eq!(total, 14);
/// ```
#[derive(Clone, Debug)]
pub struct IntoStd<I> {
    inner: I,
}

impl<I> IntoStd<I> {
    pub(crate) const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped lazy iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: LazyIterator> Iterator for IntoStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.advance().into_option()
    }
}

impl<I: LazyIterator> FusedIterator for IntoStd<super::fuse::Fuse<I>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::Terminal;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_once_is_single_shot() {
        let mut single = once(5);
        assert_eq!(single.advance(), OptionalValue::Present(5));
        assert_eq!(single.advance(), OptionalValue::Absent);
        assert_eq!(single.advance(), OptionalValue::Absent);
    }

    #[rstest]
    fn test_once_with_skipped_is_never_evaluated() {
        let calls = Cell::new(0);
        let mut lazy = once_with(|| {
            calls.set(calls.get() + 1);
            42
        });
        assert_eq!(lazy.advance_by(1), ResultValue::Success(()));
        assert_eq!(lazy.advance(), OptionalValue::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_once_with_advance_by_overflow() {
        let mut lazy = once_with(|| 1);
        assert_eq!(lazy.advance_by(3), ResultValue::Failure(1));
        assert_eq!(lazy.advance_by(1), ResultValue::Failure(0));
    }

    #[rstest]
    fn test_repeat_with_counts_calls() {
        let mut counter = 0;
        let values = repeat_with(|| {
            counter += 1;
            counter
        })
        .take(3)
        .collect_vec();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_repeat_is_infinite() {
        assert_eq!(repeat('x').take(4).collect_string(), "xxxx");
    }

    #[rstest]
    fn test_empty() {
        assert_eq!(empty::<i32>().count(), 0);
    }

    #[rstest]
    fn test_into_std_collects() {
        let collected: Vec<i32> = from_iter([3, 1, 2]).into_std().collect();
        assert_eq!(collected, vec![3, 1, 2]);
    }
}
