//! One-element lookahead.

use std::fmt;

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// An iterator with a one-element lookahead buffer. Created by [`LazyIterator::peekable`].
///
/// The buffer remembers an upstream `Absent` too, so peeking at an exhausted
/// source does not pull it again.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator};
/// use monadic_iter::monad::OptionalValue;
///
/// let mut source = iter::from_iter([1, 2]).peekable();
/// assert_eq!(source.peek(), OptionalValue::Present(&1));
/// assert_eq!(source.peek(), OptionalValue::Present(&1));
/// assert_eq!(source.advance(), OptionalValue::Present(1));
/// assert_eq!(source.advance(), OptionalValue::Present(2));
/// assert_eq!(source.peek(), OptionalValue::Absent);
/// ```
pub struct Peekable<I: LazyIterator> {
    upstream: I,
    peeked: OptionalValue<OptionalValue<I::Item>>,
}

impl<I: LazyIterator> Peekable<I> {
    pub(crate) const fn new(upstream: I) -> Self {
        Self {
            upstream,
            peeked: OptionalValue::Absent,
        }
    }

    /// Returns a reference to the next element without consuming it.
    pub fn peek(&mut self) -> OptionalValue<&I::Item> {
        let upstream = &mut self.upstream;
        self.peeked.get_or_insert_with(|| upstream.advance()).as_ref()
    }

    /// Returns a mutable reference to the next element without consuming it.
    pub fn peek_mut(&mut self) -> OptionalValue<&mut I::Item> {
        let upstream = &mut self.upstream;
        self.peeked.get_or_insert_with(|| upstream.advance()).as_mut()
    }

    /// Consumes the next element only if `predicate` accepts it.
    pub fn next_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> OptionalValue<I::Item> {
        match self.advance() {
            OptionalValue::Present(element) if predicate(&element) => {
                OptionalValue::Present(element)
            }
            other => {
                self.peeked = OptionalValue::Present(other);
                OptionalValue::Absent
            }
        }
    }

    /// Consumes the next element only if it equals `expected`.
    pub fn next_if_eq<T>(&mut self, expected: &T) -> OptionalValue<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|element| element == expected)
    }
}

impl<I> Clone for Peekable<I>
where
    I: LazyIterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            peeked: self.peeked.clone(),
        }
    }
}

impl<I> fmt::Debug for Peekable<I>
where
    I: LazyIterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Peekable")
            .field("upstream", &self.upstream)
            .field("peeked", &self.peeked)
            .finish()
    }
}

impl<I: LazyIterator> LazyIterator for Peekable<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> OptionalValue<I::Item> {
        match self.peeked.take() {
            OptionalValue::Present(buffered) => buffered,
            OptionalValue::Absent => self.upstream.advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, from_fn, from_iter};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_peek_pulls_once() {
        let pulls = Cell::new(0);
        let mut source = from_fn(|| {
            pulls.set(pulls.get() + 1);
            OptionalValue::Present(pulls.get())
        })
        .peekable();
        assert_eq!(source.peek(), OptionalValue::Present(&1));
        assert_eq!(source.peek(), OptionalValue::Present(&1));
        assert_eq!(pulls.get(), 1);
        assert_eq!(source.advance(), OptionalValue::Present(1));
        assert_eq!(source.advance(), OptionalValue::Present(2));
    }

    #[rstest]
    fn test_peek_remembers_absent() {
        let pulls = Cell::new(0);
        let mut source = from_fn(|| {
            pulls.set(pulls.get() + 1);
            OptionalValue::<i32>::Absent
        })
        .peekable();
        assert_eq!(source.peek(), OptionalValue::Absent);
        assert_eq!(source.advance(), OptionalValue::Absent);
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_peek_mut_modifies_buffer() {
        let mut source = from_iter([1, 2]).peekable();
        if let OptionalValue::Present(first) = source.peek_mut() {
            *first = 10;
        }
        assert_eq!(source.collect_vec(), vec![10, 2]);
    }

    #[rstest]
    fn test_next_if_and_next_if_eq() {
        let mut source = from_iter([0, 1, 2]).peekable();
        assert_eq!(source.next_if_eq(&0), OptionalValue::Present(0));
        assert_eq!(source.next_if(|x| *x > 5), OptionalValue::Absent);
        assert_eq!(source.peek(), OptionalValue::Present(&1));
        assert_eq!(source.next_if(|x| *x == 1), OptionalValue::Present(1));
        assert_eq!(source.collect_vec(), vec![2]);
    }
}
