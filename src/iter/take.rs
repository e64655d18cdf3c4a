//! Limiting combinators: [`Take`], [`TakeWhile`] and [`Skip`].

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Yields at most `n` elements. Created by [`LazyIterator::take`].
#[derive(Clone, Debug)]
pub struct Take<I> {
    upstream: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) const fn new(upstream: I, remaining: usize) -> Self {
        Self { upstream, remaining }
    }
}

impl<I: LazyIterator> LazyIterator for Take<I> {
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        if self.remaining == 0 {
            return OptionalValue::Absent;
        }
        match self.upstream.advance() {
            OptionalValue::Present(element) => {
                self.remaining -= 1;
                OptionalValue::Present(element)
            }
            OptionalValue::Absent => {
                self.remaining = 0;
                OptionalValue::Absent
            }
        }
    }
}

/// Yields elements while a predicate holds. Created by [`LazyIterator::take_while`].
#[derive(Clone)]
pub struct TakeWhile<I, P> {
    upstream: I,
    predicate: P,
    stopped: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            stopped: false,
        }
    }
}

impl<I, P> LazyIterator for TakeWhile<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        if self.stopped {
            return OptionalValue::Absent;
        }
        match self.upstream.advance() {
            OptionalValue::Present(element) if (self.predicate)(&element) => {
                OptionalValue::Present(element)
            }
            _ => {
                self.stopped = true;
                OptionalValue::Absent
            }
        }
    }
}

/// Discards a leading run of elements. Created by [`LazyIterator::skip`].
///
/// The discarding happens eagerly on the first pull.
#[derive(Clone, Debug)]
pub struct Skip<I> {
    upstream: I,
    pending: usize,
}

impl<I> Skip<I> {
    pub(crate) const fn new(upstream: I, pending: usize) -> Self {
        Self { upstream, pending }
    }
}

impl<I: LazyIterator> LazyIterator for Skip<I> {
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        if self.pending > 0 {
            let count = std::mem::take(&mut self.pending);
            if self.upstream.advance_by(count).is_failure() {
                return OptionalValue::Absent;
            }
        }
        self.upstream.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, from_fn, from_iter, repeat};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(10, vec![1, 2, 3])]
    fn test_take(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(from_iter([1, 2, 3]).take(count).collect_vec(), expected);
    }

    #[rstest]
    fn test_take_does_not_overpull() {
        let pulls = Cell::new(0);
        let mut limited = from_fn(|| {
            pulls.set(pulls.get() + 1);
            OptionalValue::Present(pulls.get())
        })
        .take(2);
        assert_eq!(limited.by_ref().count(), 2);
        assert_eq!(limited.advance(), OptionalValue::Absent);
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn test_take_sticks_after_upstream_absent() {
        let mut state = 0;
        let mut limited = from_fn(move || {
            state += 1;
            if state == 2 {
                OptionalValue::Absent
            } else {
                OptionalValue::Present(state)
            }
        })
        .take(5);
        assert_eq!(limited.advance(), OptionalValue::Present(1));
        assert_eq!(limited.advance(), OptionalValue::Absent);
        assert_eq!(limited.advance(), OptionalValue::Absent);
    }

    #[rstest]
    fn test_take_while_stays_stopped() {
        let mut prefix = from_iter([1, 2, 7, 1, 2]).take_while(|&x| x < 5);
        assert_eq!(prefix.by_ref().collect_vec(), vec![1, 2]);
        assert_eq!(prefix.advance(), OptionalValue::Absent);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(3, vec![])]
    #[case(9, vec![])]
    fn test_skip(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(from_iter([1, 2, 3]).skip(count).collect_vec(), expected);
    }

    #[rstest]
    fn test_skip_then_take_on_infinite() {
        assert_eq!(repeat(4).skip(100).take(2).collect_vec(), vec![4, 4]);
    }
}
