//! Separator insertion: [`Intersperse`] and [`IntersperseWith`].

use super::protocol::LazyIterator;
use super::peekable::Peekable;
use crate::monad::OptionalValue;

/// Inserts a cloned separator between elements. Created by [`LazyIterator::intersperse`].
pub struct Intersperse<I: LazyIterator> {
    upstream: Peekable<I>,
    separator: I::Item,
    needs_separator: bool,
}

impl<I: LazyIterator> Intersperse<I> {
    pub(crate) const fn new(upstream: I, separator: I::Item) -> Self {
        Self {
            upstream: Peekable::new(upstream),
            separator,
            needs_separator: false,
        }
    }
}

impl<I> LazyIterator for Intersperse<I>
where
    I: LazyIterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        if self.needs_separator && self.upstream.peek().is_present() {
            self.needs_separator = false;
            return OptionalValue::Present(self.separator.clone());
        }
        let element = self.upstream.advance();
        if element.is_present() {
            self.needs_separator = true;
        }
        element
    }
}

/// Inserts a generated separator between elements. Created by [`LazyIterator::intersperse_with`].
pub struct IntersperseWith<I: LazyIterator, G> {
    upstream: Peekable<I>,
    separator: G,
    needs_separator: bool,
}

impl<I: LazyIterator, G> IntersperseWith<I, G> {
    pub(crate) const fn new(upstream: I, separator: G) -> Self {
        Self {
            upstream: Peekable::new(upstream),
            separator,
            needs_separator: false,
        }
    }
}

impl<I, G> LazyIterator for IntersperseWith<I, G>
where
    I: LazyIterator,
    G: FnMut() -> I::Item,
{
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        if self.needs_separator && self.upstream.peek().is_present() {
            self.needs_separator = false;
            return OptionalValue::Present((self.separator)());
        }
        let element = self.upstream.advance();
        if element.is_present() {
            self.needs_separator = true;
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, empty, from_fn, from_iter, once};
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![1, 2, 3], vec![1, 0, 2, 0, 3])]
    fn test_intersperse(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(from_iter(input).intersperse(0).collect_vec(), expected);
    }

    #[rstest]
    fn test_intersperse_with_calls_once_per_gap() {
        let mut calls = 0;
        let joined = from_iter(["a", "b", "c"])
            .intersperse_with(|| {
                calls += 1;
                "-"
            })
            .collect_string();
        assert_eq!(joined, "a-b-c");
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_intersperse_with_never_called_for_short_input() {
        let mut calls = 0;
        assert_eq!(
            empty::<char>()
                .intersperse_with(|| {
                    calls += 1;
                    ','
                })
                .count(),
            0
        );
        assert_eq!(once('x').intersperse(',').collect_string(), "x");
        assert_eq!(calls, 0);
    }

    fn resuming_after_gap() -> impl LazyIterator<Item = i32> {
        let mut pulls = 0;
        from_fn(move || {
            pulls += 1;
            match pulls {
                2 => OptionalValue::Present(2),
                3 => OptionalValue::Present(3),
                _ => OptionalValue::Absent,
            }
        })
    }

    #[rstest]
    fn test_intersperse_no_separator_before_first_after_leading_absent() {
        let mut joined = resuming_after_gap().intersperse(0);
        assert_eq!(joined.advance(), OptionalValue::Absent);
        assert_eq!(joined.collect_vec(), vec![2, 0, 3]);
    }

    #[rstest]
    fn test_intersperse_with_no_separator_before_first_after_leading_absent() {
        let mut joined = resuming_after_gap().intersperse_with(|| 0);
        assert_eq!(joined.advance(), OptionalValue::Absent);
        assert_eq!(joined.collect_vec(), vec![2, 0, 3]);
    }
}
