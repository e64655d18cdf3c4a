//! Selection combinators: [`Filter`] and [`FilterMap`].

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Keeps elements that satisfy a predicate. Created by [`LazyIterator::filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<I, P> LazyIterator for Filter<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        loop {
            match self.upstream.advance() {
                OptionalValue::Present(element) if (self.predicate)(&element) => {
                    return OptionalValue::Present(element);
                }
                OptionalValue::Present(_) => {}
                OptionalValue::Absent => return OptionalValue::Absent,
            }
        }
    }
}

/// Keeps the `Present` results of a function. Created by [`LazyIterator::filter_map`].
#[derive(Clone)]
pub struct FilterMap<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<B, I, F> LazyIterator for FilterMap<I, F>
where
    I: LazyIterator,
    F: FnMut(I::Item) -> OptionalValue<B>,
{
    type Item = B;

    fn advance(&mut self) -> OptionalValue<B> {
        loop {
            match self.upstream.advance() {
                OptionalValue::Present(element) => {
                    if let OptionalValue::Present(mapped) = (self.function)(element) {
                        return OptionalValue::Present(mapped);
                    }
                }
                OptionalValue::Absent => return OptionalValue::Absent,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, from_iter, repeat};
    use rstest::rstest;

    #[rstest]
    fn test_filter_even() {
        assert_eq!(
            from_iter(1..=10).filter(|x| x % 2 == 0).collect_vec(),
            vec![2, 4, 6, 8, 10]
        );
    }

    #[rstest]
    fn test_filter_over_infinite_source_with_take() {
        let mut counter = 0;
        let values = repeat(())
            .map(|()| {
                counter += 1;
                counter
            })
            .filter(|x| x % 3 == 0)
            .take(3)
            .collect_vec();
        assert_eq!(values, vec![3, 6, 9]);
    }

    #[rstest]
    fn test_filter_map_drops_absent() {
        let values = from_iter(["1", "x", "3"])
            .filter_map(|text| OptionalValue::from_option(text.parse::<i32>().ok()))
            .collect_vec();
        assert_eq!(values, vec![1, 3]);
    }
}
