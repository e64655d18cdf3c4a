//! Sequential concatenation of two iterators.

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Yields the first iterator, then the second. Created by [`LazyIterator::chain`].
///
/// Each side is dropped as soon as it reports `Absent`, so the chain never
/// pulls an exhausted side again.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    first: OptionalValue<A>,
    second: OptionalValue<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self {
            first: OptionalValue::Present(first),
            second: OptionalValue::Present(second),
        }
    }
}

impl<A, B> LazyIterator for Chain<A, B>
where
    A: LazyIterator,
    B: LazyIterator<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> OptionalValue<A::Item> {
        if let OptionalValue::Present(first) = self.first.as_mut() {
            if let OptionalValue::Present(element) = first.advance() {
                return OptionalValue::Present(element);
            }
            self.first = OptionalValue::Absent;
        }
        if let OptionalValue::Present(second) = self.second.as_mut() {
            if let OptionalValue::Present(element) = second.advance() {
                return OptionalValue::Present(element);
            }
            self.second = OptionalValue::Absent;
        }
        OptionalValue::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, empty, from_fn, from_iter, once};
    use rstest::rstest;

    #[rstest]
    fn test_chain_order() {
        let values = from_iter([1, 2]).chain(vec![3]).chain(once(4)).collect_vec();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_chain_empty_sides() {
        assert_eq!(empty::<u8>().chain(empty::<u8>()).count(), 0);
        assert_eq!(empty().chain(from_iter([9])).collect_vec(), vec![9]);
    }

    #[rstest]
    fn test_chain_never_revisits_first() {
        let mut state = 0;
        let flickering = from_fn(move || {
            state += 1;
            if state == 2 {
                OptionalValue::Absent
            } else {
                OptionalValue::Present(state)
            }
        });
        let mut chained = flickering.chain(from_iter([100]));
        assert_eq!(chained.advance(), OptionalValue::Present(1));
        assert_eq!(chained.advance(), OptionalValue::Present(100));
        assert_eq!(chained.advance(), OptionalValue::Absent);
        assert_eq!(chained.advance(), OptionalValue::Absent);
    }
}
