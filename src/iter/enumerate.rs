//! Index pairing: [`Enumerate`].

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Pairs each element with its index. Created by [`LazyIterator::enumerate`].
#[derive(Clone, Debug)]
pub struct Enumerate<I> {
    upstream: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) const fn new(upstream: I) -> Self {
        Self { upstream, count: 0 }
    }
}

impl<I: LazyIterator> LazyIterator for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn advance(&mut self) -> OptionalValue<Self::Item> {
        self.upstream.advance().map(|element| {
            let index = self.count;
            self.count += 1;
            (index, element)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_enumerate_after_filter() {
        let indexed = from_iter(['a', 'b', 'c', 'd'])
            .filter(|c| *c != 'b')
            .enumerate()
            .collect_vec();
        assert_eq!(indexed, vec![(0, 'a'), (1, 'c'), (2, 'd')]);
    }
}
