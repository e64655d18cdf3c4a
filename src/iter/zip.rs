//! Pairwise combination of two iterators.

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Pairs elements of two iterators. Created by [`LazyIterator::zip`].
///
/// The left side is always pulled first. When the left side is exhausted the
/// right side is not pulled at all; when the right side is exhausted the
/// element already taken from the left is dropped. Either way the zip stops
/// for good.
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    left: A,
    right: B,
    stopped: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            stopped: false,
        }
    }

    /// Splits the zip back into its two sides.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A: LazyIterator, B: LazyIterator> LazyIterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> OptionalValue<Self::Item> {
        if self.stopped {
            return OptionalValue::Absent;
        }
        let OptionalValue::Present(left) = self.left.advance() else {
            self.stopped = true;
            return OptionalValue::Absent;
        };
        let OptionalValue::Present(right) = self.right.advance() else {
            self.stopped = true;
            return OptionalValue::Absent;
        };
        OptionalValue::Present((left, right))
    }
}
