//! Exhaustion latching: [`Fuse`].

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Stays exhausted after the first `Absent`. Created by [`LazyIterator::fuse`].
#[derive(Clone, Debug)]
pub struct Fuse<I> {
    upstream: I,
    exhausted: bool,
}

impl<I> Fuse<I> {
    pub(crate) const fn new(upstream: I) -> Self {
        Self {
            upstream,
            exhausted: false,
        }
    }

    /// Reports whether `Absent` has been observed.
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<I: LazyIterator> LazyIterator for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> OptionalValue<I::Item> {
        if self.exhausted {
            return OptionalValue::Absent;
        }
        let element = self.upstream.advance();
        self.exhausted = element.is_absent();
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::from_fn;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_fuse_stops_pulling() {
        let pulls = Cell::new(0);
        let mut fused = from_fn(|| {
            pulls.set(pulls.get() + 1);
            if pulls.get() == 2 {
                OptionalValue::Absent
            } else {
                OptionalValue::Present(pulls.get())
            }
        })
        .fuse();
        assert_eq!(fused.advance(), OptionalValue::Present(1));
        assert!(!fused.is_exhausted());
        assert_eq!(fused.advance(), OptionalValue::Absent);
        assert_eq!(fused.advance(), OptionalValue::Absent);
        assert!(fused.is_exhausted());
        assert_eq!(pulls.get(), 2);
    }
}
