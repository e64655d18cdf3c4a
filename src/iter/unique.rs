//! First-occurrence filtering.
//!
//! The set of seen elements uses `FxHash` with the `fxhash` feature, `aHash`
//! with the `ahash` feature, and the standard `SipHash` otherwise.

use std::collections::HashSet;
use std::hash::Hash;

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::collections::hash_map::RandomState;

/// Yields each distinct element once. Created by [`LazyIterator::unique`].
///
/// Keeps a clone of every element it has yielded, so memory grows with the
/// number of distinct elements.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator, Terminal};
///
/// let distinct = iter::from_iter([3, 1, 3, 2, 1]).unique().collect_vec();
/// assert_eq!(distinct, vec![3, 1, 2]);
/// ```
pub struct Unique<I: LazyIterator> {
    upstream: I,
    seen: HashSet<I::Item, SeenHasher>,
}

impl<I: LazyIterator> Unique<I> {
    pub(crate) fn new(upstream: I) -> Self {
        Self {
            upstream,
            seen: HashSet::with_hasher(SeenHasher::default()),
        }
    }
}

impl<I> LazyIterator for Unique<I>
where
    I: LazyIterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn advance(&mut self) -> OptionalValue<I::Item> {
        loop {
            match self.upstream.advance() {
                OptionalValue::Present(element) => {
                    if self.seen.insert(element.clone()) {
                        return OptionalValue::Present(element);
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
    fn test_unique_strings() {
        let words = from_iter(["a", "b", "a", "c", "b"]).unique().collect_vec();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_unique_over_infinite_cycle_with_take() {
        let mut cycle = from_iter([1, 2, 3]).chain(repeat(2)).unique();
        assert_eq!(cycle.by_ref().take(3).collect_vec(), vec![1, 2, 3]);
    }
}
