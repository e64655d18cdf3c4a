//! Run-length grouping by key: [`GroupBy`].

use super::fuse::Fuse;
use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Groups consecutive elements by key. Created by [`LazyIterator::group_by`].
///
/// Each emission is `(key, elements)` for one maximal run of equal keys. The
/// first element of the following run is held back until the next pull.
pub struct GroupBy<I: LazyIterator, K, F> {
    upstream: Fuse<I>,
    key: F,
    pending: OptionalValue<(K, I::Item)>,
}

impl<I: LazyIterator, K, F> GroupBy<I, K, F> {
    pub(crate) const fn new(upstream: I, key: F) -> Self {
        Self {
            upstream: Fuse::new(upstream),
            key,
            pending: OptionalValue::Absent,
        }
    }
}

impl<I, K, F> LazyIterator for GroupBy<I, K, F>
where
    I: LazyIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Vec<I::Item>);

    fn advance(&mut self) -> OptionalValue<Self::Item> {
        let (group_key, first) = match self.pending.take() {
            OptionalValue::Present(pending) => pending,
            OptionalValue::Absent => match self.upstream.advance() {
                OptionalValue::Present(element) => ((self.key)(&element), element),
                OptionalValue::Absent => return OptionalValue::Absent,
            },
        };

        let mut group = vec![first];
        while let OptionalValue::Present(element) = self.upstream.advance() {
            let key = (self.key)(&element);
            if key == group_key {
                group.push(element);
            } else {
                self.pending = OptionalValue::Present((key, element));
                break;
            }
        }
        OptionalValue::Present((group_key, group))
    }
}
