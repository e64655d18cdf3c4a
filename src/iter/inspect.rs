//! Side-effect observation: [`Inspect`].

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Observes elements as they pass. Created by [`LazyIterator::inspect`].
#[derive(Clone)]
pub struct Inspect<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> Inspect<I, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<I, F> LazyIterator for Inspect<I, F>
where
    I: LazyIterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> OptionalValue<I::Item> {
        self.upstream.advance().inspect(&mut self.function)
    }
}
