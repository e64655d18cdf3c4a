//! Stateful mapping with an owned accumulator: [`Scan`].

use std::fmt;

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Threads an accumulator through the stream. Created by [`LazyIterator::scan`].
///
/// The accumulator is owned by this node. An `Absent` from the function is
/// passed through without ending the node; wrap in [`fuse`] if later pulls
/// must stay exhausted.
///
/// [`fuse`]: LazyIterator::fuse
#[derive(Clone)]
pub struct Scan<I, St, F> {
    upstream: I,
    state: St,
    function: F,
}

impl<I, St, F> Scan<I, St, F> {
    pub(crate) const fn new(upstream: I, state: St, function: F) -> Self {
        Self {
            upstream,
            state,
            function,
        }
    }

    /// Returns the current accumulator.
    pub const fn state(&self) -> &St {
        &self.state
    }
}

impl<I: fmt::Debug, St: fmt::Debug, F> fmt::Debug for Scan<I, St, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Scan")
            .field("upstream", &self.upstream)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<B, I, St, F> LazyIterator for Scan<I, St, F>
where
    I: LazyIterator,
    F: FnMut(&mut St, I::Item) -> OptionalValue<B>,
{
    type Item = B;

    fn advance(&mut self) -> OptionalValue<B> {
        match self.upstream.advance() {
            OptionalValue::Present(element) => (self.function)(&mut self.state, element),
            OptionalValue::Absent => OptionalValue::Absent,
        }
    }
}
