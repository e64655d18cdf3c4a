//! Nesting combinators: [`FlatMap`] and [`Flatten`].

use super::protocol::{IntoLazyIterator, LazyIterator};
use crate::monad::OptionalValue;

/// Maps to iterables and yields their contents. Created by [`LazyIterator::flat_map`].
///
/// Keeps the inner iterator currently being drained; a new one is requested
/// from the upstream only after the current one reports `Absent`.
pub struct FlatMap<I, U: IntoLazyIterator, F> {
    upstream: I,
    function: F,
    current: OptionalValue<U::IntoLazy>,
}

impl<I, U: IntoLazyIterator, F> FlatMap<I, U, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self {
            upstream,
            function,
            current: OptionalValue::Absent,
        }
    }
}

impl<I, U, F> LazyIterator for FlatMap<I, U, F>
where
    I: LazyIterator,
    U: IntoLazyIterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    fn advance(&mut self) -> OptionalValue<U::Item> {
        loop {
            if let OptionalValue::Present(inner) = self.current.as_mut() {
                if let OptionalValue::Present(element) = inner.advance() {
                    return OptionalValue::Present(element);
                }
                self.current = OptionalValue::Absent;
            }
            match self.upstream.advance() {
                OptionalValue::Present(outer) => {
                    self.current = OptionalValue::Present((self.function)(outer).into_lazy());
                }
                OptionalValue::Absent => return OptionalValue::Absent,
            }
        }
    }
}

/// Removes one level of nesting. Created by [`LazyIterator::flatten`].
pub struct Flatten<I>
where
    I: LazyIterator,
    I::Item: IntoLazyIterator,
{
    upstream: I,
    current: OptionalValue<<I::Item as IntoLazyIterator>::IntoLazy>,
}

impl<I> Flatten<I>
where
    I: LazyIterator,
    I::Item: IntoLazyIterator,
{
    pub(crate) const fn new(upstream: I) -> Self {
        Self {
            upstream,
            current: OptionalValue::Absent,
        }
    }
}

impl<I> LazyIterator for Flatten<I>
where
    I: LazyIterator,
    I::Item: IntoLazyIterator,
{
    type Item = <I::Item as IntoLazyIterator>::Item;

    fn advance(&mut self) -> OptionalValue<Self::Item> {
        loop {
            if let OptionalValue::Present(inner) = self.current.as_mut() {
                if let OptionalValue::Present(element) = inner.advance() {
                    return OptionalValue::Present(element);
                }
                self.current = OptionalValue::Absent;
            }
            match self.upstream.advance() {
                OptionalValue::Present(outer) => {
                    self.current = OptionalValue::Present(outer.into_lazy());
                }
                OptionalValue::Absent => return OptionalValue::Absent,
            }
        }
    }
}
