//! Fixed-size grouping: [`Chunk`] and [`ArrayChunk`].
//!
//! The two differ in how they treat a trailing partial group. `Chunk` emits
//! it as a shorter `Vec` and then stays exhausted. `ArrayChunk` can only emit
//! complete arrays, so it withholds the partial group and exposes it through
//! [`ArrayChunk::remainder`]; it does not remember exhaustion.

use arrayvec::ArrayVec;

use super::protocol::LazyIterator;
use crate::monad::{OptionalValue, ResultValue};

/// Groups elements into `Vec`s. Created by [`LazyIterator::chunk`].
#[derive(Clone, Debug)]
pub struct Chunk<I> {
    upstream: I,
    size: usize,
    finished: bool,
}

impl<I> Chunk<I> {
    pub(crate) fn new(upstream: I, size: usize) -> Self {
        assert!(size != 0, "chunk size must be non-zero");
        Self {
            upstream,
            size,
            finished: false,
        }
    }
}

impl<I: LazyIterator> LazyIterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn advance(&mut self) -> OptionalValue<Vec<I::Item>> {
        if self.finished {
            return OptionalValue::Absent;
        }
        match self.upstream.next_chunk(self.size) {
            ResultValue::Success(group) => OptionalValue::Present(group),
            ResultValue::Failure(partial) => {
                self.finished = true;
                if partial.is_empty() {
                    OptionalValue::Absent
                } else {
                    OptionalValue::Present(partial)
                }
            }
        }
    }
}

/// Groups elements into arrays of `N`. Created by [`LazyIterator::array_chunk`].
pub struct ArrayChunk<I: LazyIterator, const N: usize> {
    upstream: I,
    remainder: OptionalValue<ArrayVec<I::Item, N>>,
}

impl<I: LazyIterator, const N: usize> ArrayChunk<I, N> {
    pub(crate) fn new(upstream: I) -> Self {
        const { assert!(N != 0, "chunk size must be non-zero") };
        Self {
            upstream,
            remainder: OptionalValue::Absent,
        }
    }

    /// Returns the elements withheld when the upstream ran out mid-group.
    ///
    /// `Absent` until the upstream has reported `Absent`; afterwards the
    /// (possibly empty) partial group from the most recent exhaustion.
    pub fn remainder(&self) -> OptionalValue<&[I::Item]> {
        self.remainder.as_ref().map(ArrayVec::as_slice)
    }

    /// Consumes the node, returning the withheld partial group.
    pub fn into_remainder(self) -> OptionalValue<Vec<I::Item>> {
        self.remainder.map(|partial| partial.into_iter().collect())
    }
}

impl<I: LazyIterator, const N: usize> LazyIterator for ArrayChunk<I, N> {
    type Item = [I::Item; N];

    fn advance(&mut self) -> OptionalValue<[I::Item; N]> {
        let mut group: ArrayVec<I::Item, N> = ArrayVec::new();
        while !group.is_full() {
            match self.upstream.advance() {
                OptionalValue::Present(element) => group.push(element),
                OptionalValue::Absent => {
                    self.remainder = OptionalValue::Present(group);
                    return OptionalValue::Absent;
                }
            }
        }
        OptionalValue::from_option(group.into_inner().ok())
    }
}
