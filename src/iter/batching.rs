//! Caller-driven grouping: [`Batching`].

use super::protocol::LazyIterator;
use crate::monad::OptionalValue;

/// Lets a closure consume the upstream in batches. Created by [`LazyIterator::batching`].
#[derive(Clone)]
pub struct Batching<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> Batching<I, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<B, I, F> LazyIterator for Batching<I, F>
where
    I: LazyIterator,
    F: FnMut(&mut I) -> OptionalValue<B>,
{
    type Item = B;

    #[inline]
    fn advance(&mut self) -> OptionalValue<B> {
        (self.function)(&mut self.upstream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, from_iter};
    use crate::monad::ResultValue;
    use rstest::rstest;

    #[rstest]
    fn test_batching_sums_runs_until_zero() {
        let sums = from_iter([1, 2, 0, 3, 0, 4])
            .batching(|upstream| {
                let mut total = 0;
                let mut saw_any = false;
                while let OptionalValue::Present(x) = upstream.advance() {
                    saw_any = true;
                    if x == 0 {
                        break;
                    }
                    total += x;
                }
                if saw_any {
                    OptionalValue::Present(total)
                } else {
                    OptionalValue::Absent
                }
            })
            .collect_vec();
        assert_eq!(sums, vec![3, 3, 4]);
    }

    #[rstest]
    fn test_batching_with_next_chunk() {
        let chunks = from_iter(1..=5)
            .batching(|upstream| match upstream.next_chunk(2) {
                ResultValue::Success(pair) => OptionalValue::Present(pair),
                ResultValue::Failure(rest) if !rest.is_empty() => {
                    OptionalValue::Present(rest)
                }
                ResultValue::Failure(_) => OptionalValue::Absent,
            })
            .collect_vec();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }
}
