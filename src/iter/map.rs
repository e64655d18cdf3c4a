//! Mapping combinators: [`Map`], [`MapWhile`] and [`MapWindows`].

use std::collections::VecDeque;
use std::fmt;

use super::protocol::{LazyIterator, PREALLOCATION_LIMIT};
use crate::monad::OptionalValue;

/// Transforms each element. Created by [`LazyIterator::map`].
#[derive(Clone)]
pub struct Map<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> Map<I, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<B, I, F> LazyIterator for Map<I, F>
where
    I: LazyIterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn advance(&mut self) -> OptionalValue<B> {
        self.upstream.advance().map(&mut self.function)
    }
}

/// Maps until the function reports `Absent`. Created by [`LazyIterator::map_while`].
#[derive(Clone)]
pub struct MapWhile<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> MapWhile<I, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<B, I, F> LazyIterator for MapWhile<I, F>
where
    I: LazyIterator,
    F: FnMut(I::Item) -> OptionalValue<B>,
{
    type Item = B;

    #[inline]
    fn advance(&mut self) -> OptionalValue<B> {
        self.upstream.advance().and_then(&mut self.function)
    }
}

/// Sliding-window map. Created by [`LazyIterator::map_windows`].
///
/// Holds at most `size` upstream elements. The first emission happens once
/// `size` elements have been pulled; each later pull slides the window by one.
pub struct MapWindows<I: LazyIterator, F> {
    upstream: I,
    function: F,
    window: VecDeque<I::Item>,
    size: usize,
    exhausted: bool,
}

impl<I: LazyIterator, F> MapWindows<I, F> {
    pub(crate) fn new(upstream: I, size: usize, function: F) -> Self {
        assert!(size != 0, "window size must be non-zero");
        Self {
            upstream,
            function,
            window: VecDeque::with_capacity(size.min(PREALLOCATION_LIMIT)),
            size,
            exhausted: false,
        }
    }

    fn finish(&mut self) {
        self.exhausted = true;
        self.window.clear();
    }
}

impl<I, F> fmt::Debug for MapWindows<I, F>
where
    I: LazyIterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapWindows")
            .field("upstream", &self.upstream)
            .field("window", &self.window)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl<R, I, F> LazyIterator for MapWindows<I, F>
where
    I: LazyIterator,
    F: FnMut(&[I::Item]) -> R,
{
    type Item = R;

    fn advance(&mut self) -> OptionalValue<R> {
        if self.exhausted {
            return OptionalValue::Absent;
        }

        if self.window.len() == self.size {
            match self.upstream.advance() {
                OptionalValue::Present(element) => {
                    self.window.pop_front();
                    self.window.push_back(element);
                }
                OptionalValue::Absent => {
                    self.finish();
                    return OptionalValue::Absent;
                }
            }
        } else {
            while self.window.len() < self.size {
                match self.upstream.advance() {
                    OptionalValue::Present(element) => self.window.push_back(element),
                    OptionalValue::Absent => {
                        self.finish();
                        return OptionalValue::Absent;
                    }
                }
            }
        }

        let window: &[I::Item] = self.window.make_contiguous();
        OptionalValue::Present((self.function)(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{Terminal, from_fn, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_map_preserves_order() {
        assert_eq!(
            from_iter(["a", "bb", "ccc"]).map(str::len).collect_vec(),
            vec![1, 2, 3]
        );
    }

    #[rstest]
    fn test_map_while_stops_at_first_absent() {
        let values = from_iter([1, 2, -1, 4])
            .map_while(|x: i32| OptionalValue::from_option(u32::try_from(x).ok()))
            .collect_vec();
        assert_eq!(values, vec![1u32, 2]);
    }

    #[rstest]
    fn test_map_while_is_not_sticky() {
        let mut stage = from_iter([1, -1, 3]).map_while(|x: i32| {
            if x > 0 {
                OptionalValue::Present(x)
            } else {
                OptionalValue::Absent
            }
        });
        assert_eq!(stage.advance(), OptionalValue::Present(1));
        assert_eq!(stage.advance(), OptionalValue::Absent);
        assert_eq!(stage.advance(), OptionalValue::Present(3));
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5], 3, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]])]
    #[case(vec![1, 2], 3, vec![])]
    #[case(vec![7], 1, vec![vec![7]])]
    fn test_map_windows(
        #[case] input: Vec<i32>,
        #[case] size: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        assert_eq!(
            from_iter(input).map_windows(size, <[i32]>::to_vec).collect_vec(),
            expected
        );
    }

    #[rstest]
    fn test_map_windows_stays_exhausted() {
        let mut toggle = false;
        let flickering = from_fn(move || {
            toggle = !toggle;
            if toggle {
                OptionalValue::Present(1)
            } else {
                OptionalValue::Absent
            }
        });
        let mut windows = flickering.map_windows(1, |window| window[0]);
        assert_eq!(windows.advance(), OptionalValue::Present(1));
        assert_eq!(windows.advance(), OptionalValue::Absent);
        assert_eq!(windows.advance(), OptionalValue::Absent);
    }

    #[rstest]
    fn test_map_windows_huge_size_never_fills() {
        let mut windows = from_iter([1, 2, 3]).map_windows(usize::MAX, <[i32]>::len);
        assert_eq!(windows.advance(), OptionalValue::Absent);
        assert_eq!(windows.advance(), OptionalValue::Absent);
    }

    #[rstest]
    #[should_panic(expected = "window size must be non-zero")]
    fn test_map_windows_zero_size_panics() {
        let _ = from_iter([1]).map_windows(0, |window: &[i32]| window.len());
    }
}
