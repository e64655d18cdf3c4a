//! The pull protocol shared by every source and combinator.

use std::hash::Hash;

use super::batching::Batching;
use super::chain::Chain;
use super::chunk::{ArrayChunk, Chunk};
use super::enumerate::Enumerate;
use super::filter::{Filter, FilterMap};
use super::flatten::{FlatMap, Flatten};
use super::fuse::Fuse;
use super::group_by::GroupBy;
use super::inspect::Inspect;
use super::intersperse::{Intersperse, IntersperseWith};
use super::map::{Map, MapWhile, MapWindows};
use super::peekable::Peekable;
use super::scan::Scan;
use super::source::{IntoStd, Source};
use super::take::{Skip, Take, TakeWhile};
use super::unique::Unique;
use super::zip::Zip;
use crate::monad::{OptionalIntoIter, OptionalValue, ResultValue};

/// Upper bound on the capacity reserved for a group before any element is pulled.
///
/// Larger groups grow as elements arrive.
pub(crate) const PREALLOCATION_LIMIT: usize = 64;

/// A lazily evaluated source of elements.
///
/// `advance` is the single required capability. `Absent` is the only
/// exhaustion signal; whether a node keeps returning `Absent` afterwards is
/// part of that node's contract (see [`fuse`](Self::fuse)).
///
/// Every combinator method wraps `self` in a new node without pulling
/// anything. Elements are produced only when a terminal operation (see
/// [`Terminal`](super::Terminal)) or a direct `advance` call pulls them,
/// so infinite sources are valid inputs.
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator};
/// use monadic_iter::monad::OptionalValue;
///
/// struct Countdown(u32);
///
/// impl LazyIterator for Countdown {
///     type Item = u32;
///
///     fn advance(&mut self) -> OptionalValue<u32> {
///         if self.0 == 0 {
///             OptionalValue::Absent
///         } else {
///             self.0 -= 1;
///             OptionalValue::Present(self.0 + 1)
///         }
///     }
/// }
///
/// let mut evens = Countdown(5).filter(|n| n % 2 == 0);
/// assert_eq!(evens.advance(), OptionalValue::Present(4));
/// assert_eq!(evens.advance(), OptionalValue::Present(2));
/// assert_eq!(evens.advance(), OptionalValue::Absent);
/// # let _ = iter::empty::<u32>();
/// ```
pub trait LazyIterator {
    /// The type of the elements produced.
    type Item;

    /// Pulls the next element, or `Absent` when there is none.
    fn advance(&mut self) -> OptionalValue<Self::Item>;

    // =========================================================================
    // Provided Pull Operations
    // =========================================================================

    /// Borrows the iterator so a combinator can wrap it without taking ownership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator};
    /// use monadic_iter::iter::Terminal;
    ///
    /// let mut source = iter::from_iter(1..=5);
    /// let head = source.by_ref().take(2).collect_vec();
    /// assert_eq!(head, vec![1, 2]);
    /// assert_eq!(source.collect_vec(), vec![3, 4, 5]);
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Discards up to `count` elements.
    ///
    /// Returns `Success(())` when all `count` elements were skipped. If the
    /// source runs dry first, returns `Failure(skipped)` carrying the number of
    /// elements actually discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator};
    /// use monadic_iter::monad::{OptionalValue, ResultValue};
    ///
    /// let mut source = iter::from_iter([1, 2, 3, 4]);
    /// assert_eq!(source.advance_by(2), ResultValue::Success(()));
    /// assert_eq!(source.advance(), OptionalValue::Present(3));
    /// assert_eq!(source.advance_by(5), ResultValue::Failure(1));
    /// ```
    fn advance_by(&mut self, count: usize) -> ResultValue<(), usize> {
        for skipped in 0..count {
            if self.advance().is_absent() {
                return ResultValue::Failure(skipped);
            }
        }
        ResultValue::Success(())
    }

    /// Returns the `index`-th remaining element, consuming everything before it.
    fn nth(&mut self, index: usize) -> OptionalValue<Self::Item> {
        if self.advance_by(index).is_failure() {
            return OptionalValue::Absent;
        }
        self.advance()
    }

    /// Pulls up to `size` elements at once.
    ///
    /// Returns `Success` with exactly `size` elements, or `Failure` with the
    /// shorter run collected before the source ran dry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator};
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let mut source = iter::from_iter("lorem".chars());
    /// assert_eq!(source.next_chunk(2), ResultValue::Success(vec!['l', 'o']));
    /// assert_eq!(source.next_chunk(2), ResultValue::Success(vec!['r', 'e']));
    /// assert_eq!(source.next_chunk(2), ResultValue::Failure(vec!['m']));
    /// ```
    fn next_chunk(&mut self, size: usize) -> ResultValue<Vec<Self::Item>, Vec<Self::Item>> {
        let mut chunk = Vec::with_capacity(size.min(PREALLOCATION_LIMIT));
        while chunk.len() < size {
            match self.advance() {
                OptionalValue::Present(element) => chunk.push(element),
                OptionalValue::Absent => return ResultValue::Failure(chunk),
            }
        }
        ResultValue::Success(chunk)
    }

    /// Adapts this iterator to `std::iter::Iterator`.
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    // =========================================================================
    // Element-wise Combinators
    // =========================================================================

    /// Emits `function(x)` for every upstream element `x`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let mut doubled = iter::from_iter([1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.advance(), OptionalValue::Present(2));
    /// assert_eq!(doubled.advance(), OptionalValue::Present(4));
    /// assert_eq!(doubled.advance(), OptionalValue::Present(6));
    /// assert_eq!(doubled.advance(), OptionalValue::Absent);
    /// ```
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Maps elements while `function` returns `Present`; yields `Absent` on the first `Absent`.
    ///
    /// This node does not remember the stop. Apply [`fuse`](Self::fuse) when
    /// later pulls must stay exhausted.
    fn map_while<B, F>(self, function: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> OptionalValue<B>,
    {
        MapWhile::new(self, function)
    }

    /// Keeps only the elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Filters and maps in one step, keeping the `Present` results of `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    /// use monadic_iter::monad::ResultValue;
    ///
    /// let numbers = iter::from_iter(["1", "two", "3", "four", "5"])
    ///     .filter_map(|text| ResultValue::from_result(text.parse::<i32>()).ok())
    ///     .collect_vec();
    /// assert_eq!(numbers, vec![1, 3, 5]);
    /// ```
    fn filter_map<B, F>(self, function: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> OptionalValue<B>,
    {
        FilterMap::new(self, function)
    }

    /// Maps every element to an iterable and yields the inner elements in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    ///
    /// let merged = iter::from_iter(["alpha", "beta", "gamma"])
    ///     .flat_map(|word| iter::from_iter(word.chars()))
    ///     .collect_string();
    /// assert_eq!(merged, "alphabetagamma");
    /// ```
    fn flat_map<U, F>(self, function: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: IntoLazyIterator,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, function)
    }

    /// Removes one level of nesting from an iterator of iterables.
    ///
    /// `OptionalValue` and `ResultValue` elements are iterables of zero or one
    /// element, so flattening them keeps only the payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let nested = iter::from_iter([vec![1, 2, 3, 4], vec![5, 6]]).flatten().collect_vec();
    /// assert_eq!(nested, vec![1, 2, 3, 4, 5, 6]);
    ///
    /// let present = iter::from_iter([OptionalValue::Present(123), OptionalValue::Absent, OptionalValue::Present(233)])
    ///     .flatten()
    ///     .collect_vec();
    /// assert_eq!(present, vec![123, 233]);
    /// ```
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoLazyIterator,
    {
        Flatten::new(self)
    }

    /// Calls `function` on each element as it passes through.
    fn inspect<F>(self, function: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, function)
    }

    /// Pairs each element with its zero-based index.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    // =========================================================================
    // Limiting Combinators
    // =========================================================================

    /// Yields at most `count` elements, then stays exhausted.
    ///
    /// Once the limit is reached, or the upstream reports `Absent`, every
    /// later pull returns `Absent` without touching the upstream.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Yields elements while `predicate` holds, then stays exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    ///
    /// let prefix = iter::from_iter([1, 2, 5, 1]).take_while(|&x| x < 3).collect_vec();
    /// assert_eq!(prefix, vec![1, 2]);
    /// ```
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Discards the first `count` elements on the first pull.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Ensures that once `Absent` has been returned, it is returned forever.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// // A source that alternates between an element and a gap.
    /// let mut state = 0;
    /// let flickering = iter::from_fn(move || {
    ///     state += 1;
    ///     if state % 2 == 1 { OptionalValue::Present(state) } else { OptionalValue::Absent }
    /// });
    ///
    /// let mut fused = flickering.fuse();
    /// assert_eq!(fused.advance(), OptionalValue::Present(1));
    /// assert_eq!(fused.advance(), OptionalValue::Absent);
    /// assert_eq!(fused.advance(), OptionalValue::Absent);
    /// ```
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    // =========================================================================
    // Combining Combinators
    // =========================================================================

    /// Pairs elements from `self` and `other` until either side is exhausted.
    ///
    /// The first `Absent` from either side stops the zip permanently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    ///
    /// let pairs = iter::from_iter([1, 2, 3]).zip(vec![10, 20]).collect_vec();
    /// assert_eq!(pairs, vec![(1, 10), (2, 20)]);
    /// ```
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoLazy>
    where
        Self: Sized,
        U: IntoLazyIterator,
    {
        Zip::new(self, other.into_lazy())
    }

    /// Yields every element of `self`, then every element of `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoLazy>
    where
        Self: Sized,
        U: IntoLazyIterator<Item = Self::Item>,
    {
        Chain::new(self, other.into_lazy())
    }

    // =========================================================================
    // Stateful Combinators
    // =========================================================================

    /// Threads an owned accumulator through `function`.
    ///
    /// `function` receives the accumulator by mutable reference and each
    /// element by value. It returns `Present(output)` to emit or `Absent` to
    /// stop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let running = iter::from_iter([1, 2, 3, 4])
    ///     .scan(0, |total, x| {
    ///         *total += x;
    ///         OptionalValue::Present(*total)
    ///     })
    ///     .collect_vec();
    /// assert_eq!(running, vec![1, 3, 6, 10]);
    /// ```
    fn scan<St, B, F>(self, initial_state: St, function: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> OptionalValue<B>,
    {
        Scan::new(self, initial_state, function)
    }

    /// Adds one element of lookahead through [`Peekable::peek`].
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Places a clone of `separator` between adjacent elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    ///
    /// let hello = iter::from_iter(["Hello", "World", "!"]).intersperse(" ").collect_string();
    /// assert_eq!(hello, "Hello World !");
    /// ```
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Places a separator produced by `separator` between adjacent elements.
    ///
    /// `separator` is called exactly once per gap, and never when the
    /// upstream yields fewer than two elements.
    fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
    where
        Self: Sized,
        G: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Groups elements into `Vec`s of `size`; the final group may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn chunk(self, size: usize) -> Chunk<Self>
    where
        Self: Sized,
    {
        Chunk::new(self, size)
    }

    /// Groups elements into arrays of exactly `N`; a trailing partial group is withheld.
    ///
    /// The withheld elements are available from [`ArrayChunk::remainder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let mut chunks = iter::from_iter("lorem".chars()).array_chunk::<2>();
    /// assert_eq!(chunks.advance(), OptionalValue::Present(['l', 'o']));
    /// assert_eq!(chunks.advance(), OptionalValue::Present(['r', 'e']));
    /// assert_eq!(chunks.advance(), OptionalValue::Absent);
    /// assert_eq!(chunks.remainder(), OptionalValue::Present(&['m'][..]));
    /// ```
    fn array_chunk<const N: usize>(self) -> ArrayChunk<Self, N>
    where
        Self: Sized,
    {
        ArrayChunk::new(self)
    }

    /// Applies `function` to every sliding window of `size` consecutive elements.
    ///
    /// Nothing is emitted until the first window is full. The node stays
    /// exhausted once the upstream reports `Absent`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    ///
    /// let sums = iter::from_iter([1, 2, 3, 4]).map_windows(2, |window| window[0] + window[1]).collect_vec();
    /// assert_eq!(sums, vec![3, 5, 7]);
    /// ```
    fn map_windows<R, F>(self, size: usize, function: F) -> MapWindows<Self, F>
    where
        Self: Sized,
        F: FnMut(&[Self::Item]) -> R,
    {
        MapWindows::new(self, size, function)
    }

    /// Hands the upstream to `function`, which pulls as many elements as it
    /// needs and returns one output or `Absent` to stop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let pairs = iter::from_iter([1, 2, 3, 4, 5])
    ///     .batching(|upstream| match upstream.advance() {
    ///         OptionalValue::Present(first) => {
    ///             OptionalValue::Present((first, upstream.advance().unwrap_or(0)))
    ///         }
    ///         OptionalValue::Absent => OptionalValue::Absent,
    ///     })
    ///     .collect_vec();
    /// assert_eq!(pairs, vec![(1, 2), (3, 4), (5, 0)]);
    /// ```
    fn batching<B, F>(self, function: F) -> Batching<Self, F>
    where
        Self: Sized,
        F: FnMut(&mut Self) -> OptionalValue<B>,
    {
        Batching::new(self, function)
    }

    /// Skips elements that have already been yielded.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        Unique::new(self)
    }

    /// Groups runs of consecutive elements that share the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, LazyIterator, Terminal};
    ///
    /// let runs = iter::from_iter([1, 3, 2, 4, 5]).group_by(|x| x % 2).collect_vec();
    /// assert_eq!(runs, vec![(1, vec![1, 3]), (0, vec![2, 4]), (1, vec![5])]);
    /// ```
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, K, F>
    where
        Self: Sized,
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        GroupBy::new(self, key)
    }
}

impl<I: LazyIterator + ?Sized> LazyIterator for &mut I {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> OptionalValue<I::Item> {
        (**self).advance()
    }
}

impl<I: LazyIterator + ?Sized> LazyIterator for Box<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> OptionalValue<I::Item> {
        (**self).advance()
    }
}

// =============================================================================
// Conversion into the Protocol
// =============================================================================

/// Conversion into a [`LazyIterator`].
///
/// Every `LazyIterator` converts into itself. Owned containers that commonly
/// appear as nested elements (`Vec`, `OptionalValue`, `ResultValue`, `Option`)
/// convert through a [`Source`].
pub trait IntoLazyIterator {
    /// The element type of the resulting iterator.
    type Item;

    /// The resulting iterator.
    type IntoLazy: LazyIterator<Item = Self::Item>;

    /// Performs the conversion.
    fn into_lazy(self) -> Self::IntoLazy;
}

impl<I: LazyIterator> IntoLazyIterator for I {
    type Item = I::Item;
    type IntoLazy = I;

    #[inline]
    fn into_lazy(self) -> I {
        self
    }
}

impl<T> IntoLazyIterator for Vec<T> {
    type Item = T;
    type IntoLazy = Source<std::vec::IntoIter<T>>;

    fn into_lazy(self) -> Self::IntoLazy {
        Source::new(self.into_iter())
    }
}

impl<T> IntoLazyIterator for OptionalValue<T> {
    type Item = T;
    type IntoLazy = Source<OptionalIntoIter<T>>;

    fn into_lazy(self) -> Self::IntoLazy {
        Source::new(self.into_iter())
    }
}

impl<T, E> IntoLazyIterator for ResultValue<T, E> {
    type Item = T;
    type IntoLazy = Source<OptionalIntoIter<T>>;

    fn into_lazy(self) -> Self::IntoLazy {
        Source::new(self.into_iter())
    }
}

impl<T> IntoLazyIterator for Option<T> {
    type Item = T;
    type IntoLazy = Source<std::option::IntoIter<T>>;

    fn into_lazy(self) -> Self::IntoLazy {
        Source::new(self.into_iter())
    }
}
