//! Terminal operations that drive a pipeline and produce a value.
//!
//! These live on a separate extension trait so that the [`LazyIterator`]
//! protocol itself stays minimal. Every `LazyIterator` gets them through a
//! blanket implementation.
//!
//! Operations that take `&mut self` short-circuit and leave the remaining
//! elements available; operations that take `self` drain the iterator.

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use super::protocol::LazyIterator;
use crate::monad::{OptionalValue, ResultValue};

/// Consuming operations available on every [`LazyIterator`].
///
/// # Examples
///
/// ```rust
/// use monadic_iter::iter::{self, LazyIterator, Terminal};
/// use monadic_iter::monad::OptionalValue;
///
/// assert_eq!(iter::from_iter(1..=4).sum(), OptionalValue::Present(10));
/// assert_eq!(iter::empty::<i32>().sum(), OptionalValue::Absent);
/// assert_eq!(iter::from_iter(["x", "y"]).count(), 2);
/// ```
pub trait Terminal: LazyIterator {
    // =========================================================================
    // Draining Operations
    // =========================================================================

    /// Counts the elements.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.advance().is_present() {
            count += 1;
        }
        count
    }

    /// Combines all elements left to right, starting from `initial`.
    fn fold<B, F>(mut self, initial: B, mut function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accumulator = initial;
        while let OptionalValue::Present(element) = self.advance() {
            accumulator = function(accumulator, element);
        }
        accumulator
    }

    /// Folds using the first element as the initial value.
    ///
    /// Returns `Absent` for an empty iterator and `Present(x)` for a single
    /// element `x` without calling `function`.
    fn reduce<F>(mut self, function: F) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        match self.advance() {
            OptionalValue::Present(first) => OptionalValue::Present(self.fold(first, function)),
            OptionalValue::Absent => OptionalValue::Absent,
        }
    }

    /// Adds the elements together; `Absent` when there are none.
    fn sum(self) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        Self::Item: Add<Output = Self::Item>,
    {
        self.reduce(|left, right| left + right)
    }

    /// Multiplies the elements together; `Absent` when there are none.
    fn product(self) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        Self::Item: Mul<Output = Self::Item>,
    {
        self.reduce(|left, right| left * right)
    }

    /// Returns the last element.
    fn last(self) -> OptionalValue<Self::Item>
    where
        Self: Sized,
    {
        self.fold(OptionalValue::Absent, |_, element| OptionalValue::Present(element))
    }

    /// Calls `function` on every element.
    fn for_each<F>(self, mut function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), element| function(element));
    }

    /// Returns the maximum element; the earliest one wins a tie.
    fn max(self) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the minimum element; the earliest one wins a tie.
    fn min(self) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the maximum element under `compare`; the earliest one wins a tie.
    fn max_by<F>(self, mut compare: F) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|best, candidate| {
            if compare(&candidate, &best) == Ordering::Greater {
                candidate
            } else {
                best
            }
        })
    }

    /// Returns the minimum element under `compare`; the earliest one wins a tie.
    fn min_by<F>(self, mut compare: F) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|best, candidate| {
            if compare(&candidate, &best) == Ordering::Less {
                candidate
            } else {
                best
            }
        })
    }

    /// Returns the element with the maximum key; the earliest one wins a tie.
    fn max_by_key<K, F>(self, mut key: F) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|element| (key(&element), element))
            .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
            .map(|(_, element)| element)
    }

    /// Returns the element with the minimum key; the earliest one wins a tie.
    fn min_by_key<K, F>(self, mut key: F) -> OptionalValue<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|element| (key(&element), element))
            .reduce(|best, candidate| if candidate.0 < best.0 { candidate } else { best })
            .map(|(_, element)| element)
    }

    /// Splits the elements into those that satisfy `predicate` and those that do not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, Terminal};
    ///
    /// let (even, odd): (Vec<i32>, Vec<i32>) = iter::from_iter(1..=6).partition(|x| x % 2 == 0);
    /// assert_eq!(even, vec![2, 4, 6]);
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    fn partition<C, P>(self, mut predicate: P) -> (C, C)
    where
        Self: Sized,
        C: Default + Extend<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matched = C::default();
        let mut unmatched = C::default();
        self.for_each(|element| {
            if predicate(&element) {
                matched.extend(std::iter::once(element));
            } else {
                unmatched.extend(std::iter::once(element));
            }
        });
        (matched, unmatched)
    }

    /// Splits an iterator of pairs into two collections.
    fn unzip<A, B>(self) -> (Vec<A>, Vec<B>)
    where
        Self: Sized + LazyIterator<Item = (A, B)>,
    {
        self.fold((Vec::new(), Vec::new()), |(mut lefts, mut rights), (left, right)| {
            lefts.push(left);
            rights.push(right);
            (lefts, rights)
        })
    }

    // =========================================================================
    // Collecting Operations
    // =========================================================================

    /// Collects the elements into any `FromIterator` container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use monadic_iter::iter::{self, Terminal};
    ///
    /// let set: BTreeSet<char> = iter::from_iter("banana".chars()).collect();
    /// assert_eq!(set.into_iter().collect::<String>(), "abn");
    /// ```
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromIterator<Self::Item>,
    {
        C::from_iter(self.into_std())
    }

    /// Collects the elements into a `Vec`.
    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Concatenates the `Display` form of every element.
    fn collect_string(self) -> String
    where
        Self: Sized,
        Self::Item: std::fmt::Display,
    {
        self.fold(String::new(), |mut text, element| {
            text.push_str(&element.to_string());
            text
        })
    }

    /// Collects the payloads of leading `Present` elements, stopping at the first `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_iter::iter::{self, Terminal};
    /// use monadic_iter::monad::OptionalValue;
    ///
    /// let prefix = iter::from_iter([
    ///     OptionalValue::Present(1),
    ///     OptionalValue::Present(2),
    ///     OptionalValue::Absent,
    ///     OptionalValue::Present(4),
    /// ])
    /// .collect_present();
    /// assert_eq!(prefix, vec![1, 2]);
    /// ```
    fn collect_present<T>(mut self) -> Vec<T>
    where
        Self: Sized + LazyIterator<Item = OptionalValue<T>>,
    {
        let mut collected = Vec::new();
        while let OptionalValue::Present(OptionalValue::Present(value)) = self.advance() {
            collected.push(value);
        }
        collected
    }

    /// Collects every `Success` payload, or returns the first `Failure`.
    ///
    /// Nothing after the first `Failure` is pulled.
    fn collect_success<T, E>(mut self) -> ResultValue<Vec<T>, E>
    where
        Self: Sized + LazyIterator<Item = ResultValue<T, E>>,
    {
        let mut collected = Vec::new();
        while let OptionalValue::Present(element) = self.advance() {
            match element {
                ResultValue::Success(value) => collected.push(value),
                ResultValue::Failure(error) => return ResultValue::Failure(error),
            }
        }
        ResultValue::Success(collected)
    }

    // =========================================================================
    // Short-circuiting Operations
    // =========================================================================

    /// Tests whether every element satisfies `predicate`; `true` when empty.
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        while let OptionalValue::Present(element) = self.advance() {
            if !predicate(element) {
                return false;
            }
        }
        true
    }

    /// Tests whether any element satisfies `predicate`; `false` when empty.
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        while let OptionalValue::Present(element) = self.advance() {
            if predicate(element) {
                return true;
            }
        }
        false
    }

    /// Tests whether an element equal to `target` occurs.
    fn exist(&mut self, target: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.any(|element| element == *target)
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&mut self, mut predicate: P) -> OptionalValue<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let OptionalValue::Present(element) = self.advance() {
            if predicate(&element) {
                return OptionalValue::Present(element);
            }
        }
        OptionalValue::Absent
    }

    /// Returns the first `Present` result of `function`.
    fn find_map<B, F>(&mut self, mut function: F) -> OptionalValue<B>
    where
        F: FnMut(Self::Item) -> OptionalValue<B>,
    {
        while let OptionalValue::Present(element) = self.advance() {
            if let OptionalValue::Present(found) = function(element) {
                return OptionalValue::Present(found);
            }
        }
        OptionalValue::Absent
    }

    /// Returns the zero-based index of the first element satisfying `predicate`.
    fn position<P>(&mut self, mut predicate: P) -> OptionalValue<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut index = 0;
        while let OptionalValue::Present(element) = self.advance() {
            if predicate(element) {
                return OptionalValue::Present(index);
            }
            index += 1;
        }
        OptionalValue::Absent
    }

    /// Returns the zero-based index of the first element equal to `target`.
    fn index(&mut self, target: &Self::Item) -> OptionalValue<usize>
    where
        Self::Item: PartialEq,
    {
        self.position(|element| element == *target)
    }
}

impl<I: LazyIterator + ?Sized> Terminal for I {}
