//! Property-based tests for iterator combinator laws.
//!
//! - `take(n).take(m)` behaves like `take(min(n, m))`
//! - `zip` length is the shorter of its inputs
//! - `map` over a lazy pipeline agrees with `map` over `std`
//! - `fuse` never yields after its first `Absent`
//! - `chunk` concatenation restores the input

#![cfg(feature = "iter")]

use monadic_iter::iter::{self, LazyIterator, Terminal};
use monadic_iter::monad::OptionalValue;
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..40)
}

/// A source that reports `Absent` at the positions marked `false` and keeps
/// going afterwards.
fn flickering(pattern: Vec<bool>) -> impl LazyIterator<Item = usize> {
    let mut position = 0;
    iter::from_fn(move || {
        let current = position;
        position += 1;
        if pattern.get(current) == Some(&true) {
            OptionalValue::Present(current)
        } else {
            OptionalValue::Absent
        }
    })
}

// =============================================================================
// Law Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_take_take_is_take_min(elements in arb_elements(), n in 0usize..50, m in 0usize..50) {
        let nested = iter::from_iter(elements.clone()).take(n).take(m).collect_vec();
        let direct = iter::from_iter(elements).take(n.min(m)).collect_vec();
        prop_assert_eq!(nested, direct);
    }

    #[test]
    fn prop_zip_length_is_minimum(left in arb_elements(), right in arb_elements()) {
        let expected = left.len().min(right.len());
        prop_assert_eq!(iter::from_iter(left).zip(right).count(), expected);
    }

    #[test]
    fn prop_map_agrees_with_std(elements in arb_elements()) {
        let lazy = iter::from_iter(elements.clone()).map(|x| x.wrapping_mul(3)).collect_vec();
        let eager: Vec<i32> = elements.into_iter().map(|x| x.wrapping_mul(3)).collect();
        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn prop_filter_agrees_with_std(elements in arb_elements()) {
        let lazy = iter::from_iter(elements.clone()).filter(|x| x % 2 == 0).collect_vec();
        let eager: Vec<i32> = elements.into_iter().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn prop_fuse_stays_absent(pattern in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut fused = flickering(pattern.clone()).fuse();
        let leading = pattern.iter().take_while(|present| **present).count();
        for _ in 0..leading {
            prop_assert!(fused.advance().is_present());
        }
        for _ in 0..pattern.len() + 2 {
            prop_assert_eq!(fused.advance(), OptionalValue::Absent);
        }
    }

    #[test]
    fn prop_chunk_concatenation_restores_input(elements in arb_elements(), size in 1usize..8) {
        let chunks = iter::from_iter(elements.clone()).chunk(size).collect_vec();
        prop_assert!(chunks.iter().all(|chunk| !chunk.is_empty() && chunk.len() <= size));
        prop_assert_eq!(chunks.concat(), elements);
    }

    #[test]
    fn prop_skip_then_take_partitions(elements in arb_elements(), n in 0usize..50) {
        let head = iter::from_iter(elements.clone()).take(n).collect_vec();
        let tail = iter::from_iter(elements.clone()).skip(n).collect_vec();
        prop_assert_eq!([head, tail].concat(), elements);
    }

    #[test]
    fn prop_unique_matches_first_occurrences(elements in prop::collection::vec(0i32..10, 0..40)) {
        let lazy = iter::from_iter(elements.clone()).unique().collect_vec();
        let mut eager = Vec::new();
        for element in elements {
            if !eager.contains(&element) {
                eager.push(element);
            }
        }
        prop_assert_eq!(lazy, eager);
    }

    #[test]
    fn prop_intersperse_length(elements in arb_elements()) {
        let expected = (elements.len() * 2).saturating_sub(1);
        prop_assert_eq!(iter::from_iter(elements).intersperse(0).count(), expected);
    }

    #[test]
    fn prop_reduce_sum_matches_fold(elements in prop::collection::vec(-1000i64..1000, 1..30)) {
        let reduced = iter::from_iter(elements.clone()).sum();
        let folded = elements.iter().sum::<i64>();
        prop_assert_eq!(reduced, OptionalValue::Present(folded));
    }
}
