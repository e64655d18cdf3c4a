//! Integration tests for terminal operations and pull-level helpers.

#![cfg(feature = "iter")]

use std::collections::{BTreeMap, HashSet};

use monadic_iter::iter::{self, LazyIterator, Terminal};
use monadic_iter::monad::{OptionalValue, ResultValue};
use rstest::rstest;

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
#[case(vec![], 0)]
#[case(vec![7], 1)]
#[case(vec![1, 2, 3, 4], 4)]
fn test_count(#[case] input: Vec<i32>, #[case] expected: usize) {
    assert_eq!(iter::from_iter(input).count(), expected);
}

#[rstest]
fn test_fold_builds_string_in_order() {
    let joined = iter::from_iter(["x", "y", "z"]).fold(String::from(">"), |mut acc, part| {
        acc.push_str(part);
        acc
    });
    assert_eq!(joined, ">xyz");
}

#[rstest]
#[case(vec![], OptionalValue::Absent)]
#[case(vec![5], OptionalValue::Present(5))]
#[case(vec![2, 3, 4], OptionalValue::Present(9))]
fn test_sum(#[case] input: Vec<i32>, #[case] expected: OptionalValue<i32>) {
    assert_eq!(iter::from_iter(input).sum(), expected);
}

#[rstest]
fn test_reduce_single_element_skips_function() {
    let result = iter::once(5).reduce(|_, _| unreachable!("reduce must not combine a single element"));
    assert_eq!(result, OptionalValue::Present(5));
}

#[rstest]
fn test_sum_of_results_via_add_operator() {
    let total = iter::from_iter([
        ResultValue::<i32, &str>::Success(1),
        ResultValue::Success(2),
        ResultValue::Success(3),
    ])
    .sum();
    assert_eq!(total, OptionalValue::Present(ResultValue::Success(6)));
}

// =============================================================================
// Searching
// =============================================================================

#[rstest]
fn test_find_leaves_remainder() {
    let mut source = iter::from_iter(1..=10);
    assert_eq!(source.find(|x| x % 4 == 0), OptionalValue::Present(4));
    assert_eq!(source.advance(), OptionalValue::Present(5));
}

#[rstest]
fn test_position_and_index() {
    assert_eq!(iter::from_iter("hello".chars()).position(|c| c == 'l'), OptionalValue::Present(2));
    assert_eq!(iter::from_iter("hello".chars()).index(&'o'), OptionalValue::Present(4));
    assert_eq!(iter::from_iter("hello".chars()).index(&'z'), OptionalValue::Absent);
}

#[rstest]
fn test_exist_on_infinite_source_terminates() {
    assert!(iter::from_iter(0u32..).exist(&1_000));
}

#[rstest]
fn test_find_map_parses_first_number() {
    let number = iter::from_iter(["alpha", "beta", "42", "7"])
        .find_map(|word| OptionalValue::from_option(word.parse::<i32>().ok()));
    assert_eq!(number, OptionalValue::Present(42));
}

// =============================================================================
// Extremes
// =============================================================================

#[rstest]
fn test_max_by_key_tie_keeps_first() {
    let people = [("ann", 30), ("bob", 25), ("cid", 30)];
    assert_eq!(
        iter::from_iter(people).max_by_key(|(_, age)| *age),
        OptionalValue::Present(("ann", 30))
    );
    assert_eq!(
        iter::from_iter(people).min_by_key(|(_, age)| *age),
        OptionalValue::Present(("bob", 25))
    );
}

#[rstest]
fn test_last() {
    assert_eq!(iter::from_iter([1, 2, 3]).last(), OptionalValue::Present(3));
    assert_eq!(iter::empty::<i32>().last(), OptionalValue::Absent);
}

// =============================================================================
// Collecting
// =============================================================================

#[rstest]
fn test_collect_into_various_containers() {
    let set: HashSet<i32> = iter::from_iter([1, 2, 2, 3]).collect();
    assert_eq!(set.len(), 3);

    let map: BTreeMap<char, usize> = iter::from_iter("abc".chars()).enumerate().map(|(i, c)| (c, i)).collect();
    assert_eq!(map.get(&'c'), Some(&2));

    let text: String = iter::from_iter(['o', 'k']).collect();
    assert_eq!(text, "ok");
}

#[rstest]
fn test_collect_present_stops_at_first_absent() {
    let prefix = iter::from_iter([
        OptionalValue::Present(1),
        OptionalValue::Present(2),
        OptionalValue::Absent,
        OptionalValue::Present(3),
    ])
    .collect_present();
    assert_eq!(prefix, vec![1, 2]);
}

#[rstest]
fn test_collect_present_is_lazy_on_infinite_source() {
    let mut n = 0;
    let prefix = iter::repeat_with(move || {
        n += 1;
        if n < 4 { OptionalValue::Present(n) } else { OptionalValue::Absent }
    })
    .collect_present();
    assert_eq!(prefix, vec![1, 2, 3]);
}

#[rstest]
fn test_partition_and_unzip() {
    let (small, large): (Vec<u8>, Vec<u8>) = iter::from_iter([1u8, 200, 3, 150]).partition(|x| *x < 100);
    assert_eq!(small, vec![1, 3]);
    assert_eq!(large, vec![200, 150]);

    let (indices, letters) = iter::from_iter("xy".chars()).enumerate().unzip();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(letters, vec!['x', 'y']);
}

// =============================================================================
// Pull Helpers
// =============================================================================

#[rstest]
#[case(3, ResultValue::Success(()), OptionalValue::Present(4))]
#[case(5, ResultValue::Success(()), OptionalValue::Absent)]
#[case(8, ResultValue::Failure(5), OptionalValue::Absent)]
fn test_advance_by(
    #[case] count: usize,
    #[case] expected: ResultValue<(), usize>,
    #[case] next: OptionalValue<i32>,
) {
    let mut source = iter::from_iter(1..=5);
    assert_eq!(source.advance_by(count), expected);
    assert_eq!(source.advance(), next);
}

#[rstest]
fn test_next_chunk_short_returns_failure() {
    let mut source = iter::from_iter([1, 2, 3]);
    assert_eq!(source.next_chunk(2), ResultValue::Success(vec![1, 2]));
    assert_eq!(source.next_chunk(2), ResultValue::Failure(vec![3]));
    assert_eq!(source.next_chunk(2), ResultValue::Failure(vec![]));
}

#[rstest]
fn test_nth_on_once_with_defers_evaluation() {
    let mut evaluated = false;
    {
        let mut lazy = iter::once_with(|| {
            evaluated = true;
            1
        });
        assert_eq!(lazy.nth(1), OptionalValue::Absent);
    }
    assert!(!evaluated);
}
