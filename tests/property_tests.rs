//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use rust_binary_heaps::binary::DominanceHeap;
use rust_binary_heaps::max_heap::MaxHeap;
use rust_binary_heaps::min_heap::MinHeap;
use rust_binary_heaps::{Dominance, HeapError, MaxFirst, MinFirst};

/// Expected root of the live multiset, for the given direction
fn expected_root(live: &[i32], max_first: bool) -> Option<i32> {
    if max_first {
        live.iter().max().copied()
    } else {
        live.iter().min().copied()
    }
}

/// Test that add and remove_root keep the heap property and the right root
fn test_add_remove_invariant<D: Dominance>(
    ops: Vec<(bool, i32)>,
    max_first: bool,
) -> Result<(), TestCaseError> {
    let mut heap: DominanceHeap<i32, D> = DominanceHeap::new();
    let mut live = Vec::new();

    for (should_remove, value) in ops {
        if should_remove && heap.has_items() {
            let removed = heap.remove_root().map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(Some(removed), expected_root(&live, max_first));
            let pos = live.iter().position(|&v| v == removed).unwrap();
            live.swap_remove(pos);
        } else {
            heap.add(value);
            live.push(value);
        }

        prop_assert!(heap.verify_heap_property());
        prop_assert_eq!(heap.peek_root().ok().copied(), expected_root(&live, max_first));
    }

    Ok(())
}

/// Test that all removed elements come out fully sorted
fn test_sorted_extraction<D: Dominance>(
    values: Vec<i32>,
    max_first: bool,
) -> Result<(), TestCaseError> {
    let mut heap: DominanceHeap<i32, D> = DominanceHeap::new_from(values.clone());

    let mut expected = values;
    expected.sort_unstable();
    if max_first {
        expected.reverse();
    }

    let mut extracted = Vec::with_capacity(expected.len());
    while let Ok(value) = heap.remove_root() {
        extracted.push(value);
    }

    prop_assert_eq!(extracted, expected);
    prop_assert!(!heap.has_items());
    prop_assert_eq!(heap.remove_root(), Err(HeapError::Empty));
    Ok(())
}

/// Test count() is always adds minus removals
fn test_count_invariant<D: Dominance>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap: DominanceHeap<i32, D> = DominanceHeap::new();
    let mut expected_count = 0;

    for (should_remove, value) in ops {
        if should_remove {
            if heap.remove_root().is_ok() {
                expected_count -= 1;
            }
        } else {
            heap.add(value);
            expected_count += 1;
        }

        prop_assert_eq!(heap.count(), expected_count);
        prop_assert_eq!(heap.has_items(), expected_count > 0);
        prop_assert!(heap.capacity() >= heap.count());
    }

    Ok(())
}

/// Test that splitting input between new_from and add_many does not matter
fn test_bulk_insert_split<D: Dominance>(
    first: Vec<i32>,
    second: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut split: DominanceHeap<i32, D> = DominanceHeap::new_from(first.clone());
    split.add_many(second.clone());

    let mut whole: DominanceHeap<i32, D> = DominanceHeap::new();
    for value in first.into_iter().chain(second) {
        whole.add(value);
    }

    prop_assert_eq!(split.count(), whole.count());
    prop_assert_eq!(split.into_sorted_vec(), whole.into_sorted_vec());
    Ok(())
}

proptest! {
    #[test]
    fn test_max_add_remove_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_add_remove_invariant::<MaxFirst>(ops, true)?;
    }

    #[test]
    fn test_max_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_sorted_extraction::<MaxFirst>(values, true)?;
    }

    #[test]
    fn test_max_count_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_count_invariant::<MaxFirst>(ops)?;
    }

    #[test]
    fn test_max_bulk_insert_split(
        first in prop::collection::vec(-50i32..50, 0..60),
        second in prop::collection::vec(-50i32..50, 0..60)
    ) {
        test_bulk_insert_split::<MaxFirst>(first, second)?;
    }

    #[test]
    fn test_min_add_remove_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_add_remove_invariant::<MinFirst>(ops, false)?;
    }

    #[test]
    fn test_min_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_sorted_extraction::<MinFirst>(values, false)?;
    }

    #[test]
    fn test_min_count_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_count_invariant::<MinFirst>(ops)?;
    }

    #[test]
    fn test_min_bulk_insert_split(
        first in prop::collection::vec(-50i32..50, 0..60),
        second in prop::collection::vec(-50i32..50, 0..60)
    ) {
        test_bulk_insert_split::<MinFirst>(first, second)?;
    }

    #[test]
    fn test_peek_does_not_mutate(values in prop::collection::vec(-1000i32..1000, 1..100)) {
        let max = MaxHeap::new_from(values.clone());
        let min = MinHeap::new_from(values.clone());

        let max_root = max.peek_root().copied();
        let min_root = min.peek_root().copied();
        prop_assert_eq!(max.peek_root().copied(), max_root);
        prop_assert_eq!(min.peek_root().copied(), min_root);
        prop_assert_eq!(max.count(), values.len());
        prop_assert_eq!(min.count(), values.len());
    }

    #[test]
    fn test_max_and_min_agree_on_reversed_order(values in prop::collection::vec(any::<i16>(), 0..150)) {
        let max = MaxHeap::new_from(values.clone());
        let mut min_sorted = MinHeap::new_from(values).into_sorted_vec();
        min_sorted.reverse();
        prop_assert_eq!(max.into_sorted_vec(), min_sorted);
    }
}
