//! Common traits for heap data structures
//!
//! This module provides the pieces every heap in the crate is built from:
//!
//! - [`Heap`]: the `BinaryHeap`-style push/pop/peek interface
//! - [`Compare`]: the total order used to rank elements
//! - [`Dominance`]: the ordering direction, i.e. which side of a comparison
//!   belongs closer to the root
//! - [`HeapError`]: failures reported by the root accessors

use std::cmp::Ordering;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements, so there is no root to read or remove
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A total order over `T`
///
/// Implemented by [`Natural`] (the element's own `Ord`) and by any closure
/// `Fn(&T, &T) -> Ordering`. The order must stay consistent for every element
/// that is ever inserted into a heap; a heap built on an inconsistent order
/// will not panic, but it will extract elements in an unspecified order.
pub trait Compare<T> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Ordering taken from the element type's `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ordering direction of a heap
///
/// A dominance strategy answers one question: given how a comparison between
/// two elements came out, does the first element belong above the second?
/// Ties must never dominate, so that the sift loops terminate on equal keys.
pub trait Dominance {
    /// Returns true if an element comparing as `ordering` against another
    /// should sit closer to the root than that other element
    fn dominates(ordering: Ordering) -> bool;
}

/// Larger elements dominate; the root is the maximum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl Dominance for MaxFirst {
    #[inline]
    fn dominates(ordering: Ordering) -> bool {
        ordering == Ordering::Greater
    }
}

/// Smaller elements dominate; the root is the minimum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl Dominance for MinFirst {
    #[inline]
    fn dominates(ordering: Ordering) -> bool {
        ordering == Ordering::Less
    }
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the root
/// - `peek` returns the root without removing it
///
/// Unlike `BinaryHeap`, which is always a max-heap, the root is whichever
/// element the heap's [`Dominance`] strategy puts on top.
///
/// # Example
///
/// ```rust
/// use rust_binary_heaps::Heap;
/// use rust_binary_heaps::min_heap::MinHeap;
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn push(&mut self, item: T);

    /// Returns the root element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
