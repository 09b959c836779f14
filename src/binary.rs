//! Binary Heap engine
//!
//! An array-backed binary heap whose ordering direction is a type parameter.
//! [`MaxHeap`](crate::max_heap::MaxHeap) and [`MinHeap`](crate::min_heap::MinHeap)
//! are both instantiations of [`DominanceHeap`]; they differ only in the
//! [`Dominance`] strategy they plug in, so the index arithmetic, the growth
//! policy and both sift loops exist exactly once.
//!
//! # Layout
//!
//! The tree lives in a `Vec<T>`. The root is slot 0, the children of slot `i`
//! are `2i + 1` and `2i + 2`, and its parent is `(i - 1) / 2`. The vector's
//! length is the number of live elements; its capacity starts at
//! [`INITIAL_CAPACITY`] and doubles when an insert finds it full. Removing
//! elements never gives capacity back.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity         |
//! |---------------|--------------------|
//! | `add`         | O(log n) amortized |
//! | `remove_root` | O(log n)           |
//! | `peek_root`   | O(1)               |
//! | `count`       | O(1)               |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::binary::DominanceHeap;
//! use rust_binary_heaps::MaxFirst;
//!
//! let mut heap: DominanceHeap<i32, MaxFirst> = DominanceHeap::new();
//! heap.add(3);
//! heap.add(9);
//! heap.add(4);
//!
//! assert_eq!(heap.peek_root(), Ok(&9));
//! assert_eq!(heap.remove_root(), Ok(9));
//! assert_eq!(heap.count(), 2);
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::traits::{Compare, Dominance, Heap, HeapError, Natural};

/// Number of slots allocated by a freshly constructed heap
pub const INITIAL_CAPACITY: usize = 33;

/// A binary heap parameterized by its ordering direction
///
/// - `T`: the element type
/// - `D`: the [`Dominance`] strategy deciding which element is the root
/// - `C`: the [`Compare`] total order, [`Natural`] (`T: Ord`) by default
pub struct DominanceHeap<T, D, C = Natural> {
    /// Live elements occupy `data[..data.len()]` in heap order
    data: Vec<T>,
    compare: C,
    _direction: PhantomData<D>,
}

impl<T: Ord, D: Dominance> DominanceHeap<T, D, Natural> {
    /// Creates an empty heap ordered by `T`'s `Ord` implementation
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates a heap holding `items`, ordered by `T`'s `Ord` implementation
    ///
    /// Items are inserted one at a time through [`add`](Self::add).
    pub fn new_from<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::new_from_with_comparator(items, Natural)
    }
}

impl<T, D: Dominance, C: Compare<T>> DominanceHeap<T, D, C> {
    /// Creates an empty heap ordered by `compare`
    ///
    /// ```rust
    /// use rust_binary_heaps::min_heap::MinHeap;
    ///
    /// // Shortest string on top
    /// let mut heap = MinHeap::<&str, _>::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.add("three");
    /// heap.add("one");
    /// assert_eq!(heap.remove_root(), Ok("one"));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            compare,
            _direction: PhantomData,
        }
    }

    /// Creates a heap holding `items`, ordered by `compare`
    pub fn new_from_with_comparator<I: IntoIterator<Item = T>>(items: I, compare: C) -> Self {
        let mut heap = Self::with_comparator(compare);
        heap.add_many(items);
        debug!(
            "built heap from {} items (capacity {})",
            heap.count(),
            heap.capacity()
        );
        heap
    }

    /// Returns the number of live elements
    #[inline]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds at least one element
    #[inline]
    pub fn has_items(&self) -> bool {
        !self.data.is_empty()
    }

    /// Returns the number of slots currently allocated
    ///
    /// Always at least [`count`](Self::count). It grows by doubling and never
    /// shrinks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts `item` and restores the heap property
    pub fn add(&mut self, item: T) {
        if self.data.len() == self.data.capacity() {
            self.grow();
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Inserts every element of `items` in iteration order
    ///
    /// Each element goes through [`add`](Self::add); a panic raised by the
    /// iterator part way through leaves the already inserted elements in place.
    pub fn add_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek_root(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the root element
    ///
    /// The last live element is moved into the root slot and sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn remove_root(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let root = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(root)
    }

    /// Checks the heap property over every live parent/child pair
    ///
    /// Returns false if some child dominates its parent.
    pub fn verify_heap_property(&self) -> bool {
        (1..self.data.len()).all(|child| !self.dominates(child, parent(child)))
    }

    /// Whether the element at `first` belongs closer to the root than the one at `second`
    #[inline]
    fn dominates(&self, first: usize, second: usize) -> bool {
        D::dominates(self.compare.compare(&self.data[first], &self.data[second]))
    }

    /// Index `index` has no children among the live elements
    #[inline]
    fn is_leaf(&self, index: usize) -> bool {
        index >= self.data.len() / 2
    }

    /// Doubles the allocated capacity
    fn grow(&mut self) {
        let old_capacity = self.data.capacity();
        // A clone may start with no spare room at all
        let additional = old_capacity.max(INITIAL_CAPACITY);
        self.data.reserve_exact(additional);
        trace!(
            "grew heap storage from {} to {} slots",
            old_capacity,
            self.data.capacity()
        );
    }

    /// Move element at index up while it dominates its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.dominates(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while one of its children dominates it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        while !self.is_leaf(index) {
            let mut child = left_child(index);
            let right = right_child(index);
            if right < len && self.dominates(right, child) {
                child = right;
            }

            if !self.dominates(child, index) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<T, D: Dominance, C: Compare<T> + Default> Heap<T> for DominanceHeap<T, D, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        !self.has_items()
    }

    fn len(&self) -> usize {
        self.count()
    }

    fn push(&mut self, item: T) {
        self.add(item);
    }

    fn peek(&self) -> Option<&T> {
        self.peek_root().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.remove_root().ok()
    }
}

impl<T: Ord, D: Dominance> Default for DominanceHeap<T, D, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, D, C: Clone> Clone for DominanceHeap<T, D, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            compare: self.compare.clone(),
            _direction: PhantomData,
        }
    }
}

impl<T: fmt::Debug, D, C> fmt::Debug for DominanceHeap<T, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DominanceHeap")
            .field("count", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}
