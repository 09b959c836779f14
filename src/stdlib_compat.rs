//! Standard library compatibility layer
//!
//! Lets the heaps plug into the usual collection idioms:
//!
//! - `collect()` into a heap ([`FromIterator`]) and `extend()` one
//!   ([`Extend`]); both insert element by element through
//!   [`add`](DominanceHeap::add)
//! - drain a heap root-first with [`DominanceHeap::into_sorted_iter`] or
//!   [`DominanceHeap::into_sorted_vec`]
//!
//! There is deliberately no borrowing iterator: the only way to observe the
//! elements in order is to remove them.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::max_heap::MaxHeap;
//!
//! let mut heap: MaxHeap<i32> = vec![4, 1, 7].into_iter().collect();
//! heap.extend([3, 9]);
//! assert_eq!(heap.into_sorted_vec(), vec![9, 7, 4, 3, 1]);
//! ```

use std::iter::FusedIterator;

use crate::binary::DominanceHeap;
use crate::traits::{Compare, Dominance, Natural};

impl<T: Ord, D: Dominance> FromIterator<T> for DominanceHeap<T, D, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new_from(iter)
    }
}

impl<T, D: Dominance, C: Compare<T>> Extend<T> for DominanceHeap<T, D, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl<T, D: Dominance, C: Compare<T>> DominanceHeap<T, D, C> {
    /// Consumes the heap, yielding its elements root-first
    pub fn into_sorted_iter(self) -> IntoSortedIter<T, D, C> {
        IntoSortedIter { heap: self }
    }

    /// Consumes the heap, returning its elements in root-first order
    ///
    /// Descending for a max-heap, ascending for a min-heap.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.count());
        out.extend(self.into_sorted_iter());
        out
    }
}

/// Owning iterator that removes the root on every step
///
/// Created by [`DominanceHeap::into_sorted_iter`].
#[derive(Debug, Clone)]
pub struct IntoSortedIter<T, D, C = Natural> {
    heap: DominanceHeap<T, D, C>,
}

impl<T, D: Dominance, C: Compare<T>> Iterator for IntoSortedIter<T, D, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove_root().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heap.count();
        (remaining, Some(remaining))
    }
}

impl<T, D: Dominance, C: Compare<T>> ExactSizeIterator for IntoSortedIter<T, D, C> {}

impl<T, D: Dominance, C: Compare<T>> FusedIterator for IntoSortedIter<T, D, C> {}
