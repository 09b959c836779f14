//! Min-Heap
//!
//! A [`DominanceHeap`] whose root is always the smallest live element.
//! Ties are broken arbitrarily.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new_from([1, 3, -1, 5, -9, 10]);
//! assert_eq!(heap.peek_root(), Ok(&-9));
//! assert_eq!(heap.remove_root(), Ok(-9));
//! assert_eq!(heap.remove_root(), Ok(-1));
//! assert_eq!(heap.count(), 4);
//! ```

use crate::binary::DominanceHeap;
use crate::traits::{MinFirst, Natural};

/// Binary heap with the minimum element at the root
pub type MinHeap<T, C = Natural> = DominanceHeap<T, MinFirst, C>;
