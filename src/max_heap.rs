//! Max-Heap
//!
//! A [`DominanceHeap`] whose root is always the largest live element.
//! Ties are broken arbitrarily.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::max_heap::MaxHeap;
//!
//! let mut heap = MaxHeap::new_from([1, 3, -1, 5, -9, 10]);
//! assert_eq!(heap.peek_root(), Ok(&10));
//! assert_eq!(heap.remove_root(), Ok(10));
//! assert_eq!(heap.remove_root(), Ok(5));
//! assert_eq!(heap.count(), 4);
//! ```

use crate::binary::DominanceHeap;
use crate::traits::{MaxFirst, Natural};

/// Binary heap with the maximum element at the root
pub type MaxHeap<T, C = Natural> = DominanceHeap<T, MaxFirst, C>;
