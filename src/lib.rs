//! Binary Heap Data Structures for Rust
//!
//! This crate provides an array-backed binary heap whose ordering direction is
//! a type parameter, along with the two heaps built from it.
//!
//! # Features
//!
//! - **Max Heap**: the largest element is always at the root
//! - **Min Heap**: the smallest element is always at the root
//! - **Custom orderings**: any `Fn(&T, &T) -> Ordering` can replace `T`'s own `Ord`
//!
//! Both heaps share a single engine, [`DominanceHeap`](binary::DominanceHeap).
//! Insertion and root removal are O(log n); reading the root is O(1).
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::max_heap::MaxHeap;
//! use rust_binary_heaps::min_heap::MinHeap;
//! use rust_binary_heaps::HeapError;
//!
//! let mut max = MaxHeap::new_from([1, 3, -1, 5]);
//! let mut min = MinHeap::new_from([1, 3, -1, 5]);
//!
//! assert_eq!(max.remove_root(), Ok(5));
//! assert_eq!(min.remove_root(), Ok(-1));
//!
//! let empty: MinHeap<i32> = MinHeap::new();
//! assert_eq!(empty.peek_root(), Err(HeapError::Empty));
//! ```

pub mod binary;
pub mod max_heap;
pub mod min_heap;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{Compare, Dominance, Heap, HeapError, MaxFirst, MinFirst, Natural};
