//! Queue implementations
//!
//! This module provides a resizable queue whose extraction order is uniformly random.
//!
//! ## Available Queues
//!
//! - [`RandomizedQueue`]: uniform random `dequeue`, `sample` and iteration order
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `enqueue` | O(1) amortized |
//! | `dequeue` | O(1) amortized |
//! | `sample` | O(1) |
//! | `iter` | O(n) to create (shuffle), O(1) per step |
//!
//! ## Examples
//!
//! ```rust
//! use dualqueue::queue::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::with_seed(42);
//! for i in 0..10 {
//!     queue.enqueue(i);
//! }
//!
//! // Two iterators shuffle independently
//! let first: Vec<_> = queue.iter().copied().collect();
//! let second: Vec<_> = queue.iter().copied().collect();
//! assert_eq!(first.len(), second.len());
//! ```

pub mod randomized;

pub use randomized::{IntoIter, Iter, RandomizedQueue, INITIAL_CAPACITY, MIN_CAPACITY};

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
