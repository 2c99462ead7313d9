//! Deque (double-ended queue) implementation
//!
//! This module provides a linked double-ended queue with constant-time access at both ends.
//!
//! ## Available Deques
//!
//! - [`Deque`]: doubly-linked chain of nodes stored in an index arena
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add_first` / `add_last` | O(1) amortized (arena growth) |
//! | `remove_first` / `remove_last` | O(1) |
//! | `len` / `is_empty` | O(1) |
//! | `iter` | O(1) to create, O(n) to traverse |

pub mod linked;

pub use self::linked::{Deque, IntoIter, Iter};


#[cfg(test)]
mod proptests;
