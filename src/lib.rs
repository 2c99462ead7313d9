//! # dualqueue
//!
//! Two single-threaded, generic containers with strict structural invariants.
//!
//! ## Features
//!
//! - **Deque**: double-ended queue backed by a doubly-linked node chain, O(1) at both ends
//! - **RandomizedQueue**: resizable array with uniformly random removal, sampling and iteration order
//!
//! ## Quick Start
//!
//! ```rust
//! use dualqueue::{Deque, RandomizedQueue};
//!
//! let mut deque = Deque::new();
//! deque.add_first(1);
//! deque.add_last(2);
//! assert_eq!(deque.remove_first(), Ok(1));
//!
//! let mut queue = RandomizedQueue::with_seed(7);
//! queue.enqueue("a");
//! queue.enqueue("b");
//! let picked = queue.dequeue()?;
//! assert!(picked == "a" || picked == "b");
//! # Ok::<(), dualqueue::Error>(())
//! ```
//!
//! ## Absent elements
//!
//! Rust values are never null, so `add_first`, `add_last` and `enqueue` cannot
//! fail. Callers holding an `Option<T>` go through `try_add_first`,
//! `try_add_last` or `try_enqueue`, which reject `None` with
//! [`Error::InvalidArgument`] and leave the container untouched.
//!
//! ## Thread Safety
//!
//! Neither container is synchronized. Wrap them in a lock if they must be shared.

#![no_std]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(feature = "unstable", feature(doc_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod deque;
pub mod metrics;
pub mod queue;

pub use crate::deque::Deque;
pub use crate::metrics::{MetricsCollector, OperationMetrics};
pub use crate::queue::RandomizedQueue;

/// Error types for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// An absent element was passed to an insertion operation
    InvalidArgument,
    /// Removal or sampling was attempted on an empty container
    EmptyContainer,
    /// An iterator was advanced past its last element
    EndOfSequence,
    /// Removal was attempted through a read-only iterator
    UnsupportedOperation,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "Element must not be absent"),
            Error::EmptyContainer => write!(f, "Container is empty"),
            Error::EndOfSequence => write!(f, "No more elements in the sequence"),
            Error::UnsupportedOperation => write!(f, "Removal through an iterator is not supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for container operations
pub type Result<T> = core::result::Result<T, Error>;
