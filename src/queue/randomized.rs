//! Randomized Queue
//!
//! A resizable-array queue whose removals, samples and iteration order are
//! uniformly random.
//!
//! ## Design
//!
//! Live elements occupy the first `len` positions of the backing storage:
//! - `enqueue` appends at position `len`, doubling the capacity first when full
//! - `dequeue` picks a uniform index in `[0, len)` and fills the hole with the last element
//! - the capacity halves once occupancy drops to a quarter, never below [`MIN_CAPACITY`]
//!
//! ```text
//! capacity:  2 -> 4 -> 8 -> 16 ...   (grow when len == capacity)
//! capacity: 16 -> 8 -> 4 -> 2        (shrink when len == capacity / 4)
//! ```
//!
//! ## Randomness
//!
//! Every draw goes through [`rand::Rng::gen_range`], and each iterator shuffles
//! its own index permutation with [`rand::seq::SliceRandom::shuffle`]
//! (Fisher-Yates). Seeded constructors make the sequence of draws reproducible.
//!
//! ## Example
//!
//! ```rust
//! use dualqueue::queue::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::with_seed(2024);
//! for letter in ["A", "B", "C", "D"] {
//!     queue.enqueue(letter);
//! }
//!
//! let peeked = *queue.sample()?;
//! assert!(["A", "B", "C", "D"].contains(&peeked));
//! assert_eq!(queue.len(), 4);
//!
//! let mut drained = Vec::new();
//! while !queue.is_empty() {
//!     drained.push(queue.dequeue()?);
//! }
//! drained.sort();
//! assert_eq!(drained, ["A", "B", "C", "D"]);
//! # Ok::<(), dualqueue::Error>(())
//! ```

use crate::metrics::{MetricsCollector, MetricsRecorder, OperationMetrics};
use crate::{Error, Result};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::iter::FusedIterator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Capacity of a freshly constructed queue
pub const INITIAL_CAPACITY: usize = 2;

/// The backing storage never shrinks below this many slots
pub const MIN_CAPACITY: usize = 2;

/// A queue with uniformly random removal, sampling and iteration
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the queue
/// * `R` - The random number generator, [`StdRng`] by default
///
/// The generator sits in a `RefCell` so that [`sample`](Self::sample) and
/// [`iter`](Self::iter) only need `&self`. The queue is therefore not `Sync`.
///
/// # Examples
///
/// ```rust
/// use dualqueue::queue::RandomizedQueue;
///
/// let mut queue = RandomizedQueue::with_seed(1);
/// queue.enqueue(10);
/// queue.enqueue(20);
///
/// let first = queue.dequeue()?;
/// let second = queue.dequeue()?;
/// assert_eq!(first + second, 30);
/// assert!(queue.dequeue().is_err());
/// # Ok::<(), dualqueue::Error>(())
/// ```
pub struct RandomizedQueue<T, R = StdRng> {
    items: Vec<T>,
    capacity: usize,
    rng: RefCell<R>,
    metrics: MetricsRecorder,
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "unstable", doc(cfg(feature = "std")))]
impl<T> RandomizedQueue<T> {
    /// Create an empty queue seeded from operating system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty, entropy-seeded queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_rng(capacity, StdRng::from_entropy())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "unstable", doc(cfg(feature = "std")))]
impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RandomizedQueue<T, StdRng> {
    /// Create an empty queue whose draws are fully determined by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Create an empty queue drawing from the given generator
    pub fn with_rng(rng: R) -> Self {
        Self::with_capacity_and_rng(INITIAL_CAPACITY, rng)
    }

    /// Create an empty queue with the given initial capacity and generator
    ///
    /// Capacities below [`MIN_CAPACITY`] are rounded up to it.
    pub fn with_capacity_and_rng(capacity: usize, rng: R) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            rng: RefCell::new(rng),
            metrics: MetricsRecorder::default(),
        }
    }

    /// Returns `true` if the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of slots in the backing storage
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add an element, doubling the capacity first if the queue is full
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.resize(self.capacity * 2);
            self.metrics.record_grow();
        }
        self.items.push(item);
        self.metrics.record_success(self.items.len());
    }

    /// Add an optional element
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for `None`; the queue is left unchanged.
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        match item {
            Some(item) => {
                self.enqueue(item);
                Ok(())
            }
            None => {
                self.metrics.record_failure();
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Remove and return a uniformly random element
    ///
    /// The last element moves into the vacated position, so removal is O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.items.is_empty() {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        }

        let idx = self.random_index();
        let item = self.items.swap_remove(idx);

        let len = self.items.len();
        if len > 0 && len == self.capacity / 4 && self.capacity / 2 >= MIN_CAPACITY {
            self.resize(self.capacity / 2);
            self.metrics.record_shrink();
        }
        self.metrics.record_success(len);
        Ok(item)
    }

    /// Return a uniformly random element without removing it
    ///
    /// Every call is an independent draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn sample(&self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(&self.items[self.random_index()])
    }

    /// Iterator over the elements in a freshly shuffled order
    ///
    /// Each call draws its own permutation.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.shuffle(&mut *self.rng.borrow_mut());
        Iter {
            items: &self.items,
            order,
            position: 0,
        }
    }

    fn random_index(&self) -> usize {
        self.rng.borrow_mut().gen_range(0..self.items.len())
    }

    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.items.len());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.capacity,
            to = new_capacity,
            len = self.items.len(),
            "resizing randomized queue storage"
        );

        let mut items = Vec::with_capacity(new_capacity);
        items.append(&mut self.items);
        self.items = items;
        self.capacity = new_capacity;
    }
}

impl<T: fmt::Debug, R> fmt::Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T, R> MetricsCollector for RandomizedQueue<T, R> {
    fn metrics(&self) -> OperationMetrics {
        self.metrics.snapshot(self.items.len(), self.capacity)
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset(self.items.len());
    }

    fn set_metrics_enabled(&mut self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}

/// Iterator over a [`RandomizedQueue`] in a uniformly shuffled order
///
/// Owns its permutation of indices; the elements themselves are borrowed.
pub struct Iter<'a, T> {
    items: &'a [T],
    order: Vec<usize>,
    position: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Advance the iterator, failing once the sequence is exhausted
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfSequence`] when there is no next element.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::EndOfSequence)
    }

    /// Removal through the iterator is not supported
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedOperation`].
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let items: &'a [T] = self.items;
        let &idx = self.order.get(self.position)?;
        self.position += 1;
        Some(&items[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self.order[self.position..].iter().map(|&idx| &self.items[idx]);
        f.debug_list().entries(pending).finish()
    }
}

impl<'a, T, R: Rng> IntoIterator for &'a RandomizedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`RandomizedQueue`] in random order
pub struct IntoIter<T, R = StdRng> {
    queue: RandomizedQueue<T, R>,
}

impl<T, R: Rng> Iterator for IntoIter<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, R: Rng> ExactSizeIterator for IntoIter<T, R> {}

impl<T, R: Rng> FusedIterator for IntoIter<T, R> {}

impl<T: fmt::Debug, R> fmt::Debug for IntoIter<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("queue", &self.queue).finish()
    }
}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T, R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}
