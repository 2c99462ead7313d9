//! Linked Double-Ended Queue
//!
//! A doubly-linked chain of nodes with O(1) insertion and removal at both ends.
//!
//! ## Design
//!
//! Nodes live in an index arena instead of separate heap allocations:
//! - `slots`: growable storage, each slot either holds a node or sits on the free list
//! - `head` / `tail`: arena indices of the first and last node
//! - `next` / `prev`: links between nodes are arena indices
//!
//! Vacated slots are chained into a free list and reused by later insertions.
//! When the deque becomes empty the whole arena is released.
//!
//! ## Invariants
//!
//! ```text
//! head == None  <=>  tail == None  <=>  len == 0
//! node(head).prev == None, node(tail).next == None
//! node(a).next == Some(b)  <=>  node(b).prev == Some(a)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dualqueue::deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.add_last(1);
//! deque.add_last(2);
//! deque.add_first(0);
//!
//! let items: Vec<_> = deque.iter().copied().collect();
//! assert_eq!(items, [0, 1, 2]);
//!
//! assert_eq!(deque.remove_first(), Ok(0));
//! assert_eq!(deque.remove_last(), Ok(2));
//! assert_eq!(deque.remove_first(), Ok(1));
//! assert!(deque.is_empty());
//! ```

use crate::metrics::{MetricsCollector, MetricsRecorder, OperationMetrics};
use crate::{Error, Result};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    next: Option<usize>,
    prev: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A double-ended queue built on a doubly-linked node chain
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque
///
/// # Examples
///
/// ```rust
/// use dualqueue::deque::Deque;
///
/// let mut deque: Deque<&str> = Deque::new();
/// deque.add_first("b");
/// deque.add_first("a");
/// assert_eq!(deque.len(), 2);
/// assert_eq!(deque.remove_last(), Ok("b"));
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    metrics: MetricsRecorder,
}

impl<T> Deque<T> {
    /// Create a new, empty deque
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
            metrics: MetricsRecorder::default(),
        }
    }

    /// Returns `true` if the deque holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements in the deque
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert an element at the front
    pub fn add_first(&mut self, item: T) {
        let idx = self.allocate(Node {
            item,
            next: self.head,
            prev: None,
        });

        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        self.metrics.record_success(self.len);
    }

    /// Insert an element at the back
    pub fn add_last(&mut self, item: T) {
        let idx = self.allocate(Node {
            item,
            next: None,
            prev: self.tail,
        });

        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        self.metrics.record_success(self.len);
    }

    /// Insert an optional element at the front
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for `None`; the deque is left unchanged.
    pub fn try_add_first(&mut self, item: Option<T>) -> Result<()> {
        match item {
            Some(item) => {
                self.add_first(item);
                Ok(())
            }
            None => {
                self.metrics.record_failure();
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Insert an optional element at the back
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for `None`; the deque is left unchanged.
    pub fn try_add_last(&mut self, item: Option<T>) -> Result<()> {
        match item {
            Some(item) => {
                self.add_last(item);
                Ok(())
            }
            None => {
                self.metrics.record_failure();
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Remove and return the front element
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let Some(idx) = self.head else {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        };

        let node = self.release(idx);
        self.head = node.next;
        match node.next {
            Some(new_head) => self.node_mut(new_head).prev = None,
            None => self.tail = None,
        }
        self.finish_removal();
        Ok(node.item)
    }

    /// Remove and return the back element
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let Some(idx) = self.tail else {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        };

        let node = self.release(idx);
        self.tail = node.prev;
        match node.prev {
            Some(new_tail) => self.node_mut(new_tail).next = None,
            None => self.head = None,
        }
        self.finish_removal();
        Ok(node.item)
    }

    /// Front-to-back iterator over the elements
    ///
    /// Every call starts a fresh traversal from the current head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn finish_removal(&mut self) {
        self.len -= 1;
        if self.len == 0 {
            // Only vacant slots remain.
            self.slots = Vec::new();
            self.free = None;
        }
        self.metrics.record_success(self.len);
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(idx) => {
                let slot = mem::replace(&mut self.slots[idx], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Unlink the slot at `idx`; the returned node still carries its old links
    fn release(&mut self, idx: usize) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[idx], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot linked into the chain"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot linked into the chain"),
        }
    }

    /// Walk the chain in both directions and check every link invariant
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);

        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            assert_eq!(node.prev, prev, "backward link mismatch at slot {idx}");
            prev = Some(idx);
            cursor = node.next;
            count += 1;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);

        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        assert_eq!(occupied, self.len, "unreachable node retained in the arena");
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> MetricsCollector for Deque<T> {
    fn metrics(&self) -> OperationMetrics {
        self.metrics.snapshot(self.len, self.slots.len())
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset(self.len);
    }

    fn set_metrics_enabled(&mut self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}

/// Borrowing front-to-back iterator over a [`Deque`]
///
/// Created by [`Deque::iter`]. The iterator is read-only: [`Iter::remove`]
/// always fails.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
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
        if self.remaining == 0 {
            return None;
        }
        let deque: &'a Deque<T> = self.deque;
        let node = deque.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let deque: &'a Deque<T> = self.deque;
        let node = deque.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`Deque`] front to back
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}
