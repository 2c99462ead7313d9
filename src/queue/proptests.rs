//! Property-based tests for the randomized queue using proptest
//!
//! These tests verify that the queue keeps its multiset of elements and its
//! capacity invariants under arbitrary operation sequences.

use crate::queue::randomized::{RandomizedQueue, MIN_CAPACITY};
use crate::Error;
use proptest::prelude::*;
use std::vec::Vec;

proptest! {
    #[test]
    fn test_drain_preserves_multiset(
        seed in any::<u64>(),
        values in prop::collection::vec(any::<i16>(), 0..300)
    ) {
        let mut queue = RandomizedQueue::with_seed(seed);
        for &value in &values {
            queue.enqueue(value);
        }
        prop_assert_eq!(queue.len(), values.len());

        let mut drained = Vec::with_capacity(values.len());
        while !queue.is_empty() {
            drained.push(queue.dequeue().unwrap());
        }
        prop_assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));

        let mut expected = values.clone();
        expected.sort_unstable();
        drained.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn test_interleaved_operations_keep_invariants(
        seed in any::<u64>(),
        operations in prop::collection::vec(
            prop::bool::weighted(0.6), // 60% enqueue, 40% dequeue
            1..400
        )
    ) {
        let mut queue = RandomizedQueue::with_seed(seed);
        let mut live: Vec<u32> = Vec::new();
        let mut counter = 0u32;

        for should_enqueue in operations {
            if should_enqueue {
                queue.enqueue(counter);
                live.push(counter);
                counter += 1;
            } else {
                match queue.dequeue() {
                    Ok(value) => {
                        let position = live.iter().position(|&v| v == value);
                        prop_assert!(position.is_some(), "dequeued unknown value {}", value);
                        live.swap_remove(position.unwrap());
                    }
                    Err(err) => {
                        prop_assert_eq!(err, Error::EmptyContainer);
                        prop_assert!(live.is_empty());
                    }
                }
            }

            prop_assert_eq!(queue.len(), live.len());
            prop_assert!(queue.len() <= queue.capacity());
            prop_assert!(queue.capacity() >= MIN_CAPACITY);
            prop_assert!(queue.capacity().is_power_of_two());
            if queue.len() > 0 {
                prop_assert!(queue.len() > queue.capacity() / 4 || queue.capacity() == MIN_CAPACITY);
            }
        }
    }

    #[test]
    fn test_iteration_visits_current_contents(
        seed in any::<u64>(),
        values in prop::collection::vec(any::<u8>(), 0..100),
        removals in 0usize..50
    ) {
        let mut queue = RandomizedQueue::with_seed(seed);
        for &value in &values {
            queue.enqueue(value);
        }
        let mut remaining = values.clone();
        for _ in 0..removals.min(values.len()) {
            let value = queue.dequeue().unwrap();
            let position = remaining.iter().position(|&v| v == value).unwrap();
            remaining.swap_remove(position);
        }

        let mut iterated: Vec<u8> = queue.iter().copied().collect();
        iterated.sort_unstable();
        remaining.sort_unstable();
        prop_assert_eq!(iterated, remaining);
    }

    #[test]
    fn test_sample_is_member_and_non_destructive(
        seed in any::<u64>(),
        values in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let mut queue = RandomizedQueue::with_seed(seed);
        for &value in &values {
            queue.enqueue(value);
        }

        for _ in 0..20 {
            let sampled = *queue.sample().unwrap();
            prop_assert!(values.contains(&sampled));
        }
        prop_assert_eq!(queue.len(), values.len());
    }
}
