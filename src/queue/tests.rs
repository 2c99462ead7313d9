//! Statistical and scenario tests for the randomized queue
//!
//! All generators are seeded, so the frequencies below are reproducible and the
//! tolerances sit several standard deviations away from the expected values.

use super::*;
use crate::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::vec::Vec;

#[test]
fn test_sample_is_uniform() {
    let mut queue = RandomizedQueue::with_seed(42);
    let n = 5;
    for i in 0..n {
        queue.enqueue(i);
    }

    let draws = 100_000;
    let mut counts = [0usize; 5];
    for _ in 0..draws {
        counts[*queue.sample().unwrap()] += 1;
    }

    for (item, &count) in counts.iter().enumerate() {
        let frequency = count as f64 / draws as f64;
        assert!(
            (frequency - 1.0 / n as f64).abs() < 0.01,
            "item {} drawn with frequency {}",
            item,
            frequency
        );
    }
    assert_eq!(queue.len(), n);
}

#[test]
fn test_dequeue_is_uniform() {
    let mut rng_seed = 0u64;
    let trials = 40_000;
    let mut counts = [0usize; 4];

    for _ in 0..trials {
        rng_seed += 1;
        let mut queue = RandomizedQueue::with_seed(rng_seed);
        for i in 0..4 {
            queue.enqueue(i);
        }
        counts[queue.dequeue().unwrap()] += 1;
    }

    for &count in &counts {
        let frequency = count as f64 / trials as f64;
        assert!((frequency - 0.25).abs() < 0.02, "frequency {}", frequency);
    }
}

#[test]
fn test_dequeue_stays_uniform_after_resizes() {
    // One long-lived generator; every round grows and shrinks the storage.
    let mut queue = RandomizedQueue::with_rng(StdRng::seed_from_u64(7));
    let rounds = 20_000;
    let mut first_pick = [0usize; 8];

    for _ in 0..rounds {
        for i in 0..8 {
            queue.enqueue(i);
        }
        first_pick[queue.dequeue().unwrap()] += 1;
        while queue.dequeue().is_ok() {}
    }

    for &count in &first_pick {
        let frequency = count as f64 / rounds as f64;
        assert!((frequency - 0.125).abs() < 0.02, "frequency {}", frequency);
    }
}

#[test]
fn test_iterator_permutations_are_uniform() {
    let mut queue = RandomizedQueue::with_seed(1234);
    queue.enqueue('a');
    queue.enqueue('b');
    queue.enqueue('c');

    let trials = 60_000;
    let mut orders: HashMap<Vec<char>, usize> = HashMap::new();
    for _ in 0..trials {
        let order: Vec<char> = queue.iter().copied().collect();
        *orders.entry(order).or_insert(0) += 1;
    }

    assert_eq!(orders.len(), 6, "every permutation should appear");
    let expected = trials / 6;
    for (order, &count) in &orders {
        assert!(
            count.abs_diff(expected) < 800,
            "order {:?} appeared {} times",
            order,
            count
        );
    }
}

#[test]
fn test_concurrent_iterators_are_independent() {
    let mut queue = RandomizedQueue::with_seed(77);
    for i in 0..6 {
        queue.enqueue(i);
    }

    let mut differing = 0;
    for _ in 0..200 {
        let first = queue.iter();
        let second = queue.iter();
        if !first.eq(second) {
            differing += 1;
        }
    }

    assert!(differing > 0, "iterators never produced different orders");
    assert!(differing > 150, "only {} of 200 pairs differed", differing);
}

#[test]
fn test_every_element_visited_once_per_iteration() {
    let mut queue = RandomizedQueue::with_seed(3);
    for i in 0..100 {
        queue.enqueue(i);
    }

    for _ in 0..10 {
        let mut visited: Vec<i32> = queue.iter().copied().collect();
        visited.sort_unstable();
        assert_eq!(visited, (0..100).collect::<Vec<_>>());
    }

    let mut via_for_loop = 0;
    for _ in &queue {
        via_for_loop += 1;
    }
    assert_eq!(via_for_loop, 100);
}

#[test]
fn test_growth_then_drain_to_one() {
    let mut queue = RandomizedQueue::with_seed(2);

    for i in 0..1_000 {
        queue.enqueue(i);
        assert_eq!(queue.len(), i + 1);
        assert!(queue.len() <= queue.capacity());
    }
    assert_eq!(queue.capacity(), 1024);

    while queue.len() > 1 {
        let before = queue.len();
        queue.dequeue().unwrap();
        assert_eq!(queue.len(), before - 1);
        assert!(queue.sample().is_ok());
        assert_eq!(queue.iter().count(), queue.len());
    }

    assert_eq!(queue.capacity(), MIN_CAPACITY);
    assert!(queue.sample().is_ok());
    assert!(queue.dequeue().is_ok());
    assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
    assert_eq!(queue.sample(), Err(Error::EmptyContainer));
}

#[test]
fn test_queue_drop_safety() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

    struct DropCounter {
        _id: usize,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            DROP_COUNT.fetch_add(1, Ordering::Relaxed);
        }
    }

    let mut queue = RandomizedQueue::with_seed(9);
    for i in 0..50 {
        queue.enqueue(DropCounter { _id: i });
    }
    for _ in 0..25 {
        drop(queue.dequeue());
    }
    assert_eq!(DROP_COUNT.load(Ordering::Relaxed), 25);

    drop(queue);
    assert_eq!(DROP_COUNT.load(Ordering::Relaxed), 50);
}
