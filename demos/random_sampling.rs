//! Randomized queue example
//!
//! Shows sampling, random removal, independently shuffled iterators and the
//! growth/shrink policy of the backing storage.

use dualqueue::queue::RandomizedQueue;
use dualqueue::{Error, MetricsCollector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("dualqueue RandomizedQueue Example");
    println!("=================================");

    println!("\n1. Enqueue and Sample:");
    let mut queue = RandomizedQueue::new();
    for letter in ["A", "B", "C", "D"] {
        queue.enqueue(letter);
    }
    println!("   size: {}", queue.len());
    println!("   sample: {}", queue.sample()?);

    println!("\n2. Random Dequeue Order:");
    print!("   ");
    while !queue.is_empty() {
        print!("{} ", queue.dequeue()?);
    }
    println!();

    println!("\n3. Error Handling Examples:");
    match queue.dequeue() {
        Err(Error::EmptyContainer) => println!("   ✓ dequeue on empty queue rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }
    match queue.sample() {
        Err(Error::EmptyContainer) => println!("   ✓ sample on empty queue rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }
    match queue.try_enqueue(None) {
        Err(Error::InvalidArgument) => println!("   ✓ absent element rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    println!("\n4. Independent Iterators:");
    for letter in ["X", "Y", "Z"] {
        queue.enqueue(letter);
    }
    let first: Vec<_> = queue.iter().collect();
    let second: Vec<_> = queue.iter().collect();
    println!("   it1: {:?}", first);
    println!("   it2: {:?}", second);

    let mut iter = queue.iter();
    while iter.try_next().is_ok() {}
    match iter.try_next() {
        Err(Error::EndOfSequence) => println!("   ✓ exhausted iterator reports end of sequence"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }
    match iter.remove() {
        Err(Error::UnsupportedOperation) => println!("   ✓ removal through iterator rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    println!("\n5. Capacity Policy:");
    let mut numbers = RandomizedQueue::with_seed(2024);
    for i in 0..32 {
        numbers.enqueue(i);
    }
    println!("   after 32 enqueues: len {}, capacity {}", numbers.len(), numbers.capacity());
    while numbers.len() > 1 {
        numbers.dequeue()?;
    }
    println!("   after draining to 1: len {}, capacity {}", numbers.len(), numbers.capacity());

    let metrics = numbers.metrics();
    println!(
        "   grow events: {}, shrink events: {}",
        metrics.grow_events, metrics.shrink_events
    );

    println!("\n✅ RandomizedQueue example completed successfully!");
    Ok(())
}
