//! Basic usage example for dualqueue
//!
//! Walks through every deque operation and every error kind the containers
//! report.

use dualqueue::deque::Deque;
use dualqueue::{Error, MetricsCollector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("dualqueue Deque Example");
    println!("=======================");

    // Insertion at both ends
    println!("\n1. Basic Operations:");
    let mut deque: Deque<i32> = Deque::new();
    deque.add_first(1);
    deque.add_last(2);
    deque.add_first(0);
    println!("   Length after three insertions: {}", deque.len());

    print!("   Contents:");
    for value in &deque {
        print!(" {}", value);
    }
    println!();

    // Removal at both ends
    println!("\n2. Removal:");
    println!("   remove_first: {}", deque.remove_first()?);
    println!("   remove_last:  {}", deque.remove_last()?);
    println!("   remaining:    {}", deque.remove_first()?);
    println!("   is_empty:     {}", deque.is_empty());

    // Error handling
    println!("\n3. Error Handling Examples:");
    match deque.remove_first() {
        Err(Error::EmptyContainer) => println!("   ✓ remove_first on empty deque rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    match deque.try_add_first(None) {
        Err(Error::InvalidArgument) => println!("   ✓ absent element rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    let mut letters = Deque::new();
    letters.add_last("A");
    let mut iter = letters.iter();
    iter.try_next()?;
    match iter.try_next() {
        Err(Error::EndOfSequence) => println!("   ✓ exhausted iterator reports end of sequence"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }
    match iter.remove() {
        Err(Error::UnsupportedOperation) => println!("   ✓ removal through iterator rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    // Metrics
    println!("\n4. Metrics:");
    let metrics = deque.metrics();
    println!("   Total operations: {}", metrics.total_operations);
    println!("   Success rate: {:.1}%", metrics.success_rate());
    println!("   Peak length: {}", metrics.peak_len);

    println!("\n✅ Deque example completed successfully!");
    Ok(())
}
