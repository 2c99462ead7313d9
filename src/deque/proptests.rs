//! Property-based tests for the linked deque using proptest
//!
//! Random operation sequences are replayed against `std::collections::VecDeque`
//! and the link invariants are checked after every step.

use crate::deque::Deque;
use crate::Error;
use proptest::prelude::*;
use std::collections::VecDeque;
use std::vec::Vec;

#[derive(Debug, Clone)]
enum Op {
    AddFirst(i32),
    AddLast(i32),
    RemoveFirst,
    RemoveLast,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::AddFirst),
        any::<i32>().prop_map(Op::AddLast),
        Just(Op::RemoveFirst),
        Just(Op::RemoveLast),
    ]
}

proptest! {
    #[test]
    fn test_matches_vecdeque_model(
        operations in prop::collection::vec(op_strategy(), 0..200)
    ) {
        let mut deque = Deque::new();
        let mut model = VecDeque::new();

        for op in operations {
            match op {
                Op::AddFirst(value) => {
                    deque.add_first(value);
                    model.push_front(value);
                }
                Op::AddLast(value) => {
                    deque.add_last(value);
                    model.push_back(value);
                }
                Op::RemoveFirst => {
                    let expected = model.pop_front().ok_or(Error::EmptyContainer);
                    prop_assert_eq!(deque.remove_first(), expected);
                }
                Op::RemoveLast => {
                    let expected = model.pop_back().ok_or(Error::EmptyContainer);
                    prop_assert_eq!(deque.remove_last(), expected);
                }
            }
            deque.assert_invariants();
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.is_empty(), model.is_empty());
        }

        let forward: Vec<i32> = deque.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(forward, expected);
    }

    #[test]
    fn test_len_is_adds_minus_removes(
        operations in prop::collection::vec(op_strategy(), 0..200)
    ) {
        let mut deque = Deque::new();
        let mut adds = 0usize;
        let mut removes = 0usize;

        for op in operations {
            match op {
                Op::AddFirst(value) => {
                    deque.add_first(value);
                    adds += 1;
                }
                Op::AddLast(value) => {
                    deque.add_last(value);
                    adds += 1;
                }
                Op::RemoveFirst => {
                    if deque.remove_first().is_ok() {
                        removes += 1;
                    }
                }
                Op::RemoveLast => {
                    if deque.remove_last().is_ok() {
                        removes += 1;
                    }
                }
            }
        }

        prop_assert_eq!(deque.len(), adds - removes);
        prop_assert_eq!(deque.iter().count(), deque.len());
        prop_assert_eq!(deque.iter().rev().count(), deque.len());
    }

    #[test]
    fn test_backward_iteration_mirrors_forward(
        values in prop::collection::vec(any::<u16>(), 0..64)
    ) {
        let mut deque = Deque::new();
        for &value in &values {
            deque.add_first(value);
        }

        let backward: Vec<u16> = deque.iter().rev().copied().collect();
        prop_assert_eq!(backward, values);
    }
}
