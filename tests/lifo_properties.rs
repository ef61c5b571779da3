//! Property tests for the LIFO contract shared by `Stack` and `BitStack`.

use microstack::{BitStack, Lifo, Stack, StackError};
use proptest::prelude::*;

fn pop_all<L: Lifo>(stack: &mut L) -> Vec<L::Item> {
    let mut values = Vec::new();
    while let Ok(value) = stack.pop() {
        values.push(value);
    }
    values
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stack_pops_in_reverse_push_order(values in prop::collection::vec(any::<i64>(), 0..3000)) {
        let mut stack: Stack<i64> = values.iter().copied().collect();
        prop_assert_eq!(stack.len(), values.len());
        prop_assert_eq!(stack.is_empty(), values.is_empty());

        let expected: Vec<i64> = values.into_iter().rev().collect();
        prop_assert_eq!(pop_all(&mut stack), expected);
        prop_assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn bit_stack_pops_in_reverse_push_order(values in prop::collection::vec(any::<bool>(), 0..3000)) {
        let mut stack: BitStack = values.iter().copied().collect();
        prop_assert_eq!(stack.len(), values.len());

        let expected: Vec<bool> = values.into_iter().rev().collect();
        prop_assert_eq!(pop_all(&mut stack), expected);
        prop_assert_eq!(stack.top(), Err(StackError::Empty));
    }

    #[test]
    fn stack_matches_vec_model(ops in prop::collection::vec(op(), 0..2000)) {
        let mut stack = Stack::with_capacity(8);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    stack.push(value);
                    model.push(value);
                }
                Op::Pop => {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.peek().ok(), model.last());
            prop_assert!(stack.capacity() >= stack.len());
        }
    }

    #[test]
    fn bit_stack_matches_vec_model(ops in prop::collection::vec(op(), 0..2000)) {
        let mut stack = BitStack::with_capacity(1);
        let mut model: Vec<bool> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    stack.push(value < 0);
                    model.push(value < 0);
                }
                Op::Pop => {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.top().ok(), model.last().copied());
            prop_assert!(stack.capacity() >= stack.len());
        }
    }

    #[test]
    fn stack_clone_is_independent(
        values in prop::collection::vec(any::<u16>(), 1..2000),
        extra in any::<u16>(),
    ) {
        let mut src: Stack<u16> = values.iter().copied().collect();
        let mut dst = src.clone();

        src.push(extra);
        prop_assert_eq!(dst.len(), values.len());
        dst.pop().unwrap();
        dst.pop().ok();
        prop_assert_eq!(src.len(), values.len() + 1);
        prop_assert_eq!(src.top(), Ok(extra));
    }

    #[test]
    fn bit_stack_clone_is_independent(values in prop::collection::vec(any::<bool>(), 1..2000)) {
        let mut src: BitStack = values.iter().copied().collect();
        let original = src.clone();
        let mut dst = src.clone();

        let flipped = !values[values.len() - 1];
        src.pop().unwrap();
        src.push(flipped);
        prop_assert_eq!(&dst, &original);
        prop_assert_eq!(dst.top(), Ok(!flipped));

        dst.push(true);
        prop_assert_eq!(src.len(), values.len());
        prop_assert_eq!(src.top(), Ok(flipped));
    }

    #[test]
    fn take_moves_everything(values in prop::collection::vec(any::<bool>(), 0..1000)) {
        let mut src: BitStack = values.iter().copied().collect();
        let expected = src.clone();
        let dst = src.take();

        prop_assert_eq!(dst, expected);
        prop_assert!(src.is_empty());
        prop_assert_eq!(src.capacity(), 0);
    }
}
