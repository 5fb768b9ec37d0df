#![forbid(unsafe_code)]

//! Property tests for [`Stack`] range primitives.
//!
//! Validates:
//! - `check_range` accepts exactly the ranges inside the limit.
//! - `dup(pos, count)` followed by `drop(0, count)` restores the stack.
//! - Rotating a block down and back up restores the stack.
//! - `push(v)` then `pop()` returns `v` and restores the stack.
//! - A failing primitive never mutates the stack.

use clac_core::{Boundary, ClacError, Rotation, Stack};
use proptest::prelude::*;

// ============================================================================
// Strategy helpers
// ============================================================================

fn values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 1..=max_len)
}

/// A non-empty stack plus a valid `(pos, count)` range inside it.
fn stack_with_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    values(40).prop_flat_map(|v| {
        let len = v.len();
        (Just(v), 0..len).prop_flat_map(move |(v, pos)| (Just(v), Just(pos), 1..=len - pos))
    })
}

// ============================================================================
// Invariant 1: check_range matches its definition
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn check_range_matches_definition(
        len in 0usize..20,
        pos in 0usize..25,
        count in 0usize..25,
        allow_end in any::<bool>()
    ) {
        let stack = Stack::from_top(vec![0_i64; len]);
        let boundary = if allow_end { Boundary::AllowEnd } else { Boundary::Inside };
        let limit = if allow_end { len + 1 } else { len };

        let result = stack.check_range(pos, count, boundary);
        if count == 0 {
            prop_assert_eq!(result, Err(ClacError::InvalidArgument));
        } else if pos + count > limit {
            prop_assert_eq!(result, Err(ClacError::TooFewArguments));
        } else {
            prop_assert_eq!(result, Ok(pos..pos + count));
        }
    }
}

// ============================================================================
// Invariant 2: dup then drop is the identity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn dup_then_drop_restores((v, pos, count) in stack_with_range()) {
        let original = Stack::from_top(v);
        let mut stack = original.clone();

        stack.dup(pos, count).unwrap();
        prop_assert_eq!(stack.len(), original.len() + count);
        prop_assert_eq!(
            &stack.as_slice()[..count],
            &original.as_slice()[pos..pos + count]
        );

        stack.drop(0, count).unwrap();
        prop_assert_eq!(stack, original);
    }
}

// ============================================================================
// Invariant 3: rotation round trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn rotate_down_then_up_restores((v, pos, count) in stack_with_range()) {
        let original = Stack::from_top(v);
        let mut stack = original.clone();

        stack.rotate(pos, count, Rotation::Down).unwrap();
        prop_assert_eq!(&stack.as_slice()[..count], &original.as_slice()[pos..pos + count]);

        stack.rotate(pos + count - 1, count, Rotation::Up).unwrap();
        prop_assert_eq!(stack, original);
    }

    #[test]
    fn rotate_preserves_the_multiset((v, pos, count) in stack_with_range()) {
        let mut stack = Stack::from_top(v.clone());
        stack.rotate(pos, count, Rotation::Down).unwrap();

        let mut before = v;
        let mut after = stack.as_slice().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

// ============================================================================
// Invariant 4: push/pop round trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn push_then_pop_returns_value(v in prop::collection::vec(any::<i64>(), 0..30), x in any::<i64>()) {
        let original = Stack::from_top(v);
        let mut stack = original.clone();

        stack.push(x);
        prop_assert_eq!(stack.peek(0), Ok(&x));
        prop_assert_eq!(stack.pop(), Ok(x));
        prop_assert_eq!(stack, original);
    }
}

// ============================================================================
// Invariant 5: failures never mutate
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn out_of_range_primitives_leave_stack_untouched(
        v in prop::collection::vec(any::<i64>(), 0..20),
        extra in 1usize..10,
        count in 1usize..5
    ) {
        let original = Stack::from_top(v);
        let mut stack = original.clone();
        let past = original.len() + extra;

        prop_assert!(stack.remove(past, count).is_err());
        prop_assert!(stack.dup(past, count).is_err());
        prop_assert!(stack.drop(past, count).is_err());
        prop_assert!(stack.rotate(past, count, Rotation::Down).is_err());
        prop_assert!(stack.rotate(past, count, Rotation::Up).is_err());
        prop_assert!(stack.insert(vec![1, 2], past).is_err());
        prop_assert_eq!(stack, original);
    }
}
