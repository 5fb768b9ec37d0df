#![forbid(unsafe_code)]

//! Stack manipulation.
//!
//! Positions and counts come off the stack: the count is popped first, then
//! the position, and both address the stack as it stands after they are
//! gone. Each operation is atomic at frame level.

use clac_numeric::NumericEngine;

use super::committed;
use crate::engine::{CommandOutcome, Frame};
use crate::error::{ClacError, Result};
use crate::stack::Rotation;

#[allow(clippy::should_implement_trait)]
impl<E: NumericEngine> Frame<'_, E> {
    /// Empty the stack. Clearing an empty stack is skipped, so it leaves no
    /// history entry.
    pub fn clear(&mut self) -> Result<CommandOutcome> {
        if self.stack().is_empty() {
            return Ok(CommandOutcome::Skipped);
        }
        self.stack_mut().clear();
        Ok(CommandOutcome::Committed)
    }

    pub fn drop(&mut self) -> Result<CommandOutcome> {
        committed(self.stack_mut().drop(0, 1))
    }

    /// Drop the top `x` values.
    pub fn drop_n(&mut self) -> Result<CommandOutcome> {
        self.atomically(|f| {
            let count = f.pop_count()?;
            committed(f.stack_mut().drop(0, count))
        })
    }

    /// Drop `x` values starting at index `y`.
    pub fn drop_r(&mut self) -> Result<CommandOutcome> {
        self.atomically(|f| {
            let count = f.pop_count()?;
            let pos = f.pop_index()?;
            committed(f.stack_mut().drop(pos, count))
        })
    }

    pub fn dup(&mut self) -> Result<CommandOutcome> {
        committed(self.stack_mut().dup(0, 1))
    }

    /// Duplicate the top `x` values, keeping their order.
    pub fn dup_n(&mut self) -> Result<CommandOutcome> {
        self.atomically(|f| {
            let count = f.pop_count()?;
            committed(f.stack_mut().dup(0, count))
        })
    }

    /// Duplicate `x` values starting at index `y` onto the top.
    pub fn dup_r(&mut self) -> Result<CommandOutcome> {
        self.atomically(|f| {
            let count = f.pop_count()?;
            let pos = f.pop_index()?;
            committed(f.stack_mut().dup(pos, count))
        })
    }

    /// Copy the value at index `x` onto the top.
    pub fn pick(&mut self) -> Result<CommandOutcome> {
        self.atomically(|f| {
            let pos = f.pop_index()?;
            committed(f.stack_mut().dup(pos, 1))
        })
    }

    /// Exchange `x` and `y`.
    pub fn swap(&mut self) -> Result<CommandOutcome> {
        committed(self.stack_mut().rotate(1, 1, Rotation::Down))
    }

    /// Move the value at index `x` to the top.
    pub fn rot(&mut self) -> Result<CommandOutcome> {
        self.rotate_popped(false, Rotation::Down)
    }

    /// Move the top value down to index `x`.
    pub fn unrot(&mut self) -> Result<CommandOutcome> {
        self.rotate_popped(false, Rotation::Up)
    }

    /// Move the `x` values starting at index `y` to the top.
    pub fn rot_r(&mut self) -> Result<CommandOutcome> {
        self.rotate_popped(true, Rotation::Down)
    }

    /// Move the top `x` values down so the block ends at index `y`.
    pub fn unrot_r(&mut self) -> Result<CommandOutcome> {
        self.rotate_popped(true, Rotation::Up)
    }

    /// Push the number of values on the stack.
    pub fn depth(&mut self) -> Result<CommandOutcome> {
        let depth = i64::try_from(self.stack().len()).map_err(|_| ClacError::OutOfRange)?;
        let value = self.int(depth);
        self.push(value);
        Ok(CommandOutcome::Committed)
    }

    fn rotate_popped(&mut self, ranged: bool, direction: Rotation) -> Result<CommandOutcome> {
        self.atomically(|f| {
            let count = if ranged { f.pop_count()? } else { 1 };
            let pos = f.pop_index()?;
            committed(f.stack_mut().rotate(pos, count, direction))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{CommandOutcome, Frame};
    use crate::error::{ClacError, Result};
    use crate::stack::Stack;
    use clac_numeric::FloatEngine;

    fn run(
        bottom_first: &[f64],
        op: impl FnOnce(&mut Frame<'_, FloatEngine>) -> Result<CommandOutcome>,
    ) -> (Result<CommandOutcome>, Vec<f64>) {
        let engine = FloatEngine;
        let mut stack = Stack::from_bottom(bottom_first.iter().copied());
        let result = op(&mut Frame::new(&engine, &mut stack));
        (result, stack.as_slice().to_vec())
    }

    #[test]
    fn clear_empty_is_skipped() {
        assert_eq!(run(&[], |f| f.clear()), (Ok(CommandOutcome::Skipped), vec![]));
        assert_eq!(run(&[1.0], |f| f.clear()), (Ok(CommandOutcome::Committed), vec![]));
    }

    #[test]
    fn drop_and_dup() {
        assert_eq!(run(&[1.0, 2.0], |f| f.drop()).1, vec![1.0]);
        assert_eq!(run(&[1.0, 2.0], |f| f.dup()).1, vec![2.0, 2.0, 1.0]);
        assert_eq!(run(&[], |f| f.drop()).0, Err(ClacError::TooFewArguments));
        assert_eq!(run(&[], |f| f.dup()).0, Err(ClacError::TooFewArguments));
    }

    #[test]
    fn drop_n_and_drop_r() {
        assert_eq!(run(&[1.0, 2.0, 3.0, 2.0], |f| f.drop_n()).1, vec![1.0]);
        // Drop 2 values starting at index 1: removes 3 and 2, keeps 4 and 1.
        assert_eq!(
            run(&[1.0, 2.0, 3.0, 4.0, 1.0, 2.0], |f| f.drop_r()).1,
            vec![4.0, 1.0]
        );
    }

    #[test]
    fn drop_n_failure_keeps_the_count() {
        let (result, stack) = run(&[1.0, 5.0], |f| f.drop_n());
        assert_eq!(result, Err(ClacError::TooFewArguments));
        assert_eq!(stack, vec![5.0, 1.0]);
    }

    #[test]
    fn dup_n_and_dup_r() {
        assert_eq!(
            run(&[1.0, 2.0, 3.0, 2.0], |f| f.dup_n()).1,
            vec![3.0, 2.0, 3.0, 2.0, 1.0]
        );
        assert_eq!(
            run(&[1.0, 2.0, 3.0, 1.0, 2.0], |f| f.dup_r()).1,
            vec![2.0, 1.0, 3.0, 2.0, 1.0]
        );
    }

    #[test]
    fn pick_copies_indexed_value() {
        assert_eq!(run(&[7.0, 8.0, 9.0, 2.0], |f| f.pick()).1, vec![7.0, 9.0, 8.0, 7.0]);
        assert_eq!(run(&[7.0, -1.0], |f| f.pick()).0, Err(ClacError::InvalidArgument));
    }

    #[test]
    fn swap_exchanges_top_two() {
        assert_eq!(run(&[1.0, 2.0], |f| f.swap()).1, vec![1.0, 2.0]);
        assert_eq!(run(&[1.0], |f| f.swap()).0, Err(ClacError::TooFewArguments));
    }

    #[test]
    fn rot_and_unrot_are_inverse() {
        let (_, rotated) = run(&[1.0, 2.0, 3.0, 4.0, 2.0], |f| f.rot());
        assert_eq!(rotated, vec![2.0, 4.0, 3.0, 1.0]);

        let mut bottom_first: Vec<f64> = rotated.iter().rev().copied().collect();
        bottom_first.push(2.0);
        let (_, restored) = run(&bottom_first, |f| f.unrot());
        assert_eq!(restored, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn rot_r_moves_a_block() {
        // Lift 2 values starting at index 1.
        let (result, stack) = run(&[1.0, 2.0, 3.0, 4.0, 1.0, 2.0], |f| f.rot_r());
        assert_eq!(result, Ok(CommandOutcome::Committed));
        assert_eq!(stack, vec![3.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn unrot_r_sinks_a_block() {
        // Sink the top 2 values so the block ends at index 2.
        let (_, stack) = run(&[1.0, 2.0, 3.0, 4.0, 2.0, 2.0], |f| f.unrot_r());
        assert_eq!(stack, vec![2.0, 4.0, 3.0, 1.0]);
    }

    #[test]
    fn rotation_failure_restores_operands() {
        let (result, stack) = run(&[1.0, 2.0, 9.0], |f| f.rot());
        assert_eq!(result, Err(ClacError::TooFewArguments));
        assert_eq!(stack, vec![9.0, 2.0, 1.0]);
    }

    #[test]
    fn depth_pushes_length() {
        assert_eq!(run(&[], |f| f.depth()).1, vec![0.0]);
        assert_eq!(run(&[5.0, 6.0], |f| f.depth()).1, vec![2.0, 6.0, 5.0]);
    }
}
