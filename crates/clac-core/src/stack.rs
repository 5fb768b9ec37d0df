#![forbid(unsafe_code)]

//! Position-addressed value stack.
//!
//! Index 0 is the most recently pushed value (`x`), index 1 the one below it
//! (`y`), and so on away from the top. Every range primitive validates its
//! range before touching the stack, so a failed call never leaves a partial
//! mutation behind.
//!
//! ```text
//! index:   0   1   2   3
//!        ┌───┬───┬───┬───┐
//!        │ x │ y │ z │ t │   push() inserts at 0, pop() removes 0
//!        └───┴───┴───┴───┘
//!          top         bottom
//! ```

use std::fmt;
use std::ops::Range;

use crate::error::{ClacError, Result};

/// Whether a range may touch the position one past the bottom.
///
/// Insertion points live between elements, so inserting below the bottom
/// value (`pos == len`) is legal while reading from there is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Every index must address an existing element.
    Inside,
    /// The index `len` is accepted as an insertion point.
    AllowEnd,
}

/// Direction of a [`Stack::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Move the block at `pos` to the top.
    Down,
    /// Move the block at the top down so that it ends at `pos`.
    Up,
}

/// A stack of calculator values, top first.
#[derive(Clone, PartialEq)]
pub struct Stack<V> {
    values: Vec<V>,
}

impl<V> Default for Stack<V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<V: fmt::Debug> fmt::Debug for Stack<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl<V> Stack<V> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from values listed bottom first, i.e. in push order.
    #[must_use]
    pub fn from_bottom(values: impl IntoIterator<Item = V>) -> Self {
        let mut values: Vec<V> = values.into_iter().collect();
        values.reverse();
        Self { values }
    }

    /// Build a stack from values listed top first.
    #[must_use]
    pub fn from_top(values: Vec<V>) -> Self {
        Self { values }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values top first.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Validate the range of `count` elements starting at `pos`.
    ///
    /// Fails with [`ClacError::InvalidArgument`] for an empty range and with
    /// [`ClacError::TooFewArguments`] when either end lies at or past the
    /// limit (`len`, or `len + 1` under [`Boundary::AllowEnd`]).
    pub fn check_range(
        &self,
        pos: usize,
        count: usize,
        boundary: Boundary,
    ) -> Result<Range<usize>> {
        if count == 0 {
            return Err(ClacError::InvalidArgument);
        }
        let limit = match boundary {
            Boundary::Inside => self.values.len(),
            Boundary::AllowEnd => self.values.len() + 1,
        };
        let end = pos.checked_add(count - 1).ok_or(ClacError::TooFewArguments)?;
        if pos >= limit || end >= limit {
            return Err(ClacError::TooFewArguments);
        }
        Ok(pos..end + 1)
    }

    /// Splice `values` in so that `values[0]` lands at index `pos`.
    ///
    /// `pos == len` places the block below the current bottom.
    pub fn insert(&mut self, values: Vec<V>, pos: usize) -> Result<()> {
        let at = self.check_range(pos, 1, Boundary::AllowEnd)?.start;
        self.values.splice(at..at, values);
        Ok(())
    }

    /// Remove and return `count` elements starting at `pos`, top first.
    pub fn remove(&mut self, pos: usize, count: usize) -> Result<Vec<V>> {
        let range = self.check_range(pos, count, Boundary::Inside)?;
        Ok(self.values.drain(range).collect())
    }

    /// Push onto the top. Always succeeds.
    pub fn push(&mut self, value: V) {
        self.values.insert(0, value);
    }

    /// Pop the top value.
    pub fn pop(&mut self) -> Result<V> {
        if self.values.is_empty() {
            return Err(ClacError::TooFewArguments);
        }
        Ok(self.values.remove(0))
    }

    /// Borrow the value at `pos`.
    pub fn peek(&self, pos: usize) -> Result<&V> {
        self.values.get(pos).ok_or(ClacError::TooFewArguments)
    }

    /// Borrow `count` elements starting at `pos` without removing them.
    pub fn peek_range(&self, pos: usize, count: usize) -> Result<&[V]> {
        let range = self.check_range(pos, count, Boundary::Inside)?;
        Ok(&self.values[range])
    }

    /// Discard `count` elements starting at `pos`.
    pub fn drop(&mut self, pos: usize, count: usize) -> Result<()> {
        self.remove(pos, count).map(|_| ())
    }

    /// Move a block of `count` elements between `pos` and the top.
    ///
    /// [`Rotation::Down`] lifts the block starting at `pos` to the top.
    /// [`Rotation::Up`] sinks the top block so that its last element lands
    /// at `pos`; it needs `pos + 1 >= count`.
    pub fn rotate(&mut self, pos: usize, count: usize, direction: Rotation) -> Result<()> {
        let (from, to) = match direction {
            Rotation::Down => (pos, 0),
            Rotation::Up => {
                let to = pos
                    .saturating_add(1)
                    .checked_sub(count)
                    .ok_or(ClacError::InvalidArgument)?;
                (0, to)
            }
        };
        self.check_range(from, count, Boundary::Inside)?;
        self.check_range(to, count, Boundary::Inside)?;
        let block = self.remove(from, count)?;
        self.insert(block, to)
    }
}

impl<V: Clone> Stack<V> {
    /// Copy `count` elements starting at `pos` onto the top, keeping their order.
    pub fn dup(&mut self, pos: usize, count: usize) -> Result<()> {
        let block = self.peek_range(pos, count)?.to_vec();
        self.insert(block, 0)
    }
}

impl<V> FromIterator<V> for Stack<V> {
    /// Collects values bottom first, as if pushed one by one.
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_bottom(iter)
    }
}

impl<'a, V> IntoIterator for &'a Stack<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(bottom_first: &[i32]) -> Stack<i32> {
        Stack::from_bottom(bottom_first.iter().copied())
    }

    #[test]
    fn index_zero_is_most_recent_push() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.as_slice(), &[3, 2, 1]);
        assert_eq!(s.peek(0), Ok(&3));
        assert_eq!(s, stack(&[1, 2, 3]));
    }

    #[test]
    fn check_range_rejects_empty_range() {
        let s = stack(&[1, 2, 3]);
        assert_eq!(s.check_range(0, 0, Boundary::Inside), Err(ClacError::InvalidArgument));
        assert_eq!(s.check_range(5, 0, Boundary::AllowEnd), Err(ClacError::InvalidArgument));
    }

    #[test]
    fn check_range_respects_the_limit() {
        let s = stack(&[1, 2, 3]);
        assert_eq!(s.check_range(0, 3, Boundary::Inside), Ok(0..3));
        assert_eq!(s.check_range(1, 3, Boundary::Inside), Err(ClacError::TooFewArguments));
        assert_eq!(s.check_range(3, 1, Boundary::Inside), Err(ClacError::TooFewArguments));
        assert_eq!(s.check_range(3, 1, Boundary::AllowEnd), Ok(3..4));
        assert_eq!(s.check_range(4, 1, Boundary::AllowEnd), Err(ClacError::TooFewArguments));
    }

    #[test]
    fn check_range_survives_overflowing_counts() {
        let s = stack(&[1]);
        assert_eq!(
            s.check_range(1, usize::MAX, Boundary::AllowEnd),
            Err(ClacError::TooFewArguments)
        );
    }

    #[test]
    fn insert_at_end_appends_below_bottom() {
        let mut s = stack(&[1, 2]);
        s.insert(vec![9, 8], 2).unwrap();
        assert_eq!(s.as_slice(), &[2, 1, 9, 8]);
    }

    #[test]
    fn insert_past_end_fails_untouched() {
        let mut s = stack(&[1, 2]);
        assert_eq!(s.insert(vec![9], 3), Err(ClacError::TooFewArguments));
        assert_eq!(s, stack(&[1, 2]));
    }

    #[test]
    fn remove_returns_block_top_first() {
        let mut s = stack(&[1, 2, 3, 4]);
        assert_eq!(s.remove(1, 2), Ok(vec![3, 2]));
        assert_eq!(s.as_slice(), &[4, 1]);
    }

    #[test]
    fn pop_on_empty_is_too_few_arguments() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.pop(), Err(ClacError::TooFewArguments));
    }

    #[test]
    fn dup_copies_block_to_top_in_order() {
        let mut s = stack(&[1, 2, 3, 4]);
        s.dup(1, 2).unwrap();
        assert_eq!(s.as_slice(), &[3, 2, 4, 3, 2, 1]);
    }

    #[test]
    fn drop_discards_a_middle_block() {
        let mut s = stack(&[1, 2, 3, 4]);
        s.drop(1, 2).unwrap();
        assert_eq!(s.as_slice(), &[4, 1]);
    }

    #[test]
    fn rotate_down_lifts_element_to_top() {
        let mut s = stack(&[1, 2, 3, 4]);
        s.rotate(2, 1, Rotation::Down).unwrap();
        assert_eq!(s.as_slice(), &[2, 4, 3, 1]);
    }

    #[test]
    fn rotate_up_sinks_top_to_position() {
        let mut s = stack(&[1, 2, 3, 4]);
        s.rotate(2, 1, Rotation::Up).unwrap();
        assert_eq!(s.as_slice(), &[3, 2, 4, 1]);
    }

    #[test]
    fn rotate_block_round_trips() {
        let original = stack(&[1, 2, 3, 4, 5, 6]);
        let mut s = original.clone();
        s.rotate(2, 3, Rotation::Down).unwrap();
        assert_eq!(s.as_slice(), &[4, 3, 2, 6, 5, 1]);
        s.rotate(4, 3, Rotation::Up).unwrap();
        assert_eq!(s, original);
    }

    #[test]
    fn rotate_up_needs_room_for_the_block() {
        let mut s = stack(&[1, 2, 3, 4]);
        assert_eq!(s.rotate(0, 2, Rotation::Up), Err(ClacError::InvalidArgument));
        assert_eq!(s, stack(&[1, 2, 3, 4]));
    }

    #[test]
    fn failed_rotate_leaves_stack_untouched() {
        let mut s = stack(&[1, 2, 3]);
        assert_eq!(s.rotate(3, 1, Rotation::Down), Err(ClacError::TooFewArguments));
        assert_eq!(s.rotate(3, 1, Rotation::Up), Err(ClacError::TooFewArguments));
        assert_eq!(s, stack(&[1, 2, 3]));
    }

    #[test]
    fn swap_is_rotation_of_index_one() {
        let mut s = stack(&[1, 2]);
        s.rotate(1, 1, Rotation::Down).unwrap();
        assert_eq!(s.as_slice(), &[1, 2]);
    }
}
