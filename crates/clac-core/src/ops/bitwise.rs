#![forbid(unsafe_code)]

//! Bitwise operations on operands truncated toward zero.

use clac_numeric::NumericEngine;

use super::Arity;
use crate::engine::{CommandOutcome, Frame};
use crate::error::Result;

impl<E: NumericEngine> Frame<'_, E> {
    pub fn and(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Fixed(2), |x| Ok(x[1] & x[0]))
    }

    pub fn or(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Fixed(2), |x| Ok(x[1] | x[0]))
    }

    pub fn xor(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Fixed(2), |x| Ok(x[1] ^ x[0]))
    }

    pub fn not(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Fixed(1), |x| Ok(!x[0]))
    }

    /// And of the `x` values below the count.
    pub fn and_n(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Variadic, |x| Ok(x.iter().fold(-1, |acc, v| acc & v)))
    }

    pub fn or_n(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Variadic, |x| Ok(x.iter().fold(0, |acc, v| acc | v)))
    }

    pub fn xor_n(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Variadic, |x| Ok(x.iter().fold(0, |acc, v| acc ^ v)))
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
    ) -> Result<Vec<f64>> {
        let engine = FloatEngine;
        let mut stack = Stack::from_bottom(bottom_first.iter().copied());
        op(&mut Frame::new(&engine, &mut stack))?;
        Ok(stack.as_slice().to_vec())
    }

    #[test]
    fn pairwise() {
        assert_eq!(run(&[12.0, 10.0], |f| f.and()), Ok(vec![8.0]));
        assert_eq!(run(&[12.0, 10.0], |f| f.or()), Ok(vec![14.0]));
        assert_eq!(run(&[12.0, 10.0], |f| f.xor()), Ok(vec![6.0]));
        assert_eq!(run(&[0.0], |f| f.not()), Ok(vec![-1.0]));
        assert_eq!(run(&[5.0], |f| f.not()), Ok(vec![-6.0]));
    }

    #[test]
    fn operands_are_truncated() {
        assert_eq!(run(&[12.9, 10.2], |f| f.and()), Ok(vec![8.0]));
        assert_eq!(run(&[-1.5], |f| f.not()), Ok(vec![0.0]));
        assert_eq!(run(&[f64::INFINITY, 1.0], |f| f.or()), Err(ClacError::InvalidArgument));
    }

    #[test]
    fn reductions() {
        assert_eq!(run(&[7.0, 14.0, 6.0, 3.0], |f| f.and_n()), Ok(vec![6.0]));
        assert_eq!(run(&[1.0, 2.0, 4.0, 3.0], |f| f.or_n()), Ok(vec![7.0]));
        assert_eq!(run(&[1.0, 3.0, 7.0, 3.0], |f| f.xor_n()), Ok(vec![5.0]));
        assert_eq!(run(&[9.0, 1.0], |f| f.or_n()), Ok(vec![9.0]));
    }
}
