#![forbid(unsafe_code)]

//! Vector products over explicit stack slices.
//!
//! Vectors are entered component by component, so the second vector sits
//! on top with its last component in `x`.

use clac_numeric::NumericEngine;

use super::Arity;
use crate::engine::{CommandOutcome, Frame};
use crate::error::{ClacError, Result};

impl<E: NumericEngine> Frame<'_, E> {
    /// Dot product of two vectors of length `x`, stored below the length.
    pub fn dot(&mut self) -> Result<CommandOutcome> {
        let len = self.peek_arity()?;
        let span = len.checked_mul(2).ok_or(ClacError::OutOfRange)?;
        self.apply_span(1, span, |f, x| Ok(vec![f.dot_product(x)?]))
    }

    /// Dot product of two 3-vectors.
    pub fn dot3(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(6), |f, x| f.dot_product(x))
    }

    /// Cross product of two 3-vectors, pushed as three components.
    pub fn cross(&mut self) -> Result<CommandOutcome> {
        self.apply_multi(Arity::Fixed(6), |f, x| {
            let (a1, a2, a3) = (&x[5], &x[4], &x[3]);
            let (b1, b2, b3) = (&x[2], &x[1], &x[0]);
            Ok(vec![
                f.det2(a2, b3, a3, b2)?,
                f.det2(a3, b1, a1, b3)?,
                f.det2(a1, b2, a2, b1)?,
            ])
        })
    }

    /// `operands` holds both vectors top first; component `i` of one pairs
    /// with component `i` of the other at the same offset in each half.
    fn dot_product(&self, operands: &[E::Value]) -> Result<E::Value> {
        let (b, a) = operands.split_at(operands.len() / 2);
        a.iter().zip(b).rev().try_fold(self.int(0), |acc, (ai, bi)| {
            let product = self.binary(ai, "*", bi)?;
            self.binary(&acc, "+", &product)
        })
    }

    /// `p * q - r * s`.
    fn det2(&self, p: &E::Value, q: &E::Value, r: &E::Value, s: &E::Value) -> Result<E::Value> {
        let left = self.binary(p, "*", q)?;
        let right = self.binary(r, "*", s)?;
        self.binary(&left, "-", &right)
    }
}
