#![forbid(unsafe_code)]

//! Factorials, combinations and permutations.
//!
//! Products are built by repeated multiplication through the engine, so an
//! exact engine gives exact results. Operands must be non-negative integers.

use clac_numeric::NumericEngine;

use super::Arity;
use crate::engine::{CommandOutcome, Frame};
use crate::error::{ClacError, Result};

impl<E: NumericEngine> Frame<'_, E> {
    /// `x!`
    pub fn factorial(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| {
            let n = f.natural(&x[0])?;
            f.falling_product(n, n)
        })
    }

    /// Number of ways to choose `x` items from `y`, ignoring order.
    pub fn comb(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| {
            let (n, k) = f.choice(x)?;
            let k = k.min(n - k);
            // After step i the accumulator holds C(n - k + i, i), always an integer.
            (1..=k).try_fold(f.int(1), |acc, i| {
                let scaled = f.binary(&acc, "*", &f.int(n - k + i))?;
                f.binary(&scaled, "/", &f.int(i))
            })
        })
    }

    /// Number of ordered selections of `x` items from `y`.
    pub fn perm(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| {
            let (n, k) = f.choice(x)?;
            f.falling_product(n, k)
        })
    }

    /// `n * (n - 1) * ... * (n - count + 1)`; 1 when `count` is 0.
    fn falling_product(&self, n: i64, count: i64) -> Result<E::Value> {
        (n - count + 1..=n).try_fold(self.int(1), |acc, k| self.binary(&acc, "*", &self.int(k)))
    }

    /// `(n, k)` from `y` and `x`, with `0 <= k <= n`.
    fn choice(&self, operands: &[E::Value]) -> Result<(i64, i64)> {
        let n = self.natural(&operands[1])?;
        let k = self.natural(&operands[0])?;
        if k > n {
            return Err(ClacError::InvalidArgument);
        }
        Ok((n, k))
    }

    fn natural(&self, value: &E::Value) -> Result<i64> {
        match self.engine().to_i64(value) {
            Some(n) if n >= 0 => Ok(n),
            _ => Err(ClacError::InvalidArgument),
        }
    }
}
