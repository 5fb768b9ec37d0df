#![forbid(unsafe_code)]

//! Sums, averages and extrema, pairwise and over a counted range.

use clac_numeric::NumericEngine;

use super::Arity;
use crate::engine::{CommandOutcome, Frame};
use crate::error::{ClacError, Result};

impl<E: NumericEngine> Frame<'_, E> {
    /// Sum of the `x` values below the count.
    pub fn sum(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Variadic, |f, x| f.fold(f.int(0), x, "+"))
    }

    /// Arithmetic mean of the `x` values below the count.
    pub fn avg(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Variadic, |f, x| {
            let total = f.fold(f.int(0), x, "+")?;
            let n = i64::try_from(x.len()).map_err(|_| ClacError::OutOfRange)?;
            f.binary(&total, "/", &f.int(n))
        })
    }

    pub fn min(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.extremum(x, false))
    }

    pub fn max(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.extremum(x, true))
    }

    pub fn min_n(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Variadic, |f, x| f.extremum(x, false))
    }

    pub fn max_n(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Variadic, |f, x| f.extremum(x, true))
    }

    /// Euclidean norm of the `x` values below the count.
    pub fn mag(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Variadic, |f, x| {
            let squares = f.sum_of_squares(x)?;
            f.unary("sqrt", &squares)
        })
    }

    /// Smallest (or largest) operand, compared with the engine's `<`.
    fn extremum(&self, operands: &[E::Value], largest: bool) -> Result<E::Value> {
        let mut values = operands.iter().rev();
        let first = values.next().ok_or(ClacError::TooFewArguments)?;
        values
            .try_fold(first, |best, v| {
                let replace = if largest {
                    self.less(best, v)?
                } else {
                    self.less(v, best)?
                };
                Ok::<_, ClacError>(if replace { v } else { best })
            })
            .cloned()
    }
}
