#![forbid(unsafe_code)]

//! Arithmetic, powers, roots and rounding.

use clac_numeric::NumericEngine;

use super::Arity;
use crate::engine::{CommandOutcome, Frame};
use crate::error::{ClacError, Result};

impl<E: NumericEngine> Frame<'_, E> {
    pub fn neg(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("-", &x[0]))
    }

    pub fn abs(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("abs", &x[0]))
    }

    /// Reciprocal of `x`.
    pub fn inv(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.binary(&f.int(1), "/", &x[0]))
    }

    pub fn add(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "+", &x[0]))
    }

    pub fn sub(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "-", &x[0]))
    }

    pub fn mul(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "*", &x[0]))
    }

    /// `y / x`. Division by zero is [`ClacError::InvalidArgument`].
    pub fn div(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "/", &x[0]))
    }

    /// Remainder of `y / x`, with the sign of `y`.
    pub fn modulo(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "mod", &x[0]))
    }

    /// Integer quotient of `y / x` after truncating both, rounded toward zero.
    pub fn int_div(&mut self) -> Result<CommandOutcome> {
        self.apply_int(Arity::Fixed(2), |x| {
            if x[0] == 0 {
                return Err(ClacError::InvalidArgument);
            }
            x[1].checked_div(x[0]).ok_or(ClacError::OutOfRange)
        })
    }

    /// `y` raised to the `x`.
    pub fn pow(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "**", &x[0]))
    }

    pub fn pow2(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.binary(&f.int(2), "**", &x[0]))
    }

    pub fn pow10(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.binary(&f.int(10), "**", &x[0]))
    }

    pub fn exp(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("exp", &x[0]))
    }

    pub fn sqrt(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("sqrt", &x[0]))
    }

    /// The `x`-th root of `y`.
    pub fn root(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| {
            let exponent = f.binary(&f.int(1), "/", &x[0])?;
            f.binary(&x[1], "**", &exponent)
        })
    }

    /// `sqrt(y^2 + x^2)`.
    pub fn hypot(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.sum_of_squares(x).and_then(|s| f.unary("sqrt", &s)))
    }

    pub fn floor(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("floor", &x[0]))
    }

    pub fn ceil(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("ceil", &x[0]))
    }

    /// Round `x` toward zero.
    pub fn trunc(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.trunc_value(&x[0]))
    }

    pub(crate) fn sum_of_squares(&self, operands: &[E::Value]) -> Result<E::Value> {
        operands.iter().rev().try_fold(self.int(0), |acc, v| {
            let square = self.binary(v, "*", v)?;
            self.binary(&acc, "+", &square)
        })
    }
}
