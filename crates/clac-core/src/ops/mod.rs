#![forbid(unsafe_code)]

//! Operation library.
//!
//! Operations are methods on [`Frame`]; [`Clac`] exposes each one as a
//! command of the same name that runs inside [`Clac::exec`]. Numeric
//! operations are built on a handful of combinators:
//!
//! - [`Frame::apply`] - take `arity` operands off the top, push one result
//! - [`Frame::apply_multi`] - same, pushing several results in order
//! - [`Frame::apply_int`] - operands truncated to `i64` before the kernel runs
//! - [`Frame::fold`] - left fold of a binary operator over operands
//!
//! Operand slices are top first: `operands[0]` is `x`, `operands[1]` is `y`.
//! The combinators read operands without removing them and touch the stack
//! only once every result is known, so a failing operation leaves the stack
//! exactly as it found it, including the count of a variadic operation.
//!
//! # Module Structure
//!
//! - `stack_ops`: drop, dup, pick, rotations, depth, clear
//! - `arith`: arithmetic, powers, roots, rounding
//! - `transcendental`: logarithms, trigonometry, angle and coordinate
//!   conversion, constants
//! - `bitwise`: and/or/xor/not on truncated integers
//! - `stats`: sum, average, min, max, magnitude
//! - `vector`: dot and cross products
//! - `combinatorics`: factorial, combinations, permutations

mod arith;
mod bitwise;
mod combinatorics;
mod stack_ops;
mod stats;
mod transcendental;
mod vector;

use clac_numeric::NumericEngine;

use crate::engine::{Clac, CommandOutcome, Frame};
use crate::error::{ClacError, Result};

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands.
    Fixed(usize),
    /// The top value is a count `n >= 1`; the `n` values below it are the
    /// operands and the count is consumed along with them.
    Variadic,
}

impl<E: NumericEngine> Frame<'_, E> {
    /// Replace `arity` operands with the single value `f` computes from them.
    pub fn apply<F>(&mut self, arity: Arity, f: F) -> Result<CommandOutcome>
    where
        F: FnOnce(&Self, &[E::Value]) -> Result<E::Value>,
    {
        self.apply_multi(arity, |frame, operands| Ok(vec![f(frame, operands)?]))
    }

    /// Replace `arity` operands with the values `f` computes from them,
    /// pushed in order so the last one ends on top.
    pub fn apply_multi<F>(&mut self, arity: Arity, f: F) -> Result<CommandOutcome>
    where
        F: FnOnce(&Self, &[E::Value]) -> Result<Vec<E::Value>>,
    {
        match arity {
            Arity::Fixed(count) => self.apply_span(0, count, f),
            Arity::Variadic => {
                let count = self.peek_arity()?;
                self.apply_span(1, count, f)
            }
        }
    }

    /// Like [`apply`](Self::apply), with every operand truncated toward zero
    /// to an `i64` first.
    pub fn apply_int<F>(&mut self, arity: Arity, f: F) -> Result<CommandOutcome>
    where
        F: FnOnce(&[i64]) -> Result<i64>,
    {
        self.apply(arity, |frame, operands| {
            let ints = operands
                .iter()
                .map(|v| frame.truncate(v))
                .collect::<Result<Vec<_>>>()?;
            Ok(frame.int(f(&ints)?))
        })
    }

    /// Fold `op` over `operands` in entry order (deepest first), starting
    /// from `init`. Stops at the first failure.
    pub fn fold(&self, init: E::Value, operands: &[E::Value], op: &str) -> Result<E::Value> {
        operands
            .iter()
            .rev()
            .try_fold(init, |acc, v| self.binary(&acc, op, v))
    }

    /// Operands are the `count` values below the top `skip`; all `skip +
    /// count` values are replaced by the results.
    pub(crate) fn apply_span<F>(&mut self, skip: usize, count: usize, f: F) -> Result<CommandOutcome>
    where
        F: FnOnce(&Self, &[E::Value]) -> Result<Vec<E::Value>>,
    {
        let operands = if count == 0 {
            Vec::new()
        } else {
            self.stack().peek_range(skip, count)?.to_vec()
        };
        let results = f(self, &operands)?;
        if skip + count > 0 {
            self.stack_mut().drop(0, skip + count)?;
        }
        for value in results {
            self.push(value);
        }
        Ok(CommandOutcome::Committed)
    }

    /// Decode the count on top of the stack without popping it.
    ///
    /// A non-integer count is [`ClacError::InvalidArgument`]; a count below
    /// one is [`ClacError::OutOfRange`].
    pub(crate) fn peek_arity(&self) -> Result<usize> {
        let n = self.truncate(self.stack().peek(0)?)?;
        if n < 1 {
            return Err(ClacError::OutOfRange);
        }
        usize::try_from(n).map_err(|_| ClacError::OutOfRange)
    }

    /// Run `f`, putting the stack back as it was if `f` fails.
    pub(crate) fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = self.stack().clone();
        let result = f(self);
        if result.is_err() {
            *self.stack_mut() = saved;
        }
        result
    }
}

/// Turn `Result<()>` from a stack primitive into a committed outcome.
fn committed(result: Result<()>) -> Result<CommandOutcome> {
    result.map(|()| CommandOutcome::Committed)
}

macro_rules! commands {
    ($($name:ident),* $(,)?) => {
        #[allow(clippy::should_implement_trait)]
        impl<E: NumericEngine> Clac<E> {
            $(
                #[doc = concat!("Run [`Frame::", stringify!($name), "`] as a command.")]
                pub fn $name(&mut self) -> Result<CommandOutcome> {
                    self.exec(|frame| frame.$name())
                }
            )*
        }
    };
}

commands! {
    // stack_ops
    clear, drop, drop_n, drop_r, dup, dup_n, dup_r, pick, swap,
    rot, rot_r, unrot, unrot_r, depth,
    // arith
    neg, abs, inv, add, sub, mul, div, modulo, int_div,
    pow, pow2, pow10, exp, sqrt, root, hypot, floor, ceil, trunc,
    // transcendental
    ln, lg, log, log_n, sin, cos, tan, asin, acos, atan, atan2,
    sinh, cosh, tanh, asinh, acosh, atanh,
    deg_to_rad, rad_to_deg, rect_to_polar, polar_to_rect, pi, e, phi,
    // bitwise
    and, or, xor, not, and_n, or_n, xor_n,
    // stats
    sum, avg, min, max, min_n, max_n, mag,
    // vector
    dot, dot3, cross,
    // combinatorics
    factorial, comb, perm,
}
