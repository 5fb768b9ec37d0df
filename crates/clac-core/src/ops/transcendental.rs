#![forbid(unsafe_code)]

//! Logarithms, trigonometry, coordinate conversion and named constants.
//!
//! Base-2, base-10 and base-`x` logarithms are quotients of natural logs, so
//! an engine only has to provide `log`.

use clac_numeric::{Constant, NumericEngine};

use super::Arity;
use crate::engine::{CommandOutcome, Frame};
use crate::error::Result;

impl<E: NumericEngine> Frame<'_, E> {
    // ====================================================================
    // Logarithms
    // ====================================================================

    pub fn ln(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary("log", &x[0]))
    }

    /// Base-2 logarithm.
    pub fn lg(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.log_base(&x[0], &f.int(2)))
    }

    /// Base-10 logarithm.
    pub fn log(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.log_base(&x[0], &f.int(10)))
    }

    /// Logarithm of `y` in base `x`.
    pub fn log_n(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.log_base(&x[1], &x[0]))
    }

    fn log_base(&self, value: &E::Value, base: &E::Value) -> Result<E::Value> {
        let num = self.unary("log", value)?;
        let den = self.unary("log", base)?;
        self.binary(&num, "/", &den)
    }

    // ====================================================================
    // Trigonometry
    // ====================================================================

    pub fn sin(&mut self) -> Result<CommandOutcome> {
        self.unary_op("sin")
    }

    pub fn cos(&mut self) -> Result<CommandOutcome> {
        self.unary_op("cos")
    }

    pub fn tan(&mut self) -> Result<CommandOutcome> {
        self.unary_op("tan")
    }

    pub fn asin(&mut self) -> Result<CommandOutcome> {
        self.unary_op("asin")
    }

    pub fn acos(&mut self) -> Result<CommandOutcome> {
        self.unary_op("acos")
    }

    pub fn atan(&mut self) -> Result<CommandOutcome> {
        self.unary_op("atan")
    }

    /// Angle of the point (`x`, `y`): `atan2(y, x)`.
    pub fn atan2(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(2), |f, x| f.binary(&x[1], "atan2", &x[0]))
    }

    pub fn sinh(&mut self) -> Result<CommandOutcome> {
        self.unary_op("sinh")
    }

    pub fn cosh(&mut self) -> Result<CommandOutcome> {
        self.unary_op("cosh")
    }

    pub fn tanh(&mut self) -> Result<CommandOutcome> {
        self.unary_op("tanh")
    }

    pub fn asinh(&mut self) -> Result<CommandOutcome> {
        self.unary_op("asinh")
    }

    pub fn acosh(&mut self) -> Result<CommandOutcome> {
        self.unary_op("acosh")
    }

    pub fn atanh(&mut self) -> Result<CommandOutcome> {
        self.unary_op("atanh")
    }

    fn unary_op(&mut self, op: &str) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| f.unary(op, &x[0]))
    }

    // ====================================================================
    // Conversion
    // ====================================================================

    pub fn deg_to_rad(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| {
            let scaled = f.binary(&x[0], "*", &f.constant(Constant::Pi)?)?;
            f.binary(&scaled, "/", &f.int(180))
        })
    }

    pub fn rad_to_deg(&mut self) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(1), |f, x| {
            let scaled = f.binary(&x[0], "*", &f.int(180))?;
            f.binary(&scaled, "/", &f.constant(Constant::Pi)?)
        })
    }

    /// Rectangular to polar. The point is entered `x` coordinate first, so
    /// it sits in `y` and the `y` coordinate in `x`. Leaves the radius below
    /// the angle.
    pub fn rect_to_polar(&mut self) -> Result<CommandOutcome> {
        self.apply_multi(Arity::Fixed(2), |f, x| {
            let r = f.unary("sqrt", &f.sum_of_squares(x)?)?;
            let theta = f.binary(&x[0], "atan2", &x[1])?;
            Ok(vec![r, theta])
        })
    }

    /// Polar to rectangular: radius in `y`, angle in `x`. Leaves the `x`
    /// coordinate below the `y` coordinate.
    pub fn polar_to_rect(&mut self) -> Result<CommandOutcome> {
        self.apply_multi(Arity::Fixed(2), |f, x| {
            let (r, theta) = (&x[1], &x[0]);
            let px = f.binary(r, "*", &f.unary("cos", theta)?)?;
            let py = f.binary(r, "*", &f.unary("sin", theta)?)?;
            Ok(vec![px, py])
        })
    }

    // ====================================================================
    // Constants
    // ====================================================================

    pub fn pi(&mut self) -> Result<CommandOutcome> {
        self.push_constant(Constant::Pi)
    }

    pub fn e(&mut self) -> Result<CommandOutcome> {
        self.push_constant(Constant::E)
    }

    /// The golden ratio.
    pub fn phi(&mut self) -> Result<CommandOutcome> {
        self.push_constant(Constant::Phi)
    }

    fn push_constant(&mut self, constant: Constant) -> Result<CommandOutcome> {
        self.apply(Arity::Fixed(0), |f, _| f.constant(constant))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

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

    fn assert_close(actual: Result<Vec<f64>>, expected: &[f64]) {
        let actual = actual.unwrap();
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn logarithms() {
        assert_close(run(&[E], |f| f.ln()), &[1.0]);
        assert_close(run(&[8.0], |f| f.lg()), &[3.0]);
        assert_close(run(&[1000.0], |f| f.log()), &[3.0]);
        assert_close(run(&[81.0, 3.0], |f| f.log_n()), &[4.0]);
    }

    #[test]
    fn logarithm_domain() {
        assert_eq!(run(&[0.0], |f| f.ln()), Err(ClacError::InvalidArgument));
        assert_eq!(run(&[-1.0], |f| f.lg()), Err(ClacError::InvalidArgument));
        assert_eq!(run(&[5.0, 1.0], |f| f.log_n()), Err(ClacError::InvalidArgument));
    }

    #[test]
    fn trigonometry() {
        assert_close(run(&[FRAC_PI_2], |f| f.sin()), &[1.0]);
        assert_close(run(&[0.0], |f| f.cos()), &[1.0]);
        assert_close(run(&[FRAC_PI_4], |f| f.tan()), &[1.0]);
        assert_close(run(&[1.0], |f| f.asin()), &[FRAC_PI_2]);
        assert_close(run(&[1.0], |f| f.atan()), &[FRAC_PI_4]);
        assert_close(run(&[1.0, 0.0], |f| f.atan2()), &[FRAC_PI_2]);
        assert_eq!(run(&[2.0], |f| f.acos()), Err(ClacError::InvalidArgument));
    }

    #[test]
    fn hyperbolic() {
        assert_close(run(&[0.0], |f| f.sinh()), &[0.0]);
        assert_close(run(&[0.0], |f| f.cosh()), &[1.0]);
        assert_close(run(&[0.0], |f| f.tanh()), &[0.0]);
        assert_close(run(&[0.0], |f| f.asinh()), &[0.0]);
        assert_close(run(&[1.0], |f| f.acosh()), &[0.0]);
        assert_close(run(&[0.5], |f| f.atanh()), &[0.5_f64.atanh()]);
        assert_eq!(run(&[1.0], |f| f.atanh()), Err(ClacError::InvalidArgument));
    }

    #[test]
    fn angle_conversion() {
        assert_close(run(&[180.0], |f| f.deg_to_rad()), &[PI]);
        assert_close(run(&[FRAC_PI_2], |f| f.rad_to_deg()), &[90.0]);
    }

    #[test]
    fn polar_round_trip() {
        // Point (3, 4): x coordinate entered first.
        let polar = run(&[3.0, 4.0], |f| f.rect_to_polar()).unwrap();
        assert_close(Ok(polar.clone()), &[4.0_f64.atan2(3.0), 5.0]);

        let bottom_first: Vec<f64> = polar.iter().rev().copied().collect();
        assert_close(run(&bottom_first, |f| f.polar_to_rect()), &[4.0, 3.0]);
    }

    #[test]
    fn constants_push_without_operands() {
        assert_eq!(run(&[], |f| f.pi()), Ok(vec![PI]));
        assert_eq!(run(&[1.0], |f| f.e()), Ok(vec![E, 1.0]));
        assert_close(run(&[], |f| f.phi()), &[(1.0 + 5.0_f64.sqrt()) / 2.0]);
    }
}
