#![forbid(unsafe_code)]

//! Numeric evaluation boundary for clac.
//!
//! The calculator core never does arithmetic itself. It hands opaque values
//! to a [`NumericEngine`], which evaluates named unary and binary operators
//! and reports failures as typed [`EvalError`]s.
//!
//! # Key Components
//!
//! - [`NumericEngine`] - the collaborator contract (parse, unary, binary)
//! - [`FloatEngine`] - default engine over `f64`
//! - [`guarded`] - fault boundary that turns panics into [`EvalError::Fault`]
//!
//! # Operator names
//!
//! Operators are plain strings so that engines with a richer vocabulary
//! (arbitrary precision, rationals) can sit behind the same trait. Engines
//! answer [`EvalError::UnknownOperator`] for names they do not implement.

mod error;
mod float;
mod guard;

pub use error::EvalError;
pub use float::FloatEngine;
pub use guard::guarded;

use std::fmt;

/// Named constants an engine keeps precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Ratio of a circle's circumference to its diameter.
    Pi,
    /// Base of the natural logarithm.
    E,
    /// The golden ratio.
    Phi,
}

/// Evaluator for the scalar values held on a clac stack.
///
/// Implementations must report failures through [`EvalError`] rather than
/// panicking. Callers still wrap every call in [`guarded`], so a panic
/// becomes an [`EvalError::Fault`] instead of unwinding into the stack.
pub trait NumericEngine {
    /// Scalar value type. Values are immutable and cheap to clone.
    type Value: Clone + fmt::Debug + PartialEq;

    /// Parse a numeric literal.
    fn parse(&self, text: &str) -> Result<Self::Value, EvalError>;

    /// Apply a unary operator to `a`.
    fn unary(&self, op: &str, a: &Self::Value) -> Result<Self::Value, EvalError>;

    /// Apply a binary operator as `a op b`.
    fn binary(&self, a: &Self::Value, op: &str, b: &Self::Value)
    -> Result<Self::Value, EvalError>;

    /// Lift an integer into a value.
    fn from_i64(&self, n: i64) -> Self::Value;

    /// Exact integer view of `value`.
    ///
    /// Returns `None` when the value is not integral, not finite, or does
    /// not fit in an `i64`. Callers that want truncation apply `floor` or
    /// `ceil` first.
    fn to_i64(&self, value: &Self::Value) -> Option<i64>;

    /// Truth test: zero is false, everything else is true.
    fn is_true(&self, value: &Self::Value) -> bool;

    /// A precomputed named constant.
    fn constant(&self, constant: Constant) -> Self::Value;
}
