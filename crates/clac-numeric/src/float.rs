#![forbid(unsafe_code)]

//! `f64` implementation of [`NumericEngine`].

use crate::{Constant, EvalError, NumericEngine};

const PHI: f64 = 1.618_033_988_749_895;

/// 2^63, the first `f64` past `i64::MAX` (which is itself not representable).
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Double-precision engine.
///
/// Non-finite results never escape. NaN is reported as a domain error. An
/// infinity computed from finite operands is an overflow for operations that
/// grow without bound (`exp`, `**`, products) and a domain error for
/// functions whose poles are domain boundaries (`log 0`, `atanh 1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatEngine;

impl FloatEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NumericEngine for FloatEngine {
    type Value = f64;

    fn parse(&self, text: &str) -> Result<f64, EvalError> {
        let text = text.trim();
        if let Some(n) = parse_integer(text) {
            return Ok(n as f64);
        }
        match text.parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(EvalError::parse(text)),
        }
    }

    fn unary(&self, op: &str, a: &f64) -> Result<f64, EvalError> {
        let a = *a;
        let out = match op {
            "-" => -a,
            "abs" => a.abs(),
            "sqrt" => a.sqrt(),
            "exp" => a.exp(),
            "log" => a.ln(),
            "sin" => a.sin(),
            "cos" => a.cos(),
            "tan" => a.tan(),
            "asin" => a.asin(),
            "acos" => a.acos(),
            "atan" => a.atan(),
            "sinh" => a.sinh(),
            "cosh" => a.cosh(),
            "tanh" => a.tanh(),
            "asinh" => a.asinh(),
            "acosh" => a.acosh(),
            "atanh" => a.atanh(),
            "floor" => a.floor(),
            "ceil" => a.ceil(),
            "trunc" => a.trunc(),
            _ => return Err(EvalError::unknown(op)),
        };
        checked(op, out, a.is_finite())
    }

    fn binary(&self, a: &f64, op: &str, b: &f64) -> Result<f64, EvalError> {
        let (a, b) = (*a, *b);
        let out = match op {
            "+" => a + b,
            "-" => a - b,
            "*" => a * b,
            "/" | "mod" if b == 0.0 => return Err(EvalError::DivisionByZero),
            "/" => a / b,
            // Truncated remainder: the result takes the sign of `a`.
            "mod" => a % b,
            "**" if a == 0.0 && b < 0.0 => return Err(EvalError::DivisionByZero),
            "**" => a.powf(b),
            "atan2" => a.atan2(b),
            "min" => a.min(b),
            "max" => a.max(b),
            "<" => truth(a < b),
            "==" => truth(a == b),
            _ => return Err(EvalError::unknown(op)),
        };
        checked(op, out, a.is_finite() && b.is_finite())
    }

    fn from_i64(&self, n: i64) -> f64 {
        n as f64
    }

    fn to_i64(&self, value: &f64) -> Option<i64> {
        let v = *value;
        if v.is_finite() && v.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&v) {
            Some(v as i64)
        } else {
            None
        }
    }

    fn is_true(&self, value: &f64) -> bool {
        *value != 0.0
    }

    fn constant(&self, constant: Constant) -> f64 {
        match constant {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
            Constant::Phi => PHI,
        }
    }
}

fn truth(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

fn checked(op: &str, out: f64, finite_inputs: bool) -> Result<f64, EvalError> {
    if out.is_nan() {
        return Err(EvalError::domain(op));
    }
    if out.is_infinite() && finite_inputs {
        let unbounded = matches!(op, "+" | "-" | "*" | "/" | "**" | "exp" | "sinh" | "cosh");
        return Err(if unbounded {
            EvalError::overflow(op)
        } else {
            EvalError::domain(op)
        });
    }
    Ok(out)
}

/// Integer literal with an optional sign and `0x`/`0o`/`0b` radix prefix.
fn parse_integer(text: &str) -> Option<i64> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        Some("0o" | "0O") => (8, &rest[2..]),
        Some("0b" | "0B") => (2, &rest[2..]),
        _ => (10, rest),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}
