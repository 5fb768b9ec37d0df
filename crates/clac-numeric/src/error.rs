#![forbid(unsafe_code)]

use thiserror::Error;

/// Failure reported by a [`NumericEngine`](crate::NumericEngine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{op}: argument outside the function's domain")]
    Domain { op: String },

    #[error("{op}: result overflows")]
    Overflow { op: String },

    #[error("cannot parse {text:?} as a number")]
    Parse { text: String },

    #[error("unknown operator {op:?}")]
    UnknownOperator { op: String },

    #[error("evaluation fault: {message}")]
    Fault { message: String },
}

impl EvalError {
    #[must_use]
    pub fn domain(op: impl Into<String>) -> Self {
        Self::Domain { op: op.into() }
    }

    #[must_use]
    pub fn overflow(op: impl Into<String>) -> Self {
        Self::Overflow { op: op.into() }
    }

    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        Self::Parse { text: text.into() }
    }

    #[must_use]
    pub fn unknown(op: impl Into<String>) -> Self {
        Self::UnknownOperator { op: op.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::EvalError;

    #[test]
    fn messages_name_the_operator() {
        assert_eq!(
            EvalError::domain("sqrt").to_string(),
            "sqrt: argument outside the function's domain"
        );
        assert_eq!(EvalError::overflow("exp").to_string(), "exp: result overflows");
        assert_eq!(
            EvalError::unknown("frob").to_string(),
            "unknown operator \"frob\""
        );
    }

    #[test]
    fn parse_error_quotes_input() {
        assert_eq!(
            EvalError::parse("1.2.3").to_string(),
            "cannot parse \"1.2.3\" as a number"
        );
    }
}
