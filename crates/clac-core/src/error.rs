#![forbid(unsafe_code)]

use clac_numeric::EvalError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClacError>;

/// Failure of a stack primitive or calculator command.
///
/// Every failure leaves the stack as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClacError {
    /// The command needs more operands than the stack holds.
    #[error("too few arguments")]
    TooFewArguments,

    /// An operand has the wrong shape: not an integer where one is needed,
    /// a negative count, a division by zero, an out-of-domain input.
    #[error("invalid argument")]
    InvalidArgument,

    /// A requested arity or a numeric result falls outside sensible bounds.
    #[error("argument out of range")]
    OutOfRange,

    /// Undo or redo past either end of the history.
    #[error("no more changes")]
    NoMoreChanges,

    /// Evaluation failure with no more specific kind.
    #[error("evaluation error: {0}")]
    Eval(EvalError),
}

impl From<EvalError> for ClacError {
    fn from(error: EvalError) -> Self {
        match error {
            EvalError::DivisionByZero | EvalError::Domain { .. } | EvalError::Parse { .. } => {
                Self::InvalidArgument
            }
            EvalError::Overflow { .. } => Self::OutOfRange,
            EvalError::UnknownOperator { .. } | EvalError::Fault { .. } => Self::Eval(error),
        }
    }
}
