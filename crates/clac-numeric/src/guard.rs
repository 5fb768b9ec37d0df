#![forbid(unsafe_code)]

//! Fault boundary around numeric engine calls.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::EvalError;

/// Run `f` and convert any panic it raises into [`EvalError::Fault`].
///
/// Every call from the calculator core into a [`NumericEngine`](crate::NumericEngine)
/// goes through here, so an engine bug surfaces as an ordinary error and the
/// stack stays untouched. This only works when the binary unwinds on panic
/// (`panic = "unwind"`, the default).
pub fn guarded<T>(op: &str, f: impl FnOnce() -> Result<T, EvalError>) -> Result<T, EvalError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(op, %message, "numeric engine panicked");
            Err(EvalError::Fault { message })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}
