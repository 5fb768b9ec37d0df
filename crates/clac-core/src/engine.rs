#![forbid(unsafe_code)]

//! The calculator engine and its command transaction protocol.
//!
//! [`Clac`] owns a [`History`] of committed stacks and a working copy of the
//! stack at the history cursor. Every stateful command runs through
//! [`Clac::exec`]:
//!
//! ```text
//!   refresh working ← history.current()
//!          │
//!   command(&mut Frame)
//!          │
//!   ├─ Ok(Committed) → history.commit(working)
//!   ├─ Ok(Skipped)   → no history entry
//!   └─ Err(e)        → no history entry, e returned
//!          │
//!   refresh working ← history.current()
//! ```
//!
//! The final refresh doubles as the rollback: whatever a failed or skipped
//! command did to the working copy is discarded.

use clac_numeric::{Constant, FloatEngine, NumericEngine, guarded};

use crate::config::ClacConfig;
use crate::error::{ClacError, Result};
use crate::history::{CommitPolicy, History};
use crate::stack::Stack;

/// How a successful command affects the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The working stack became a new history entry.
    Committed,
    /// The command succeeded without recording a history entry.
    Skipped,
}

/// An RPN calculator: a working stack over an undo/redo history.
pub struct Clac<E: NumericEngine = FloatEngine> {
    engine: E,
    working: Stack<E::Value>,
    history: History<Stack<E::Value>>,
}

impl<E: NumericEngine> std::fmt::Debug for Clac<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clac")
            .field("working", &self.working)
            .field("history", &self.history)
            .finish()
    }
}

impl Clac<FloatEngine> {
    /// A calculator over `f64` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(FloatEngine)
    }
}

impl Default for Clac<FloatEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: NumericEngine> Clac<E> {
    #[must_use]
    pub fn with_engine(engine: E) -> Self {
        Self::with_config(engine, &ClacConfig::default())
    }

    #[must_use]
    pub fn with_config(engine: E, config: &ClacConfig) -> Self {
        Self {
            engine,
            working: Stack::new(),
            history: History::new(&config.history),
        }
    }

    // ====================================================================
    // Transaction protocol
    // ====================================================================

    /// Run `command` against the working stack with commit/rollback semantics.
    ///
    /// The working copy is refreshed from the history before and after the
    /// command. Only [`CommandOutcome::Committed`] produces a history entry;
    /// a skipped or failed command leaves the committed state untouched and
    /// an error is returned unchanged.
    pub fn exec<F>(&mut self, command: F) -> Result<CommandOutcome>
    where
        F: FnOnce(&mut Frame<'_, E>) -> Result<CommandOutcome>,
    {
        let span = tracing::debug_span!(
            "clac.exec",
            depth = tracing::field::Empty,
            outcome = tracing::field::Empty
        );
        let _guard = span.enter();

        self.refresh();
        let result = command(&mut Frame {
            engine: &self.engine,
            stack: &mut self.working,
        });
        match &result {
            Ok(CommandOutcome::Committed) => {
                self.history.commit(std::mem::take(&mut self.working));
            }
            Ok(CommandOutcome::Skipped) => {}
            Err(error) => tracing::debug!(%error, "command failed, rolling back"),
        }
        self.refresh();

        span.record("depth", self.working.len());
        span.record("outcome", tracing::field::debug(&result));
        result
    }

    /// Copy the snapshot at the history cursor into the working stack.
    fn refresh(&mut self) {
        self.working = Stack::clone(self.history.current());
    }

    // ====================================================================
    // History navigation
    // ====================================================================

    /// Step back to the previous committed stack.
    pub fn undo(&mut self) -> Result<CommandOutcome> {
        self.history.undo().ok_or(ClacError::NoMoreChanges)?;
        self.refresh();
        Ok(CommandOutcome::Skipped)
    }

    /// Step forward to the next committed stack.
    pub fn redo(&mut self) -> Result<CommandOutcome> {
        self.history.redo().ok_or(ClacError::NoMoreChanges)?;
        self.refresh();
        Ok(CommandOutcome::Skipped)
    }

    /// Discard all history and empty the stack.
    pub fn reset(&mut self) -> Result<CommandOutcome> {
        self.history.reset();
        self.refresh();
        tracing::debug!("calculator reset");
        Ok(CommandOutcome::Skipped)
    }

    /// Switch between retained and ephemeral commits.
    ///
    /// Disabling collapses the history to the current stack, so no stale
    /// undo or redo states stay reachable. Enabling keeps the current stack
    /// as the oldest undoable state.
    pub fn enable_history(&mut self, enabled: bool) {
        let policy = if enabled {
            CommitPolicy::Retain
        } else {
            let current = Stack::clone(self.history.current());
            self.history.collapse(current);
            CommitPolicy::Ephemeral
        };
        self.history.set_policy(policy);
        self.refresh();
    }

    // ====================================================================
    // Stack access
    // ====================================================================

    /// Push a value as its own committed command.
    pub fn push(&mut self, value: E::Value) -> Result<CommandOutcome> {
        self.exec(|frame| {
            frame.push(value);
            Ok(CommandOutcome::Committed)
        })
    }

    /// Pop the top value as its own committed command.
    pub fn pop(&mut self) -> Result<E::Value> {
        let mut popped = None;
        self.exec(|frame| {
            popped = Some(frame.pop()?);
            Ok(CommandOutcome::Committed)
        })?;
        popped.ok_or(ClacError::TooFewArguments)
    }

    /// Parse a literal through the engine.
    pub fn parse(&self, text: &str) -> Result<E::Value> {
        Ok(guarded("parse", || self.engine.parse(text))?)
    }

    /// The committed stack, top first.
    #[must_use]
    pub fn stack(&self) -> &[E::Value] {
        self.working.as_slice()
    }

    /// Number of values on the committed stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ====================================================================
    // History queries
    // ====================================================================

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history_enabled(&self) -> bool {
        self.history.policy() == CommitPolicy::Retain
    }
}

/// A command's view of the working stack and the numeric engine.
///
/// Operations in the library are methods on `Frame`; [`Clac`] exposes each
/// one as a command wrapped in [`Clac::exec`]. All engine calls made through
/// a frame pass the [`guarded`] fault boundary.
pub struct Frame<'a, E: NumericEngine> {
    engine: &'a E,
    stack: &'a mut Stack<E::Value>,
}

impl<'a, E: NumericEngine> Frame<'a, E> {
    /// A frame over a detached stack, for running operations outside `exec`.
    pub fn new(engine: &'a E, stack: &'a mut Stack<E::Value>) -> Self {
        Self { engine, stack }
    }

    #[must_use]
    pub fn stack(&self) -> &Stack<E::Value> {
        &*self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack<E::Value> {
        &mut *self.stack
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        self.engine
    }

    pub fn push(&mut self, value: E::Value) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Result<E::Value> {
        self.stack.pop()
    }

    /// Pop a position operand: truncated, and at least 0.
    pub fn pop_index(&mut self) -> Result<usize> {
        self.pop_int_min(0)
    }

    /// Pop a count operand: truncated, and at least 1.
    pub fn pop_count(&mut self) -> Result<usize> {
        self.pop_int_min(1)
    }

    fn pop_int_min(&mut self, min: i64) -> Result<usize> {
        let n = self.truncate(self.stack.peek(0)?)?;
        if n < min {
            return Err(ClacError::InvalidArgument);
        }
        let n = usize::try_from(n).map_err(|_| ClacError::InvalidArgument)?;
        self.stack.pop()?;
        Ok(n)
    }

    // ====================================================================
    // Engine access
    // ====================================================================

    pub fn unary(&self, op: &str, a: &E::Value) -> Result<E::Value> {
        Ok(guarded(op, || self.engine.unary(op, a))?)
    }

    pub fn binary(&self, a: &E::Value, op: &str, b: &E::Value) -> Result<E::Value> {
        Ok(guarded(op, || self.engine.binary(a, op, b))?)
    }

    pub fn int(&self, n: i64) -> E::Value {
        self.engine.from_i64(n)
    }

    pub fn constant(&self, constant: Constant) -> Result<E::Value> {
        Ok(guarded("constant", || Ok(self.engine.constant(constant)))?)
    }

    /// Round toward zero: `floor` for non-negative values, `ceil` for
    /// negative ones.
    pub fn trunc_value(&self, value: &E::Value) -> Result<E::Value> {
        let negative = self.binary(value, "<", &self.int(0))?;
        let op = if self.engine.is_true(&negative) {
            "ceil"
        } else {
            "floor"
        };
        self.unary(op, value)
    }

    /// Truncate toward zero and take the exact integer.
    ///
    /// Anything that does not yield an `i64` (non-finite, too large) is
    /// [`ClacError::InvalidArgument`].
    pub fn truncate(&self, value: &E::Value) -> Result<i64> {
        let whole = self
            .trunc_value(value)
            .map_err(|_| ClacError::InvalidArgument)?;
        self.engine.to_i64(&whole).ok_or(ClacError::InvalidArgument)
    }

    /// `a < b` under the engine's comparison.
    pub fn less(&self, a: &E::Value, b: &E::Value) -> Result<bool> {
        let lt = self.binary(a, "<", b)?;
        Ok(self.engine.is_true(&lt))
    }
}
