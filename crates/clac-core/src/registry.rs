#![forbid(unsafe_code)]

//! Name-to-command table for front ends.
//!
//! A [`Registry`] is an ordinary value owned by whatever reads user input.
//! The engine never consults it.
//!
//! ```rust,ignore
//! let registry = Registry::standard().with_history_commands();
//! let mut clac = Clac::new();
//! registry.evaluate(&mut clac, "3 4 + 2 x")?;
//! assert_eq!(clac.stack(), &[14.0]);
//! ```

use std::collections::HashMap;
use std::fmt;

use clac_numeric::{EvalError, NumericEngine};
use thiserror::Error;

use crate::engine::{Clac, CommandOutcome};
use crate::error::{ClacError, Result};

/// A named calculator command.
pub type Command<E> = fn(&mut Clac<E>) -> Result<CommandOutcome>;

/// Failure while evaluating a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A token resolved to a command (or a number to push) that failed.
    #[error("{token}: {source}")]
    Command { token: String, source: ClacError },

    /// A token is neither a number nor a known command.
    #[error("invalid input: {token:?}")]
    UnknownToken { token: String },
}

/// Commands by name, aliases included.
pub struct Registry<E: NumericEngine> {
    commands: HashMap<String, Command<E>>,
}

impl<E: NumericEngine> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.names())
            .finish()
    }
}

impl<E: NumericEngine> Default for Registry<E> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<E: NumericEngine> Registry<E> {
    /// A registry with no commands.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Every operation of the library under its usual names and aliases.
    #[must_use]
    pub fn standard() -> Self {
        let table: &[(&str, Command<E>)] = &[
            // arithmetic
            ("neg", Clac::neg),
            ("n", Clac::neg),
            ("abs", Clac::abs),
            ("a", Clac::abs),
            ("inv", Clac::inv),
            ("i", Clac::inv),
            ("+", Clac::add),
            ("-", Clac::sub),
            ("*", Clac::mul),
            ("x", Clac::mul),
            ("/", Clac::div),
            ("div", Clac::int_div),
            ("%", Clac::modulo),
            ("exp", Clac::exp),
            ("^", Clac::pow),
            ("2^", Clac::pow2),
            ("10^", Clac::pow10),
            ("sqrt", Clac::sqrt),
            ("root", Clac::root),
            ("hyp", Clac::hypot),
            ("floor", Clac::floor),
            ("ceil", Clac::ceil),
            ("trunc", Clac::trunc),
            // logarithms and trigonometry
            ("logn", Clac::log_n),
            ("ln", Clac::ln),
            ("log", Clac::log),
            ("lg", Clac::lg),
            ("sin", Clac::sin),
            ("cos", Clac::cos),
            ("tan", Clac::tan),
            ("asin", Clac::asin),
            ("acos", Clac::acos),
            ("atan", Clac::atan),
            ("atan2", Clac::atan2),
            ("sinh", Clac::sinh),
            ("cosh", Clac::cosh),
            ("tanh", Clac::tanh),
            ("asinh", Clac::asinh),
            ("acosh", Clac::acosh),
            ("atanh", Clac::atanh),
            ("dtor", Clac::deg_to_rad),
            ("rtod", Clac::rad_to_deg),
            ("rtop", Clac::rect_to_polar),
            ("ptor", Clac::polar_to_rect),
            // combinatorics
            ("!", Clac::factorial),
            ("comb", Clac::comb),
            ("perm", Clac::perm),
            // bitwise
            ("and", Clac::and),
            ("or", Clac::or),
            ("xor", Clac::xor),
            ("not", Clac::not),
            ("andn", Clac::and_n),
            ("orn", Clac::or_n),
            ("xorn", Clac::xor_n),
            // reductions
            ("sum", Clac::sum),
            ("avg", Clac::avg),
            ("min", Clac::min),
            ("max", Clac::max),
            ("minn", Clac::min_n),
            ("maxn", Clac::max_n),
            ("mag", Clac::mag),
            ("dot", Clac::dot),
            ("dot3", Clac::dot3),
            ("cross", Clac::cross),
            // stack
            ("drop", Clac::drop),
            ("k", Clac::drop),
            ("dropn", Clac::drop_n),
            ("dropr", Clac::drop_r),
            ("dup", Clac::dup),
            ("d", Clac::dup),
            ("dupn", Clac::dup_n),
            ("dupr", Clac::dup_r),
            ("pick", Clac::pick),
            ("p", Clac::pick),
            ("swap", Clac::swap),
            ("s", Clac::swap),
            ("depth", Clac::depth),
            ("rot", Clac::rot),
            ("rotr", Clac::rot_r),
            ("unrot", Clac::unrot),
            ("unrotr", Clac::unrot_r),
            ("clear", Clac::clear),
            ("c", Clac::clear),
            // constants
            ("pi", Clac::pi),
            ("e", Clac::e),
            ("phi", Clac::phi),
        ];
        let mut registry = Self::empty();
        for &(name, command) in table {
            registry.insert(name, command);
        }
        registry
    }

    /// Add `undo`/`u`, `redo`/`r` and `reset` for interactive use.
    #[must_use]
    pub fn with_history_commands(mut self) -> Self {
        self.insert("undo", Clac::undo);
        self.insert("u", Clac::undo);
        self.insert("redo", Clac::redo);
        self.insert("r", Clac::redo);
        self.insert("reset", Clac::reset);
        self
    }

    /// Register `command` under `name`, returning any command it replaces.
    pub fn insert(&mut self, name: impl Into<String>, command: Command<E>) -> Option<Command<E>> {
        self.commands.insert(name.into(), command)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Command<E>> {
        self.commands.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Evaluate whitespace-separated tokens left to right.
    ///
    /// A token that parses as a number is pushed; anything else must name a
    /// command. Each token is its own command, so everything before a
    /// failing token stays committed. Failures are reported under the token
    /// that caused them, number tokens included.
    pub fn evaluate(&self, clac: &mut Clac<E>, input: &str) -> std::result::Result<(), RegistryError> {
        for token in input.split_whitespace() {
            tracing::trace!(token, "evaluating token");
            let outcome = match clac.parse(token) {
                Ok(value) => clac.push(value),
                // A faulting engine is not a "not a number" answer.
                Err(fault @ ClacError::Eval(EvalError::Fault { .. })) => Err(fault),
                Err(_) => match self.get(token) {
                    Some(command) => command(clac),
                    None => {
                        return Err(RegistryError::UnknownToken {
                            token: token.to_owned(),
                        });
                    }
                },
            };
            outcome.map_err(|source| RegistryError::Command {
                token: token.to_owned(),
                source,
            })?;
        }
        Ok(())
    }
}
