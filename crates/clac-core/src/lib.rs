#![forbid(unsafe_code)]

//! clac core
//!
//! The evaluation core of an RPN calculator: a position-addressed value
//! stack, a linear undo/redo history of stack snapshots, and a command
//! engine that runs every stateful operation as a transaction against that
//! history.
//!
//! # Key Components
//!
//! - [`Stack`] - top-first value stack with range-checked primitives
//! - [`History`] - cursor-addressed snapshots with retain/ephemeral commits
//! - [`Clac`] - the engine; [`Clac::exec`] is the transaction protocol
//! - [`Frame`] - a command's view of the working stack; the operation
//!   library lives here as methods
//! - [`Arity`] - fixed or count-on-stack operand arity
//! - [`Registry`] - command names for front ends
//! - [`ClacConfig`] - TOML configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use clac_core::{Clac, ClacError};
//!
//! let mut clac = Clac::new();
//! clac.push(10.0)?;
//! clac.push(2.0)?;
//! clac.div()?;
//! assert_eq!(clac.stack(), &[5.0]);
//!
//! clac.push(0.0)?;
//! assert_eq!(clac.div(), Err(ClacError::InvalidArgument));
//! assert_eq!(clac.stack(), &[0.0, 5.0]);
//!
//! clac.undo()?;
//! assert_eq!(clac.stack(), &[5.0]);
//! ```
//!
//! # Role of the numeric engine
//! Arithmetic is delegated to a [`NumericEngine`] from `clac-numeric`.
//! The core only moves values around, decodes counts and positions, and
//! decides what becomes an undoable state.

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod ops;
pub mod registry;
pub mod stack;

pub use config::{ClacConfig, ConfigError};
pub use engine::{Clac, CommandOutcome, Frame};
pub use error::{ClacError, Result};
pub use history::{CommitPolicy, History, HistoryConfig};
pub use ops::Arity;
pub use registry::{Command, Registry, RegistryError};
pub use stack::{Boundary, Rotation, Stack};

pub use clac_numeric::{Constant, EvalError, FloatEngine, NumericEngine};
