//! `rox`: a tree‑walking interpreter for Lox.
//!
//! Source text flows through [`scanner`] → [`parser`] → [`resolver`] →
//! [`interpreter`]; [`runner::Lox`] drives the whole pipeline for a session.

pub mod diagnostic;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod object;
pub mod parser;
pub mod printer;
pub mod resolver;
pub mod runner;
pub mod scanner;
pub mod stack;
pub mod stmt;
pub mod token;
pub mod value;

pub use diagnostic::{CollectingReporter, Reporter, StderrReporter};
pub use error::{Diagnosed, LoxError, Result};
pub use interpreter::Interpreter;
pub use runner::{Lox, RunStatus};
pub use value::{NativeFunction, Value};
