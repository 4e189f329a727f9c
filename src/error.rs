//! Centralised error hierarchy for the **Lox interpreter**.
//!
//! All subsystems (scanner, parser, resolver, runtime, CLI) convert their
//! failure modes into one of the variants defined here.  Static passes do not
//! stop at the first problem: they accumulate errors and hand them back in a
//! [`Diagnosed`] alongside whatever they managed to produce.
//!
//! The module **does not** print diagnostics itself; see
//! [`crate::diagnostic`] for the sinks that do.

use std::io;
use thiserror::Error;

use log::info;

use crate::diagnostic::Reporter;

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoxError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error.  `location` is `" at 'x'"` or `" at end"`.
    #[error("[line {line}] Error{location}: {message}")]
    Parse {
        message: String,
        line: usize,
        location: String,
    },

    /// Static‑analysis failure found by the resolver.
    #[error("[line {line}] Error{location}: {message}")]
    Resolve {
        message: String,
        line: usize,
        location: String,
    },

    /// Runtime evaluation error (type, arity, undefined name, ...).
    #[error("{message}\n[line {line}]")]
    Runtime { message: String, line: usize },

    /// Division by zero.  Kept apart from [`LoxError::Runtime`] so hosts can
    /// special‑case it.
    #[error("{message}\n[line {line}]")]
    Arithmetic { message: String, line: usize },

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on I/O ops.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// UTF‑8 decoding failure when ingesting external text.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl LoxError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        LoxError::Lex { message, line }
    }

    /// Helper constructor for the **parser**.
    pub fn parse<S: Into<String>>(line: usize, location: String, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Parse error: line={}, location={:?}, msg={}",
            line, location, message
        );

        LoxError::Parse {
            message,
            line,
            location,
        }
    }

    /// Helper constructor for the **resolver**.
    pub fn resolve<S: Into<String>>(line: usize, location: String, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Resolve error: line={}, location={:?}, msg={}",
            line, location, message
        );

        LoxError::Resolve {
            message,
            line,
            location,
        }
    }

    /// Helper constructor for the **interpreter**.
    pub fn runtime<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Runtime error: line={}, msg={}", line, message);

        LoxError::Runtime { message, line }
    }

    /// Helper constructor for division by zero.
    pub fn arithmetic<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Arithmetic error: line={}, msg={}", line, message);

        LoxError::Arithmetic { message, line }
    }

    /// Lexical, syntactic or resolution error: the program must not run.
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            LoxError::Lex { .. } | LoxError::Parse { .. } | LoxError::Resolve { .. }
        )
    }

    /// Error raised while the program was executing.
    pub fn is_runtime(&self) -> bool {
        matches!(self, LoxError::Runtime { .. } | LoxError::Arithmetic { .. })
    }

    /// Source line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoxError::Lex { line, .. }
            | LoxError::Parse { line, .. }
            | LoxError::Resolve { line, .. }
            | LoxError::Runtime { line, .. }
            | LoxError::Arithmetic { line, .. } => Some(*line),
            LoxError::Io(_) | LoxError::Utf8(_) => None,
        }
    }

    /// The bare message, without line or location decoration.
    pub fn message(&self) -> String {
        match self {
            LoxError::Lex { message, .. }
            | LoxError::Parse { message, .. }
            | LoxError::Resolve { message, .. }
            | LoxError::Runtime { message, .. }
            | LoxError::Arithmetic { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Hand this error to the matching method of a diagnostic sink.
    pub fn report_to(&self, reporter: &mut dyn Reporter) {
        match self {
            LoxError::Lex { message, line } => reporter.report(*line, "", message),
            LoxError::Parse {
                message,
                line,
                location,
            }
            | LoxError::Resolve {
                message,
                line,
                location,
            } => reporter.report(*line, location, message),
            LoxError::Runtime { message, line } | LoxError::Arithmetic { message, line } => {
                reporter.report_runtime_error(message, *line)
            }
            LoxError::Io(_) | LoxError::Utf8(_) => reporter.report(0, "", &self.to_string()),
        }
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;

/// Output of a static pass: what it produced plus every error it reported.
///
/// A non‑empty `errors` means the program must not be executed, but `value`
/// still holds the partial result (e.g. the statements that did parse).
#[derive(Debug)]
pub struct Diagnosed<T> {
    pub value: T,
    pub errors: Vec<LoxError>,
}

impl<T> Diagnosed<T> {
    pub fn new(value: T, errors: Vec<LoxError>) -> Self {
        Self { value, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// `Ok(value)` when the pass was clean, otherwise every error it raised.
    pub fn into_result(self) -> std::result::Result<T, Vec<LoxError>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_errors_render_with_location() {
        let err = LoxError::parse(3, " at '='".to_string(), "Invalid assignment target.");
        assert_eq!(
            err.to_string(),
            "[line 3] Error at '=': Invalid assignment target."
        );
        assert!(err.is_static());
    }

    #[test]
    fn runtime_errors_render_line_last() {
        let err = LoxError::arithmetic(7, "Cannot divide by zero.");
        assert_eq!(err.to_string(), "Cannot divide by zero.\n[line 7]");
        assert!(err.is_runtime());
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn diagnosed_splits_on_errors() {
        let clean: Diagnosed<u8> = Diagnosed::new(1, Vec::new());
        assert_eq!(clean.into_result().ok(), Some(1));

        let dirty = Diagnosed::new(1, vec![LoxError::lex(1, "Unterminated string.")]);
        assert!(dirty.has_errors());
        assert_eq!(dirty.into_result().err().map(|e| e.len()), Some(1));
    }
}
