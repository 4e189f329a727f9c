//! Diagnostic sinks.
//!
//! The core never decides how errors are shown; the driver hands every
//! [`LoxError`](crate::error::LoxError) to a [`Reporter`].

use log::debug;

/// Consumer of static and runtime diagnostics.
pub trait Reporter {
    /// A lexical, syntactic or resolution error.  `location` is either empty,
    /// `" at 'lexeme'"` or `" at end"`.
    fn report(&mut self, line: usize, location: &str, message: &str);

    /// An error that aborted execution.
    fn report_runtime_error(&mut self, message: &str, line: usize);
}

/// Writes diagnostics to standard error in the classic Lox format.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        debug!("Reporting static error on line {}", line);

        eprintln!("[line {}] Error{}: {}", line, location, message);
    }

    fn report_runtime_error(&mut self, message: &str, line: usize) {
        debug!("Reporting runtime error on line {}", line);

        eprintln!("{}\n[line {}]", message, line);
    }
}

/// Keeps every rendered diagnostic in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub static_errors: Vec<String>,
    pub runtime_errors: Vec<String>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.static_errors.is_empty() && self.runtime_errors.is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.static_errors
            .push(format!("[line {}] Error{}: {}", line, location, message));
    }

    fn report_runtime_error(&mut self, message: &str, line: usize) {
        self.runtime_errors
            .push(format!("{}\n[line {}]", message, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoxError;

    #[test]
    fn errors_are_routed_by_tier() {
        let mut sink = CollectingReporter::new();

        LoxError::lex(2, "Unexpected character: @").report_to(&mut sink);
        LoxError::runtime(4, "Undefined variable 'x'.").report_to(&mut sink);

        assert_eq!(
            sink.static_errors,
            vec!["[line 2] Error: Unexpected character: @"]
        );
        assert_eq!(sink.runtime_errors, vec!["Undefined variable 'x'.\n[line 4]"]);
    }
}
