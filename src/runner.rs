//! A `Lox` session ties the passes together: scan → parse → resolve →
//! interpret, reporting every diagnostic to a [`Reporter`].
//!
//! One session keeps its interpreter (globals, resolution table) between
//! runs, which is what the REPL relies on.

use std::io::{self, Write};

use log::{debug, info};

use crate::diagnostic::Reporter;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::scan_tokens;

/// Outcome of one [`Lox::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    /// Lexical, syntax or resolution errors were reported; nothing ran.
    StaticError,
    /// Execution started and was aborted by a runtime error.
    RuntimeError,
}

impl RunStatus {
    /// Conventional process exit code (`sysexits.h`).
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Ok => 0,
            RunStatus::StaticError => 65,
            RunStatus::RuntimeError => 70,
        }
    }
}

pub struct Lox<W: Write = io::Stdout> {
    interpreter: Interpreter<W>,
    next_id: usize,
}

impl Lox<io::Stdout> {
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
            next_id: 0,
        }
    }
}

impl Default for Lox<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Lox<W> {
    /// Session printing to `out`, with `clock` and `sleep` installed.
    pub fn with_output(out: W) -> Self {
        Self {
            interpreter: Interpreter::with_output(out),
            next_id: 0,
        }
    }

    /// Session printing to `out` with no natives at all.
    pub fn bare(out: W) -> Self {
        Self {
            interpreter: Interpreter::bare(out),
            next_id: 0,
        }
    }

    /// Run one chunk of source.  Static errors are all reported and stop the
    /// run before execution; a runtime error stops only this run.
    pub fn run(&mut self, source: &str, reporter: &mut dyn Reporter) -> RunStatus {
        info!("Running {} bytes of source", source.len());

        let scanned = scan_tokens(source);

        let mut parser = Parser::new(scanned.value).with_first_id(self.next_id);
        let parsed = parser.parse();
        self.next_id = parser.next_id();

        let mut had_error = false;
        for error in scanned.errors.iter().chain(parsed.errors.iter()) {
            error.report_to(reporter);
            had_error = true;
        }

        if had_error {
            debug!("Static errors found, skipping resolution");
            return RunStatus::StaticError;
        }

        let statements = parsed.value;

        let resolved = Resolver::new().resolve(&statements);
        if resolved.has_errors() {
            for error in &resolved.errors {
                error.report_to(reporter);
            }
            return RunStatus::StaticError;
        }

        self.interpreter.install(resolved.value);

        match self.interpreter.interpret(&statements) {
            Ok(()) => RunStatus::Ok,
            Err(error) => {
                error.report_to(reporter);
                RunStatus::RuntimeError
            }
        }
    }

    /// Fresh globals and resolution table; natives stay.
    pub fn reset(&mut self) {
        self.interpreter.reset();
    }

    pub fn interpreter(&mut self) -> &mut Interpreter<W> {
        &mut self.interpreter
    }

    pub fn output(&self) -> &W {
        self.interpreter.output()
    }
}

impl Lox<Vec<u8>> {
    /// Everything printed since the last call, as text.
    pub fn take_printed(&mut self) -> String {
        String::from_utf8_lossy(&self.interpreter.take_output()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::CollectingReporter;

    #[test]
    fn definitions_persist_between_runs() {
        let mut lox = Lox::with_output(Vec::new());
        let mut reporter = CollectingReporter::new();

        assert_eq!(lox.run("var a = 1;", &mut reporter), RunStatus::Ok);
        assert_eq!(lox.run("print a + 1;", &mut reporter), RunStatus::Ok);
        assert_eq!(lox.take_printed(), "2\n");
    }

    #[test]
    fn static_errors_prevent_execution() {
        let mut lox = Lox::with_output(Vec::new());
        let mut reporter = CollectingReporter::new();

        let status = lox.run("print \"never\"; print ;", &mut reporter);

        assert_eq!(status, RunStatus::StaticError);
        assert_eq!(lox.take_printed(), "");
        assert_eq!(
            reporter.static_errors,
            vec!["[line 1] Error at ';': Expect expression."]
        );
    }

    #[test]
    fn exit_codes_follow_sysexits() {
        assert_eq!(RunStatus::StaticError.exit_code(), 65);
        assert_eq!(RunStatus::RuntimeError.exit_code(), 70);
    }
}
