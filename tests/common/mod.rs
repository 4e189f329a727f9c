#![allow(dead_code)]

use rox::diagnostic::CollectingReporter;
use rox::runner::{Lox, RunStatus};

/// Everything a run produced: printed text, diagnostics and the status.
pub struct Outcome {
    pub printed: String,
    pub reporter: CollectingReporter,
    pub status: RunStatus,
}

/// Run `source` in a fresh session that prints into memory.
pub fn run(source: &str) -> Outcome {
    let mut lox = Lox::with_output(Vec::new());
    let mut reporter = CollectingReporter::new();

    let status = lox.run(source, &mut reporter);

    Outcome {
        printed: lox.take_printed(),
        reporter,
        status,
    }
}

/// Printed output of a program expected to run cleanly.
pub fn output(source: &str) -> String {
    let outcome = run(source);
    assert_eq!(
        outcome.status,
        RunStatus::Ok,
        "diagnostics: {:?}",
        outcome.reporter
    );
    outcome.printed
}

/// The only static error a program reports.
pub fn static_error(source: &str) -> String {
    let outcome = run(source);
    assert_eq!(outcome.status, RunStatus::StaticError);
    assert_eq!(outcome.reporter.static_errors.len(), 1, "{:?}", outcome.reporter);
    outcome.reporter.static_errors[0].clone()
}

/// The runtime error a program stops with.
pub fn runtime_error(source: &str) -> String {
    let outcome = run(source);
    assert_eq!(outcome.status, RunStatus::RuntimeError, "{:?}", outcome.reporter);
    outcome.reporter.runtime_errors[0].clone()
}
