use crate::error::RuntimeError;

/// Receives runtime error reports from the evaluator.
///
/// Reporting is a side effect only: a sink may print, record or discard the
/// error, but it never alters control flow and must not fail. The evaluator
/// always proceeds to produce an error value after reporting, regardless of
/// what the sink does.
pub trait DiagnosticSink {
    /// Reports one runtime error at its point of detection.
    fn report(&mut self, error: &RuntimeError);
}

/// A sink that prints every report to standard error.
///
/// Used by the driver, so diagnostics never mix with program output on
/// standard out.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, error: &RuntimeError) {
        eprintln!("{error}");
    }
}

/// A sink that records every report, in order.
///
/// Lets tests assert on exactly which diagnostics a program emitted.
///
/// # Example
/// ```
/// use setlang::{
///     error::RuntimeError,
///     interpreter::diagnostics::{DiagnosticSink, RecordingSink},
/// };
///
/// let mut sink = RecordingSink::default();
/// sink.report(&RuntimeError::DivideByZero { line: 3 });
///
/// assert_eq!(sink.reports, vec![RuntimeError::DivideByZero { line: 3 }]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// The reported errors, oldest first.
    pub reports: Vec<RuntimeError>,
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, error: &RuntimeError) {
        self.reports.push(error.clone());
    }
}
