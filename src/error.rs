/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors fail a run before any statement executes.
pub mod parse_error;
/// Language-level runtime errors.
///
/// Contains the errors the language itself defines: operator type mismatches,
/// division by zero, negative repetition counts, undefined symbols and
/// non-integer conditionals. These are reported through the diagnostic sink
/// and folded into error values; they never abort execution.
pub mod runtime_error;
/// Evaluator faults.
///
/// Contains the failures that are programming-contract violations rather than
/// script errors, plus output stream failures. A fault aborts evaluation.
pub mod fault;

pub use fault::Fault;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
