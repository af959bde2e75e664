use thiserror::Error;

use crate::interpreter::value::core::ValueKind;

/// Represents a failure of the evaluator itself, as opposed to an error the
/// language defines.
///
/// Faults abort evaluation. They are kept separate from [`RuntimeError`]
/// deliberately: a runtime error is part of the language's semantics and the
/// program continues past it, while a fault means either the interpreter
/// broke a value-type contract or the host environment failed underneath it.
///
/// [`RuntimeError`]: crate::error::RuntimeError
#[derive(Debug, Error)]
pub enum Fault {
    /// A payload was extracted from the wrong value variant.
    #[error("value type contract violated: expected {expected}, found {found}")]
    TypeMismatch {
        /// The variant the caller asked for.
        expected: ValueKind,
        /// The variant actually held.
        found:    ValueKind,
    },
    /// Writing to the program output stream failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}
