use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents the runtime errors the language defines.
///
/// These are detected by operator and statement logic during evaluation. They
/// are recoverable by design: each one is reported once through the
/// diagnostic sink at the point of detection, the surrounding expression
/// receives an error value, and the program keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The operand kinds do not fit any rule of the operator.
    #[error("Runtime error on line {line}: Type mismatch for arguments of '{op}'.")]
    TypeMismatch {
        /// The operator that rejected its operands.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// String repetition with a negative count.
    #[error("Runtime error on line {line}: Repetition count less than 0.")]
    NegativeRepetition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer division with a zero divisor.
    #[error("Runtime error on line {line}: Divide by zero.")]
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable was read before ever being assigned.
    #[error("Runtime error on line {line}: Symbol '{name}' is not defined.")]
    UndefinedSymbol {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A conditional's condition evaluated to a non-integer value.
    #[error("Runtime error on line {line}: Conditional expression is not an integer.")]
    NonIntegerConditional {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line number the error was detected on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::NegativeRepetition { line }
            | Self::DivideByZero { line }
            | Self::UndefinedSymbol { line, .. }
            | Self::NonIntegerConditional { line } => *line,
        }
    }
}
