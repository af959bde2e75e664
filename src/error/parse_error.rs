use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Parse error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Parse error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was expected but something else was found.
    #[error("Parse error on line {line}: Expected {expected}, found {found}.")]
    ExpectedToken {
        /// What the parser expected (e.g. `';'` or `'then'`).
        expected: String,
        /// What was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An identifier was expected but something else was found.
    #[error("Parse error on line {line}: Expected identifier, found {found}.")]
    ExpectedIdentifier {
        /// What was actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A control-flow statement has no body statements.
    #[error("Parse error on line {line}: Expected at least one statement before 'end'.")]
    EmptyBody {
        /// The source line where the error occurred.
        line: usize,
    },
}
