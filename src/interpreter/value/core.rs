use crate::error::{Fault, RuntimeError};

/// Names the variant a [`Value`] currently holds.
///
/// Used in fault messages when a payload is extracted from the wrong
/// variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// The error variant.
    Error,
    /// The integer variant.
    Integer,
    /// The string variant.
    Str,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Error => "error",
            Self::Integer => "integer",
            Self::Str => "string",
        };
        write!(f, "{kind}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce: a signed integer,
/// a text string, or the error value that runtime errors evaluate to. Exactly
/// one variant is active at a time. Values are immutable and cheap to clone.
///
/// The error variant doubles as the unit result of statements; in that role
/// it carries no diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The error value, optionally carrying diagnostic text for display.
    ///
    /// Produced by runtime errors and by statements (which yield no usable
    /// value). Error values never render through program output; their only
    /// user-visible trace is the diagnostic sink.
    Error(Option<String>),
    /// An integer value (64 bit signed).
    Integer(i64),
    /// A text string value, possibly empty.
    Str(String),
}

impl Default for Value {
    /// The empty error value, used as the unit result of statements.
    fn default() -> Self {
        Self::Error(None)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&RuntimeError> for Value {
    /// Wraps a reported runtime error as an error value carrying its message.
    fn from(error: &RuntimeError) -> Self {
        Self::Error(Some(error.to_string()))
    }
}

impl Value {
    /// Names the variant this value currently holds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Error(_) => ValueKind::Error,
            Self::Integer(_) => ValueKind::Integer,
            Self::Str(_) => ValueKind::Str,
        }
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Str`](Self::Str).
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Returns `true` if the value is [`Error`](Self::Error).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Extracts the integer payload, or faults if the value is not an
    /// integer.
    ///
    /// Asking a non-integer value for its integer payload is a contract
    /// violation, not a language-level runtime error; the caller is expected
    /// to have checked the variant when graceful handling is wanted.
    ///
    /// # Errors
    /// Returns [`Fault::TypeMismatch`] when the value is not an integer.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_integer().unwrap(), 42);
    /// assert!(Value::Str("x".to_string()).as_integer().is_err());
    /// ```
    pub const fn as_integer(&self) -> Result<i64, Fault> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(Fault::TypeMismatch { expected: ValueKind::Integer,
                                           found:    self.kind(), }),
        }
    }

    /// Extracts the string payload, or faults if the value is not a string.
    ///
    /// # Errors
    /// Returns [`Fault::TypeMismatch`] when the value is not a string.
    pub fn as_str(&self) -> Result<&str, Fault> {
        match self {
            Self::Str(s) => Ok(s),
            _ => Err(Fault::TypeMismatch { expected: ValueKind::Str,
                                           found:    self.kind(), }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Error(Some(message)) => write!(f, "runtime error: {message}"),
            Self::Error(None) => write!(f, "runtime error"),
        }
    }
}
