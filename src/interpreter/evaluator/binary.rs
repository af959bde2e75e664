use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Evaluates a binary arithmetic operation between two values.
    ///
    /// The decision table, first match wins:
    ///
    /// - `Add`: integer sum, or string concatenation; anything else is a
    ///   type mismatch.
    /// - `Sub`: integer difference only.
    /// - `Mul`: integer product; an integer and a string (either order)
    ///   repeat the string that many times, where a negative count is a
    ///   repetition error and zero yields the empty string; two strings are
    ///   a type mismatch.
    /// - `Div`: truncating integer quotient with an explicit zero-divisor
    ///   check. Division is defined only over integers: any other operand
    ///   pairing yields an error value with no diagnostic at all, unlike
    ///   the other operators.
    ///
    /// Integer arithmetic is two's-complement and wraps on overflow,
    /// including the minimum value divided by -1.
    ///
    /// An error-value operand falls into the mismatch arm of whichever
    /// operator consumes it, so it is reported there (or, for `Div`,
    /// propagates silently).
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value, or the `RuntimeError` for the caller to report.
    ///
    /// # Example
    /// ```
    /// use setlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(5);
    /// let right = Value::Str("ab".to_string());
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul, &left, &right, 1).unwrap();
    /// assert_eq!(result, Value::Str("ababababab".to_string()));
    /// ```
    ///
    /// # Errors
    /// Returns the runtime error the operands provoke, per the table above.
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> Result<Value, RuntimeError> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Str};

        match op {
            Add => match (left, right) {
                (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_add(*b))),
                (Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
                _ => Err(RuntimeError::TypeMismatch { op, line }),
            },

            Sub => match (left, right) {
                (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_sub(*b))),
                _ => Err(RuntimeError::TypeMismatch { op, line }),
            },

            Mul => match (left, right) {
                (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_mul(*b))),
                (Integer(count), Str(s)) | (Str(s), Integer(count)) => {
                    match usize::try_from(*count) {
                        Ok(count) => Ok(Str(s.repeat(count))),
                        Err(_) => Err(RuntimeError::NegativeRepetition { line }),
                    }
                },
                _ => Err(RuntimeError::TypeMismatch { op, line }),
            },

            Div => match (left, right) {
                (Integer(_), Integer(0)) => Err(RuntimeError::DivideByZero { line }),
                (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_div(*b))),
                // Division is defined only over integers; any other pairing
                // is treated as an already-erroneous value and no diagnostic
                // is emitted.
                _ => Ok(Value::default()),
            },
        }
    }
}
