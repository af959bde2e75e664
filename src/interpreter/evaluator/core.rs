use std::{collections::HashMap, io::Write};

use crate::{
    ast::ParseTree,
    error::{Fault, RuntimeError},
    interpreter::{diagnostics::DiagnosticSink, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a [`Fault`]
/// describing why the evaluator itself had to stop. Language-level runtime
/// errors are never carried here; they flow through the diagnostic sink and
/// come back as [`Value::Error`].
pub type EvalResult<T> = Result<T, Fault>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment (one
/// flat namespace for the whole program), the program output stream, and the
/// diagnostic sink runtime errors are reported to.
///
/// ## Usage
///
/// A `Context` is created once per program run and dropped afterwards,
/// discarding the environment with it.
///
/// ```
/// use setlang::{
///     interpreter::{diagnostics::RecordingSink, evaluator::core::Context},
///     parse_source,
/// };
///
/// let tree = parse_source("set x 2 + 3;").unwrap().unwrap();
///
/// let mut out = Vec::new();
/// let mut diagnostics = RecordingSink::default();
/// let mut context = Context::new(&mut out, &mut diagnostics);
///
/// context.eval(&tree).unwrap();
/// assert!(diagnostics.reports.is_empty());
/// ```
pub struct Context<'io> {
    env:         HashMap<String, Value>,
    out:         &'io mut dyn Write,
    diagnostics: &'io mut dyn DiagnosticSink,
}

impl<'io> Context<'io> {
    /// Creates a new evaluation context with an empty environment, writing
    /// program output to `out` and runtime error reports to `diagnostics`.
    pub fn new(out: &'io mut dyn Write, diagnostics: &'io mut dyn DiagnosticSink) -> Self {
        Self { env: HashMap::new(),
               out,
               diagnostics }
    }

    /// Evaluates a tree node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node kind and recurses depth first, left child first; each node
    /// evaluates its children and combines their values. Statements evaluate
    /// to the unit error value, which their parent does not otherwise use.
    ///
    /// Runtime errors the language defines (type mismatches, divide by zero,
    /// undefined symbols, ...) are reported through the diagnostic sink and
    /// returned as [`Value::Error`]; evaluation of the rest of the program
    /// continues normally.
    ///
    /// # Parameters
    /// - `node`: Root of the subtree to evaluate.
    ///
    /// # Returns
    /// The value the subtree evaluates to.
    ///
    /// # Errors
    /// Returns a [`Fault`] if a value-type contract is violated (a loop
    /// condition that is not an integer) or if writing program output fails.
    /// Faults abort evaluation; runtime errors do not.
    pub fn eval(&mut self, node: &ParseTree) -> EvalResult<Value> {
        match node {
            ParseTree::StmtList { first, rest, .. } => {
                self.eval(first)?;
                if let Some(rest) = rest {
                    self.eval(rest)?;
                }
                Ok(Value::default())
            },

            ParseTree::If { condition, body, line } => self.eval_if(condition, body, *line),

            ParseTree::Set { name, expr, .. } => {
                let value = self.eval(expr)?;
                self.env.insert(name.clone(), value);
                Ok(Value::default())
            },

            ParseTree::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.eval_print(&value)?;
                Ok(Value::default())
            },

            ParseTree::Loop { condition, body, .. } => {
                // The loop reads its condition as an integer unconditionally;
                // a non-integer condition is a fault, not a reported runtime
                // error like the conditional's.
                while self.eval(condition)?.as_integer()? != 0 {
                    self.eval(body)?;
                }
                Ok(Value::default())
            },

            ParseTree::BinaryOp { op, left, right, line } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                match Self::eval_binary(*op, &lhs, &rhs, *line) {
                    Ok(value) => Ok(value),
                    Err(error) => Ok(self.report(&error)),
                }
            },

            ParseTree::IntConst { value, .. } => Ok(Value::Integer(*value)),
            ParseTree::StrConst { value, .. } => Ok(Value::Str(value.clone())),

            ParseTree::Ident { name, line } => self.eval_ident(name, *line),
        }
    }

    /// Evaluates a conditional statement.
    ///
    /// The body runs only when the condition is a nonzero integer. A zero
    /// integer skips the body silently; a non-integer condition is reported
    /// as a runtime error and also skips the body.
    fn eval_if(&mut self, condition: &ParseTree, body: &ParseTree, line: usize)
               -> EvalResult<Value> {
        match self.eval(condition)? {
            Value::Integer(n) if n != 0 => self.eval(body),
            Value::Integer(_) => Ok(Value::default()),
            _ => Ok(self.report(&RuntimeError::NonIntegerConditional { line })),
        }
    }

    /// Writes a value to the program output stream.
    ///
    /// Integers render in decimal, strings verbatim, and error values write
    /// nothing at all: the only user-visible trace of a runtime error is the
    /// diagnostic sink.
    fn eval_print(&mut self, value: &Value) -> EvalResult<()> {
        match value {
            Value::Integer(n) => write!(self.out, "{n}")?,
            Value::Str(s) => write!(self.out, "{s}")?,
            Value::Error(_) => {},
        }
        Ok(())
    }

    /// Looks up a variable by name.
    ///
    /// If the variable was never assigned, an undefined-symbol error is
    /// reported and an error value returned.
    fn eval_ident(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        match self.env.get(name) {
            Some(value) => Ok(value.clone()),
            None => Ok(self.report(&RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                                    line })),
        }
    }

    /// Reports a runtime error through the diagnostic sink and wraps it as
    /// the error value the enclosing expression receives.
    ///
    /// The sink is a side channel only; after reporting, evaluation always
    /// proceeds with the returned value.
    fn report(&mut self, error: &RuntimeError) -> Value {
        self.diagnostics.report(error);
        Value::from(error)
    }

    /// Retrieves a variable from the environment.
    ///
    /// Returns `None` if the variable was never assigned.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::{
    ///     diagnostics::RecordingSink,
    ///     evaluator::core::Context,
    ///     value::core::Value,
    /// };
    ///
    /// let mut out = Vec::new();
    /// let mut diagnostics = RecordingSink::default();
    /// let mut context = Context::new(&mut out, &mut diagnostics);
    ///
    /// context.set_variable("x".to_string(), Value::Integer(5));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }

    /// Binds a variable in the environment, overwriting any prior binding.
    pub fn set_variable(&mut self, name: String, value: Value) {
        self.env.insert(name, value);
    }
}
