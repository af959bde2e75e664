//! # setlang
//!
//! setlang is a tree-walking interpreter for a minimal imperative scripting
//! language with integer and string values, written in Rust. Programs are
//! sequences of `set`, `print`, `if` and `loop` statements over a single
//! global namespace; runtime errors are reported as diagnostics and folded
//! into error values, and the program keeps running past them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use logos::Logos;

use crate::{
    ast::ParseTree,
    error::ParseError,
    interpreter::{
        diagnostics::StderrSink,
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::statement::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `ParseTree` enum representing the syntactic
/// structure of source code as a tree, built by the parser and walked by the
/// evaluator, together with the pure tree-shape queries (node, leaf and
/// category counts, maximum depth) used by external tooling.
pub mod ast;
/// Provides the error types of the crate.
///
/// Three kinds are kept deliberately distinct: parse errors (fail the run
/// before execution), language-level runtime errors (reported as diagnostics,
/// execution continues), and evaluator faults (contract violations that abort
/// the run).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value type and
/// the diagnostic sink to provide a complete runtime for source code
/// execution.
pub mod interpreter;

/// Tokenizes a source string into `(Token, line)` pairs.
///
/// Comments and whitespace are skipped; line numbers start at 1.
///
/// # Errors
/// Returns a `ParseError` for any character sequence the lexer does not
/// recognize.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Lexes and parses a source string into a program tree.
///
/// # Returns
/// - `Ok(Some(tree))`: The root of the program tree, a statement-list chain.
/// - `Ok(None)`: If the source contained no statements.
///
/// # Errors
/// Returns a `ParseError` if lexing or parsing fails.
///
/// # Examples
/// ```
/// use setlang::parse_source;
///
/// let tree = parse_source("set x 5; print x;").unwrap().unwrap();
/// assert_eq!(tree.node_count(), 7);
///
/// assert!(parse_source("").unwrap().is_none());
/// ```
pub fn parse_source(source: &str) -> Result<Option<ParseTree>, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses and executes a whole program.
///
/// This is the driver entry point: the source is lexed and parsed, then the
/// resulting tree is evaluated once against a fresh, empty environment.
/// Program output goes to standard out and runtime error diagnostics to
/// standard error.
///
/// Runtime errors do not fail the run; the program continues past them and
/// this function still returns `Ok(())`.
///
/// # Errors
/// Returns an error if parsing fails, if evaluation faults, or if writing
/// output fails.
///
/// # Examples
/// ```
/// use setlang::run_program;
///
/// // The full program runs; the result is printed to standard out.
/// assert!(run_program("set x 5; set y \"ab\"; print y * x;").is_ok());
///
/// // A malformed program fails before execution.
/// assert!(run_program("set 5 x;").is_err());
/// ```
pub fn run_program(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(tree) = parse_source(source)? {
        let mut out = std::io::stdout();
        let mut diagnostics = StderrSink;

        let mut context = Context::new(&mut out, &mut diagnostics);
        context.eval(&tree)?;
        out.flush()?;
    }

    Ok(())
}
