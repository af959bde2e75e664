/// The diagnostics module carries runtime errors out of the evaluator.
///
/// Runtime errors in this language are side-channel events: they are reported
/// once where they are detected and execution continues with an error value.
/// This module defines the sink abstraction those reports flow through, plus
/// the stderr sink used by the driver and a recording sink for tests.
///
/// # Responsibilities
/// - Defines the `DiagnosticSink` trait consumed by the evaluator.
/// - Guarantees reporting is side-effect only and never alters control flow.
pub mod diagnostics;
/// The evaluator module executes tree nodes and computes results.
///
/// The evaluator walks the program tree depth first, evaluates each node's
/// children and combines their values, manages variable state, and writes
/// program output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every node kind with an exhaustive dispatch.
/// - Applies the operator decision table over value kinds.
/// - Reports runtime errors and continues with error values.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a keyword, literal,
/// identifier or operator, tagged with the line it came from.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Parses integer lexemes and strips quotes from string lexemes.
/// - Skips comments and whitespace while tracking newlines.
pub mod lexer;
/// The parser module builds the program tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `ParseTree` representing statements and expressions, with statement
/// sequences chained into right-nested lists.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes.
/// - Validates the grammar, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// This module declares the single value type computed by every node:
/// a closed union over error, integer and string. It provides checked
/// payload accessors, variant predicates, and display formatting.
///
/// # Responsibilities
/// - Defines the `Value` enum and its three variants.
/// - Distinguishes wrong-variant extraction (a fault) from language errors.
pub mod value;
