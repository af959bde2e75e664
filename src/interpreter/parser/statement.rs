use std::iter::Peekable;

use crate::{
    ast::ParseTree,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            expression::{parse_expression, ParseResult},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a whole program into a statement-list chain.
///
/// Statements are parsed until the input is exhausted and chained into
/// right-nested `StmtList` nodes: the root holds the first statement on the
/// left and the rest of the program on the right.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// - `Ok(Some(tree))`: The root of the program tree.
/// - `Ok(None)`: If the source contained no statements at all.
///
/// # Errors
/// Propagates the first `ParseError` encountered.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<ParseTree>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }
    Ok(chain_statements(statements))
}

/// Parses a single statement.
///
/// A statement is one of:
/// - an assignment: `set <identifier> <expression> ;`
/// - an output statement: `print <expression> ;`
/// - a conditional: `if <expression> then <statements> end`
/// - a loop: `loop <expression> do <statements> end`
///
/// The statement's source line is taken from its keyword token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a statement keyword.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a statement keyword or
/// the statement's syntax is malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseTree>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Set, line)) => {
            let line = *line;
            let name = parse_identifier(tokens, line)?;
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::Semicolon, line)?;

            Ok(ParseTree::Set { name,
                                expr: Box::new(expr),
                                line })
        },
        Some((Token::Print, line)) => {
            let line = *line;
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::Semicolon, line)?;

            Ok(ParseTree::Print { expr: Box::new(expr),
                                  line })
        },
        Some((Token::If, line)) => {
            let line = *line;
            let condition = parse_expression(tokens)?;
            expect(tokens, &Token::Then, line)?;
            let body = parse_body(tokens, line)?;

            Ok(ParseTree::If { condition: Box::new(condition),
                               body: Box::new(body),
                               line })
        },
        Some((Token::Loop, line)) => {
            let line = *line;
            let condition = parse_expression(tokens)?;
            expect(tokens, &Token::Do, line)?;
            let body = parse_body(tokens, line)?;

            Ok(ParseTree::Loop { condition: Box::new(condition),
                                 body: Box::new(body),
                                 line })
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the statements of a control-flow body up to the closing `end`.
///
/// The `end` token is consumed. A body must contain at least one statement.
fn parse_body<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<ParseTree>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::End, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    chain_statements(statements).ok_or(ParseError::EmptyBody { line })
}

/// Chains parsed statements into the right-nested `StmtList` shape.
///
/// Each list node takes its line from the statement it heads. Returns `None`
/// for an empty list.
fn chain_statements(statements: Vec<ParseTree>) -> Option<ParseTree> {
    let mut chained = None;
    for stmt in statements.into_iter().rev() {
        let line = stmt.line_number();
        chained = Some(ParseTree::StmtList { first: Box::new(stmt),
                                             rest: chained.map(Box::new),
                                             line });
    }
    chained
}
