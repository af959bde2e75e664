use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ParseTree},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the additive operators, and descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// Operators at the same level associate to the left.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any `ParseError` from the operand parsers.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseTree>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Plus, line)) => (BinaryOperator::Add, *line),
            Some((Token::Minus, line)) => (BinaryOperator::Sub, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_term(tokens)?;
        left = ParseTree::BinaryOp { op,
                                     left: Box::new(left),
                                     right: Box::new(right),
                                     line };
    }

    Ok(left)
}

/// Parses a multiplicative term.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseTree>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Star, line)) => (BinaryOperator::Mul, *line),
            Some((Token::Slash, line)) => (BinaryOperator::Div, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_factor(tokens)?;
        left = ParseTree::BinaryOp { op,
                                     left: Box::new(left),
                                     right: Box::new(right),
                                     line };
    }

    Ok(left)
}

/// Parses a primary factor.
///
/// Grammar: `factor := INTEGER | STRING | IDENT | "(" expression ")"`
///
/// Literal nodes are built straight from the token payloads: the lexer has
/// already parsed integer lexemes and stripped string quotes.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseTree>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(ParseTree::IntConst { value: *value,
                                                                        line:  *line, }),
        Some((Token::Str(value), line)) => Ok(ParseTree::StrConst { value: value.clone(),
                                                                    line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(ParseTree::Ident { name: name.clone(),
                                                                       line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                Some((tok, line)) => {
                    Err(ParseError::ExpectedToken { expected: "')'".to_string(),
                                                    found:    format!("'{tok}'"),
                                                    line:     *line, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
            }
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
