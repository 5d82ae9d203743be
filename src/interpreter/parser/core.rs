use std::iter::Peekable;

use crate::{
    ast::{Expr, Span},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_coalesce},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a single expression.
///
/// # Parameters
/// - `tokens`: Tokens produced by [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfInput` if `tokens` is empty or ends mid-expression.
/// - `UnexpectedTrailingTokens` if input remains after the expression.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// assert_eq!(parse(&tokens).unwrap().to_string(), "1 + (2 * 3)");
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, Span)]) -> ParseResult<Expr> {
    let mut stream = tokens.iter().peekable();
    let last_line = tokens.last().map_or(1, |(_, span)| span.line);

    // Inner rules do not know where the input ends.
    let expr = parse_expression(&mut stream).map_err(|error| match error {
                                                 ParseError::UnexpectedEndOfInput { .. } => {
                                                     ParseError::UnexpectedEndOfInput { line: last_line }
                                                 },
                                                 other => other,
                                             })?;

    match stream.next() {
        None => Ok(expr),
        Some((token, span)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                                          span:  *span, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, null coalescing, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := coalesce`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_coalesce(tokens)
}
