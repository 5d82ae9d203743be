use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Span, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    let Some((_, op_span)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let expr = parse_unary(tokens)?;
    Ok(Expr::Unary { op,
                     span: op_span.to(expr.span()),
                     expr: Box::new(expr) })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | identifier "(" arguments ")"
///              | "[" elements "]"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (token, span) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;
    let span = *span;

    let literal = |value: LiteralValue| -> ParseResult<Expr> { Ok(Expr::Literal { value, span }) };

    match token {
        Token::Null => literal(LiteralValue::Null),
        Token::Bool(b) => literal(LiteralValue::Bool(*b)),
        Token::Integer(n) => literal(i32::try_from(*n).map_or(LiteralValue::Long(*n), LiteralValue::Int)),
        Token::Long(n) => literal(LiteralValue::Long(*n)),
        Token::Float(x) => literal(LiteralValue::Float(*x)),
        Token::Double(x) => literal(LiteralValue::Double(*x)),
        Token::Str(s) => literal(LiteralValue::String(s.clone())),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, span),
        Token::LBracket => {
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket, ']')?;
            Ok(Expr::List { elements, span })
        },
        Token::LParen => parse_grouping(tokens, span),
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                 span }),
    }
}

/// Parses a variable reference or, when followed by `(`, a function call.
///
/// Grammar: `identifier_or_call := IDENT ("(" arguments ")")?`
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, name: &str, span: Span) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen, ')')?;
            Ok(Expr::Call { name: name.to_string(),
                            arguments,
                            span })
        },
        _ => Ok(Expr::Variable { name: name.to_string(),
                                 span }),
    }
}

/// Parses a parenthesized expression.
///
/// The opening `(` has already been consumed.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// `ExpectedDelimiter` if the closing `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: Span) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, span)) => Err(ParseError::ExpectedDelimiter { expected: ')',
                                                               span:     *span, }),
        None => Err(ParseError::ExpectedDelimiter { expected: ')',
                                                    span:     open, }),
    }
}
