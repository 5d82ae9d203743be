use std::iter::Peekable;

use crate::{
    ast::{BinaryExpression, BinaryOperator, Expr, Span},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses null-coalescing expressions.
///
/// The rule is: `coalesce := logical_or ("??" logical_or)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::EmptyCoalescing`.
pub fn parse_coalesce<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_logical_or, |op| {
        matches!(op, BinaryOperator::EmptyCoalescing)
    })
}

/// Parses logical OR expressions.
///
/// Both `||` and `or` map to `BinaryOperator::Or`.
///
/// Grammar: `logical_or := logical_and (("||" | "or") logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_logical_and, |op| matches!(op, BinaryOperator::Or))
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality (("&&" | "and") equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_equality, |op| matches!(op, BinaryOperator::And))
}

/// Parses `==` and `!=`.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::CompareEqual | BinaryOperator::CompareNotEqual)
    })
}

/// Parses relational operators.
///
/// This parser handles `<`, `>`, `<=` and `>=`.
///
/// Grammar: `relational := shift (("<" | ">" | "<=" | ">=") shift)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_shift, |op| {
        matches!(op,
                 BinaryOperator::CompareLess
                 | BinaryOperator::CompareGreater
                 | BinaryOperator::CompareLessOrEqual
                 | BinaryOperator::CompareGreaterOrEqual)
    })
}

/// Parses list append and prepend.
///
/// Grammar: `shift := range (("<<" | ">>") range)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_range, |op| {
        matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
    })
}

/// Parses range expressions.
///
/// `..` is inclusive. `..<` and `...` are exclusive.
///
/// Grammar: `range := additive ((".." | "..<" | "...") additive)*`
pub fn parse_range<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_additive, |op| {
        matches!(op, BinaryOperator::RangeInclude | BinaryOperator::RangeExclude)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Subtract)
    })
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/`, `//` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op,
                 BinaryOperator::Multiply
                 | BinaryOperator::Divide
                 | BinaryOperator::DivideRound
                 | BinaryOperator::Modulus)
    })
}

/// Folds `operand (op operand)*` into a left-leaning tree, accepting only
/// the operators for which `accepts` returns `true`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = operand(tokens)?;

    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = BinaryExpression::new(left, op, right).into();
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::SlashSlash),
///            Some(BinaryOperator::DivideRound));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Star => Some(BinaryOperator::Multiply),
        Token::Slash => Some(BinaryOperator::Divide),
        Token::SlashSlash => Some(BinaryOperator::DivideRound),
        Token::Percent => Some(BinaryOperator::Modulus),
        Token::EqualEqual => Some(BinaryOperator::CompareEqual),
        Token::BangEqual => Some(BinaryOperator::CompareNotEqual),
        Token::Greater => Some(BinaryOperator::CompareGreater),
        Token::Less => Some(BinaryOperator::CompareLess),
        Token::GreaterEqual => Some(BinaryOperator::CompareGreaterOrEqual),
        Token::LessEqual => Some(BinaryOperator::CompareLessOrEqual),
        Token::DotDot => Some(BinaryOperator::RangeInclude),
        Token::DotDotLess => Some(BinaryOperator::RangeExclude),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::DoubleQuestion => Some(BinaryOperator::EmptyCoalescing),
        Token::LessLess => Some(BinaryOperator::ShiftLeft),
        Token::GreaterGreater => Some(BinaryOperator::ShiftRight),
        _ => None,
    }
}
