//! # quill
//!
//! quill is the expression core of a small scripting and templating
//! language. It parses an expression, evaluates it against a context, and
//! applies the language's binary operators with its coercion and promotion
//! rules: integer, long, float and double arithmetic, string concatenation
//! and repetition, dates and time spans, ranges, list append and prepend,
//! and null coalescing.
//!
//! ```
//! use quill::{evaluate_source, interpreter::value::core::Value};
//!
//! assert_eq!(evaluate_source("1 + 2").unwrap(), Value::Int(3));
//! assert_eq!(evaluate_source(r#"3 * "ab""#).unwrap(), Value::from("ababab"));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, the `BinaryExpression` node and the
/// operator tags. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source spans to AST nodes for error reporting.
/// - Renders nodes back to source-like text for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the source location of the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches spans and rendered expressions for context.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// This module provides the narrowing and rounding routines used by value
/// coercion and by the floating-point handlers.
pub mod util;

/// Lexes and parses `source` into a single expression.
///
/// # Example
/// ```
/// use quill::parse_source;
///
/// let expr = parse_source("a ?? [1, 2] << 3").unwrap();
/// assert_eq!(expr.to_string(), "a ?? ([1, 2] << 3)");
///
/// assert!(parse_source("(1 + 2").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

/// Evaluates `source` in a fresh [`Context`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::{evaluate_source, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_source("1.0 + 2").unwrap(), Value::Double(3.0));
///
/// // 'x' is not defined.
/// assert!(evaluate_source("x + 1").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    evaluate_in(&mut Context::new(), source)
}

/// Evaluates `source` against an existing context.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::{
///     evaluate_in,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::new();
/// context.set_variable("name", Value::from("quill"));
///
/// assert_eq!(evaluate_in(&mut context, r#""hi " + name"#).unwrap(),
///            Value::from("hi quill"));
/// ```
pub fn evaluate_in(context: &mut Context, source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let expr = parse_source(source)?;
    Ok(context.eval(&expr)?)
}
