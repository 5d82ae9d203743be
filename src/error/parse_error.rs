use thiserror::Error;

use crate::ast::Span;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on {span}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// Where the token was found.
        span:  Span,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The last line of the source.
        line: usize,
    },
    /// A closing delimiter was expected but not found.
    #[error("Error on {span}: Expected '{expected}' but none found.")]
    ExpectedDelimiter {
        /// The delimiter that was expected.
        expected: char,
        /// Where the delimiter was expected.
        span:     Span,
    },
    /// Found extra tokens after the expression should have ended.
    #[error("Error on {span}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// Where the token was found.
        span:  Span,
    },
    /// A numeric literal does not fit any supported numeric type.
    #[error("Error on {span}: Literal '{literal}' is out of range.")]
    LiteralOutOfRange {
        /// The literal text.
        literal: String,
        /// Where the literal was found.
        span:    Span,
    },
}
