use thiserror::Error;

use crate::{
    ast::{BinaryOperator, Span},
    interpreter::value::core::ValueKind,
};

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the source span of the failing node. Variants raised
/// by the binary-operator core also carry the rendered expression text
/// (`left op right`). None of them are recovered from inside the core; they
/// unwind to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The operator has no meaning for the operand kinds it was given.
    #[error("Error on {span}: Operator `{op}` is not supported for `{left}: {left_kind}` and `{right}: {right_kind}` in `{expression}`.")]
    UnsupportedOperator {
        /// The offending operator.
        op:         BinaryOperator,
        /// Rendered text of the whole binary expression.
        expression: String,
        /// Rendered text of the left operand expression.
        left:       String,
        /// Kind of the evaluated left operand.
        left_kind:  ValueKind,
        /// Rendered text of the right operand expression.
        right:      String,
        /// Kind of the evaluated right operand.
        right_kind: ValueKind,
        /// Location of the binary expression.
        span:       Span,
    },
    /// The promotion ladder found no common type for the operand pair.
    #[error("Error on {span}: Unsupported types `{left_value}/{left_kind}` {op} `{right_value}/{right_kind}` in `{expression}`.")]
    UnsupportedTypes {
        /// The offending operator.
        op:          BinaryOperator,
        /// Rendered text of the whole binary expression.
        expression:  String,
        /// The evaluated left operand, stringified.
        left_value:  String,
        /// Kind of the evaluated left operand.
        left_kind:   ValueKind,
        /// The evaluated right operand, stringified.
        right_value: String,
        /// Kind of the evaluated right operand.
        right_kind:  ValueKind,
        /// Location of the binary expression.
        span:        Span,
    },
    /// A value could not be coerced to the requested kind.
    #[error("Error on {span}: Unable to convert `{value}` of type {from} to {to}{}.", in_expression(.expression.as_deref()))]
    ConversionFailure {
        /// The value, as shown in diagnostics.
        value:      String,
        /// Kind of the value.
        from:       ValueKind,
        /// The requested kind.
        to:         ValueKind,
        /// Rendered binary expression, when the operator core raised the
        /// error itself.
        expression: Option<String>,
        /// Location of the conversion.
        span:       Span,
    },
    /// Multiplication involving a string without an integer on the other side.
    #[error("Error on {span}: Operator `{op}` is only supported for string * int or int * string, in `{expression}`.")]
    StringOperatorMisuse {
        /// The offending operator.
        op:         BinaryOperator,
        /// Rendered text of the whole binary expression.
        expression: String,
        /// Location of the binary expression.
        span:       Span,
    },
    /// Integer division or remainder by zero.
    #[error("Error on {span}: Division by zero in `{expression}`.")]
    DivisionByZero {
        /// Rendered text of the whole binary expression.
        expression: String,
        /// Location of the binary expression.
        span:       Span,
    },
    /// An arithmetic result does not fit its type.
    #[error("Error on {span}: Arithmetic overflow in `{expression}`.")]
    Overflow {
        /// Rendered text of the failing expression.
        expression: String,
        /// Location of the failing expression.
        span:       Span,
    },
    /// A unary operator was applied to a value it does not support.
    #[error("Error on {span}: Operator `{op}` is not supported for type {kind}.")]
    UnsupportedUnary {
        /// The operator symbol.
        op:   String,
        /// Kind of the operand.
        kind: ValueKind,
        /// Location of the unary expression.
        span: Span,
    },
    /// Tried to use an undefined variable.
    #[error("Error on {span}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// Location of the reference.
        span: Span,
    },
    /// Called an unknown function.
    #[error("Error on {span}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// Location of the call.
        span: Span,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on {span}: Function '{name}' expects {expected} arguments, found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Accepted argument counts, e.g. `3 to 6`.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// Location of the call.
        span:     Span,
    },
    /// An argument was invalid or out of range.
    #[error("Error on {span}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// Location of the call.
        span:    Span,
    },
}

impl RuntimeError {
    /// Returns the source span carried by the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnsupportedOperator { span, .. }
            | Self::UnsupportedTypes { span, .. }
            | Self::ConversionFailure { span, .. }
            | Self::StringOperatorMisuse { span, .. }
            | Self::DivisionByZero { span, .. }
            | Self::Overflow { span, .. }
            | Self::UnsupportedUnary { span, .. }
            | Self::UnknownVariable { span, .. }
            | Self::UnknownFunction { span, .. }
            | Self::ArgumentCountMismatch { span, .. }
            | Self::InvalidArgument { span, .. } => *span,
        }
    }
}

fn in_expression(expression: Option<&str>) -> String {
    expression.map_or_else(String::new, |expression| format!(" in `{expression}`"))
}
