use crate::{
    ast::{Expr, Span},
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
};

/// Services the binary-operator core consumes from the surrounding
/// interpreter.
///
/// The core never evaluates children, decides truthiness, or stringifies
/// values on its own; it always goes through this trait. Only
/// [`EvalContext::evaluate`] is required. The provided coercions implement
/// the language defaults and can be overridden by hosts with different
/// rules.
///
/// # Example
/// ```
/// use quill::{
///     ast::{BinaryExpression, BinaryOperator, Expr, LiteralValue, Span},
///     interpreter::{
///         evaluator::{context::EvalContext, core::EvalResult},
///         value::core::Value,
///     },
/// };
///
/// /// Evaluates literals only.
/// struct Literals;
///
/// impl EvalContext for Literals {
///     fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
///         match expr {
///             Expr::Literal { value: LiteralValue::Int(n), .. } => Ok(Value::Int(*n)),
///             _ => Ok(Value::Null),
///         }
///     }
/// }
///
/// let literal = |n| Expr::Literal { value: LiteralValue::Int(n),
///                                   span:  Span::default(), };
/// let sum = BinaryExpression::new(literal(1), BinaryOperator::Add, literal(2));
///
/// assert_eq!(sum.evaluate(&mut Literals).unwrap(), Value::Int(3));
/// ```
pub trait EvalContext {
    /// Evaluates a sub-expression.
    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value>;

    /// Truthiness: `null` and `false` are false, everything else is true.
    fn coerce_to_bool(&self, value: &Value) -> bool {
        !matches!(value, Value::Null | Value::Bool(false))
    }

    /// Stringifies a value.
    fn coerce_to_string(&self, _span: Span, value: &Value) -> String {
        value.to_string()
    }

    /// Converts a value to `kind`, failing with `ConversionFailure`.
    fn coerce_to_kind(&self, span: Span, value: &Value, kind: ValueKind) -> EvalResult<Value> {
        value.convert_to(kind, span)
    }
}
