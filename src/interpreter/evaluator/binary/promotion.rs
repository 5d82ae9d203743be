use tracing::trace;

use crate::{
    ast::BinaryExpression,
    error::RuntimeError,
    interpreter::{
        evaluator::{context::EvalContext, core::EvalResult},
        value::core::{Value, ValueKind},
    },
};

/// Kinds the ladder promotes to, highest precedence first.
const LADDER: [ValueKind; 5] = [ValueKind::Double,
                                ValueKind::Float,
                                ValueKind::Long,
                                ValueKind::Int,
                                ValueKind::Bool];

/// Picks the common type of two operand kinds.
///
/// Walks the ladder `double > float > long > int > bool` and stops at the
/// first rung either kind sits on, left kind checked before right. Enums
/// sit on the `int` rung.
///
/// # Returns
/// - `Some(ValueKind)`: The common type.
/// - `None`: If neither kind is on the ladder.
///
/// # Example
/// ```
/// use quill::interpreter::{
///     evaluator::binary::promotion::promotion_target,
///     value::core::ValueKind,
/// };
///
/// assert_eq!(promotion_target(ValueKind::Int, ValueKind::Double), Some(ValueKind::Double));
/// assert_eq!(promotion_target(ValueKind::Bool, ValueKind::Enum), Some(ValueKind::Int));
/// assert_eq!(promotion_target(ValueKind::Date, ValueKind::Date), None);
/// ```
#[must_use]
pub fn promotion_target(left: ValueKind, right: ValueKind) -> Option<ValueKind> {
    let rung = |kind: ValueKind| match kind {
        ValueKind::Enum => ValueKind::Int,
        other => other,
    };
    let (left, right) = (rung(left), rung(right));

    LADDER.into_iter().find(|&kind| left == kind || right == kind)
}

impl BinaryExpression {
    /// Evaluates a non-string operand pair through the promotion ladder.
    ///
    /// Both operands are coerced to the common type through the context,
    /// then handed to that type's handler. Pairs off the ladder fall back to
    /// the date handlers, and anything else is `UnsupportedTypes`.
    ///
    /// # Errors
    /// Conversion errors from the context propagate unchanged.
    pub fn eval_promoted<C>(&self, context: &C, left: &Value, right: &Value) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        let Some(target) = promotion_target(left.kind(), right.kind()) else {
            return match (left, right) {
                (Value::Date(a), Value::Date(b)) => self.eval_date(*a, *b),
                (Value::Date(date), Value::Duration(span)) => self.eval_date_duration(*date, *span),
                _ => Err(self.unsupported_types(left, right)),
            };
        };

        trace!(op = %self.op, target = %target, "promoting operands");

        let promoted_left = self.promote(context, left, target)?;
        let promoted_right = self.promote(context, right, target)?;

        match (promoted_left, promoted_right) {
            (Value::Double(a), Value::Double(b)) => self.eval_double(a, b),
            (Value::Float(a), Value::Float(b)) => self.eval_float(a, b),
            (Value::Long(a), Value::Long(b)) => self.eval_long(a, b),
            (Value::Int(a), Value::Int(b)) => self.eval_int(a, b),
            (Value::Bool(a), Value::Bool(b)) => self.eval_bool(a, b),
            _ => Err(self.unsupported_types(left, right)),
        }
    }

    /// Coerces one operand to `target`, leaving it alone if it is already
    /// of that kind.
    fn promote<C>(&self, context: &C, value: &Value, target: ValueKind) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        if value.kind() == target {
            return Ok(value.clone());
        }

        let converted = context.coerce_to_kind(self.span, value, target)?;
        if converted.kind() == target {
            Ok(converted)
        } else {
            Err(RuntimeError::ConversionFailure { value:      value.describe(),
                                                  from:       value.kind(),
                                                  to:         target,
                                                  expression: Some(self.to_string()),
                                                  span:       self.span, })
        }
    }
}
