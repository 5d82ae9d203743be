use std::cmp::Ordering;

use tracing::trace;

use crate::{
    ast::{BinaryExpression, BinaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::compare, context::EvalContext, core::EvalResult},
        value::core::Value,
    },
    util::num::{repeat_count, repeated_length},
};

impl BinaryExpression {
    /// Evaluates an operator where at least one operand is a string.
    ///
    /// - `+` concatenates the stringified operands, left then right.
    /// - `*` repeats the string side by the integer side, in either order.
    /// - Comparisons stringify both sides and compare them ordinally.
    ///
    /// Any other operator is an `UnsupportedOperator` error.
    ///
    /// # Example
    /// ```
    /// use quill::{evaluate_source, interpreter::value::core::Value};
    ///
    /// assert_eq!(evaluate_source(r#""a" + 1"#).unwrap(), Value::from("a1"));
    /// assert_eq!(evaluate_source(r#"2 * "xy""#).unwrap(), Value::from("xyxy"));
    /// assert_eq!(evaluate_source(r#""10" < "9""#).unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_string<C>(&self, context: &C, left: &Value, right: &Value) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        trace!(op = %self.op, "string overload");

        match self.op {
            BinaryOperator::Add => {
                let mut text = context.coerce_to_string(self.span, left);
                text.push_str(&context.coerce_to_string(self.span, right));
                Ok(Value::String(text))
            },
            BinaryOperator::Multiply => self.repeat(context, left, right),
            op if op.is_comparison() => {
                let left = context.coerce_to_string(self.span, left);
                let right = context.coerce_to_string(self.span, right);
                Ok(Value::Bool(compare(op, ordinal(&left, &right), Ordering::Equal)))
            },
            _ => Err(self.unsupported_operator(left.kind(), right.kind())),
        }
    }

    /// `text * count` or `count * text`.
    ///
    /// Results longer than [`MAX_REPEAT_LENGTH`](crate::util::num::MAX_REPEAT_LENGTH)
    /// bytes are an `Overflow` error.
    fn repeat<C>(&self, context: &C, left: &Value, right: &Value) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        let (count, text) = if matches!(right, Value::Int(_) | Value::Long(_)) {
            (right, left)
        } else {
            (left, right)
        };

        let count = match count {
            Value::Int(n) => i64::from(*n),
            Value::Long(n) => *n,
            _ => {
                return Err(RuntimeError::StringOperatorMisuse { op:         self.op,
                                                                expression: self.to_string(),
                                                                span:       self.span, });
            },
        };

        let text = context.coerce_to_string(self.span, text);
        let count = repeat_count(count);
        if repeated_length(text.len(), count).is_none() {
            return Err(self.overflow());
        }
        Ok(Value::String(text.repeat(count)))
    }
}

/// Orders two strings by their UTF-16 code units.
fn ordinal(left: &str, right: &str) -> Ordering {
    left.encode_utf16().cmp(right.encode_utf16())
}
