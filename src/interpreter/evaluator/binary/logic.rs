use tracing::trace;

use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::{evaluator::context::EvalContext, value::core::Value},
};

impl BinaryExpression {
    /// `left ?? right`: the left value unless it is null.
    ///
    /// Both operands have already been evaluated by the time this runs.
    #[must_use]
    pub fn eval_coalesce(left: &Value, right: &Value) -> Value {
        trace!(left_is_null = left.is_null(), "coalescing");
        if left.is_null() { right.clone() } else { left.clone() }
    }

    /// `&&` and `||` over the truthiness of both values.
    ///
    /// Both sides are coerced to `bool` through the context before they are
    /// combined; the combination itself does not short-circuit.
    ///
    /// # Example
    /// ```
    /// use quill::{evaluate_source, interpreter::value::core::Value};
    ///
    /// assert_eq!(evaluate_source("null || 0").unwrap(), Value::Bool(true));
    /// assert_eq!(evaluate_source("1 and false").unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_logic<C>(&self, context: &C, left: &Value, right: &Value) -> Value
        where C: EvalContext + ?Sized
    {
        let left = context.coerce_to_bool(left);
        let right = context.coerce_to_bool(right);

        let result = match self.op {
            BinaryOperator::And => left & right,
            _ => left | right,
        };
        trace!(op = %self.op, left, right, result, "logical operator");
        Value::Bool(result)
    }
}
