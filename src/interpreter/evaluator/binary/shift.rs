use tracing::trace;

use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

impl BinaryExpression {
    /// `list << value` appends and `value >> list` prepends.
    ///
    /// The sequence side is copied first; the operand list is never
    /// modified. Any value exposing the sequence capability qualifies, not
    /// only [`Value::List`].
    ///
    /// # Returns
    /// - `Ok(Value::List)`: A new list.
    /// - `Err(RuntimeError::UnsupportedOperator)`: If the required side has
    ///   no sequence capability.
    ///
    /// # Example
    /// ```
    /// use quill::evaluate_source;
    ///
    /// assert_eq!(evaluate_source("[1, 2] << 3").unwrap().to_string(), "[1, 2, 3]");
    /// assert_eq!(evaluate_source("0 >> [1, 2]").unwrap().to_string(), "[0, 1, 2]");
    /// assert!(evaluate_source("1 << 2").is_err());
    /// ```
    pub fn eval_shift(&self, left: &Value, right: &Value) -> EvalResult<Value> {
        let shifted = match self.op {
            BinaryOperator::ShiftLeft => left.sequence().map(|mut items| {
                                                            items.push(right.clone());
                                                            items
                                                        }),
            _ => right.sequence().map(|mut items| {
                                     items.insert(0, left.clone());
                                     items
                                 }),
        };

        match shifted {
            Some(items) => {
                trace!(op = %self.op, len = items.len(), "shifted into new list");
                Ok(Value::list(items))
            },
            None => Err(self.unsupported_operator(left.kind(), right.kind())),
        }
    }
}
