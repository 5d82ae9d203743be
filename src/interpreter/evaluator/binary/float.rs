use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::{
        evaluator::{binary::core::compare, core::EvalResult},
        value::core::{Value, ValueKind},
    },
    util::num::truncate_through_i32,
};

impl BinaryExpression {
    /// Handler for two `float` operands.
    ///
    /// `//` truncates the quotient through an `i32` and yields a `double`.
    /// Arithmetic follows IEEE 754, so division by zero gives an infinity or
    /// NaN rather than an error.
    pub fn eval_float(&self, a: f32, b: f32) -> EvalResult<Value> {
        match self.op {
            BinaryOperator::Add => Ok(Value::Float(a + b)),
            BinaryOperator::Subtract => Ok(Value::Float(a - b)),
            BinaryOperator::Multiply => Ok(Value::Float(a * b)),
            BinaryOperator::Divide => Ok(Value::Float(a / b)),
            BinaryOperator::DivideRound => Ok(Value::Double(truncate_through_i32(f64::from(a / b)))),
            BinaryOperator::Modulus => Ok(Value::Float(a % b)),
            op if op.is_comparison() => Ok(Value::Bool(compare(op, a, b))),
            _ => Err(self.unsupported_operator(ValueKind::Float, ValueKind::Float)),
        }
    }

    /// Handler for two `double` operands.
    ///
    /// `/` narrows the left operand to `float` before dividing, so the
    /// quotient can lose precision. `//` truncates through an `i32`:
    /// quotients beyond the `i32` range collapse to `i32::MIN`.
    ///
    /// # Example
    /// ```
    /// use quill::{evaluate_source, interpreter::value::core::Value};
    ///
    /// assert_eq!(evaluate_source("7.5 // 2").unwrap(), Value::Double(3.0));
    /// assert_eq!(evaluate_source("1.0e10 // 1.0").unwrap(),
    ///            Value::Double(f64::from(i32::MIN)));
    /// assert_eq!(evaluate_source("1.0 / 4").unwrap(), Value::Double(0.25));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn eval_double(&self, a: f64, b: f64) -> EvalResult<Value> {
        match self.op {
            BinaryOperator::Add => Ok(Value::Double(a + b)),
            BinaryOperator::Subtract => Ok(Value::Double(a - b)),
            BinaryOperator::Multiply => Ok(Value::Double(a * b)),
            BinaryOperator::Divide => Ok(Value::Double(f64::from(a as f32) / b)),
            BinaryOperator::DivideRound => Ok(Value::Double(truncate_through_i32(a / b))),
            BinaryOperator::Modulus => Ok(Value::Double(a % b)),
            op if op.is_comparison() => Ok(Value::Bool(compare(op, a, b))),
            _ => Err(self.unsupported_operator(ValueKind::Double, ValueKind::Double)),
        }
    }
}
