use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::{
        evaluator::{binary::core::compare, core::EvalResult},
        value::core::{Value, ValueKind},
    },
};

impl BinaryExpression {
    /// Handler for two `int` operands.
    ///
    /// `+`, `-` and `*` wrap on overflow. `/` divides in `float`; `//` and
    /// `%` are checked integer operations. This is the only handler that
    /// builds ranges.
    ///
    /// # Errors
    /// - `DivisionByZero` for `//` or `%` by zero.
    /// - `Overflow` for `i32::MIN // -1` and `i32::MIN % -1`.
    ///
    /// # Example
    /// ```
    /// use quill::{evaluate_source, interpreter::value::core::Value};
    ///
    /// assert_eq!(evaluate_source("7 // 2").unwrap(), Value::Int(3));
    /// assert_eq!(evaluate_source("-7 // 2").unwrap(), Value::Int(-3));
    /// assert_eq!(evaluate_source("7 / 2").unwrap(), Value::Float(3.5));
    /// assert!(evaluate_source("1 % 0").is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn eval_int(&self, a: i32, b: i32) -> EvalResult<Value> {
        match self.op {
            BinaryOperator::Add => Ok(Value::Int(a.wrapping_add(b))),
            BinaryOperator::Subtract => Ok(Value::Int(a.wrapping_sub(b))),
            BinaryOperator::Multiply => Ok(Value::Int(a.wrapping_mul(b))),
            BinaryOperator::Divide => Ok(Value::Float(a as f32 / b as f32)),
            BinaryOperator::DivideRound => {
                self.checked(b == 0, a.checked_div(b)).map(Value::Int)
            },
            BinaryOperator::Modulus => self.checked(b == 0, a.checked_rem(b)).map(Value::Int),
            BinaryOperator::RangeInclude | BinaryOperator::RangeExclude => Ok(self.eval_range(a, b)),
            op if op.is_comparison() => Ok(Value::Bool(compare(op, a, b))),
            _ => Err(self.unsupported_operator(ValueKind::Int, ValueKind::Int)),
        }
    }

    /// Handler for two `long` operands.
    ///
    /// Same rules as [`BinaryExpression::eval_int`], without ranges.
    #[allow(clippy::cast_precision_loss)]
    pub fn eval_long(&self, a: i64, b: i64) -> EvalResult<Value> {
        match self.op {
            BinaryOperator::Add => Ok(Value::Long(a.wrapping_add(b))),
            BinaryOperator::Subtract => Ok(Value::Long(a.wrapping_sub(b))),
            BinaryOperator::Multiply => Ok(Value::Long(a.wrapping_mul(b))),
            BinaryOperator::Divide => Ok(Value::Float(a as f32 / b as f32)),
            BinaryOperator::DivideRound => {
                self.checked(b == 0, a.checked_div(b)).map(Value::Long)
            },
            BinaryOperator::Modulus => self.checked(b == 0, a.checked_rem(b)).map(Value::Long),
            op if op.is_comparison() => Ok(Value::Bool(compare(op, a, b))),
            _ => Err(self.unsupported_operator(ValueKind::Long, ValueKind::Long)),
        }
    }

    /// Maps the result of a checked integer division to the matching error.
    fn checked<T>(&self, by_zero: bool, result: Option<T>) -> EvalResult<T> {
        if by_zero {
            return Err(self.division_by_zero());
        }
        result.ok_or_else(|| self.overflow())
    }
}
