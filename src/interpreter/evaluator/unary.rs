use chrono::TimeDelta;

use crate::{
    ast::{Expr, Span, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            context::EvalContext,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation.
    ///
    /// `!` negates the operand's truthiness. `-` negates numbers (integers
    /// wrap on overflow) and time spans; any other operand is an error.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: The operand expression.
    /// - `span`: Location of the unary expression.
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::{evaluator::core::Context, value::core::Value}, parse_source};
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval(&parse_source("-(2 + 3)").unwrap()).unwrap(), Value::Int(-5));
    /// assert_eq!(context.eval(&parse_source("!null").unwrap()).unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr, span: Span) -> EvalResult<Value> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Not => Ok(Value::Bool(!self.coerce_to_bool(&value))),
            UnaryOperator::Negate => match value {
                Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
                Value::Long(n) => Ok(Value::Long(n.wrapping_neg())),
                Value::Float(x) => Ok(Value::Float(-x)),
                Value::Double(x) => Ok(Value::Double(-x)),
                Value::Duration(d) => {
                    TimeDelta::zero().checked_sub(&d)
                                     .map(Value::Duration)
                                     .ok_or_else(|| RuntimeError::Overflow { expression: format!("{op}{expr}"),
                                                                             span })
                },
                other => Err(RuntimeError::UnsupportedUnary { op:   op.to_string(),
                                                              kind: other.kind(),
                                                              span, }),
            },
        }
    }
}
