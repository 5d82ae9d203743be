use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::{
        evaluator::{binary::core::compare, core::EvalResult},
        value::core::{Value, ValueKind},
    },
};

impl BinaryExpression {
    /// Handler for two `bool` operands. Only `==` and `!=` are defined.
    pub fn eval_bool(&self, a: bool, b: bool) -> EvalResult<Value> {
        match self.op {
            op @ (BinaryOperator::CompareEqual | BinaryOperator::CompareNotEqual) => {
                Ok(Value::Bool(compare(op, a, b)))
            },
            _ => Err(self.unsupported_operator(ValueKind::Bool, ValueKind::Bool)),
        }
    }
}
