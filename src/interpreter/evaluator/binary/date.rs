use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::{
        evaluator::{binary::core::compare, core::EvalResult},
        value::core::{Value, ValueKind},
    },
};

impl BinaryExpression {
    /// Handler for two dates: `-` yields the time span between them, and
    /// all six comparisons are defined.
    ///
    /// # Example
    /// ```
    /// use quill::evaluate_source;
    ///
    /// let span = evaluate_source("date(2024, 3, 2) - date(2024, 3, 1)").unwrap();
    /// assert_eq!(span.to_string(), "1.00:00:00");
    /// ```
    pub fn eval_date(&self, a: NaiveDateTime, b: NaiveDateTime) -> EvalResult<Value> {
        match self.op {
            BinaryOperator::Subtract => Ok(Value::Duration(a.signed_duration_since(b))),
            op if op.is_comparison() => Ok(Value::Bool(compare(op, a, b))),
            _ => Err(self.unsupported_operator(ValueKind::Date, ValueKind::Date)),
        }
    }

    /// Handler for a date and a time span: only `+` is defined.
    ///
    /// # Errors
    /// `Overflow` if the sum leaves the representable date range.
    pub fn eval_date_duration(&self, date: NaiveDateTime, span: TimeDelta) -> EvalResult<Value> {
        match self.op {
            BinaryOperator::Add => date.checked_add_signed(span)
                                       .map(Value::Date)
                                       .ok_or_else(|| self.overflow()),
            _ => Err(self.unsupported_operator(ValueKind::Date, ValueKind::Duration)),
        }
    }
}
