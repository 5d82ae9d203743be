use tracing::trace;

use crate::{
    ast::{BinaryExpression, BinaryOperator},
    interpreter::value::{core::Value, range::RangeValue},
};

impl BinaryExpression {
    /// Builds the range for `a..b` or `a..<b`.
    ///
    /// The range is lazy; nothing is materialised until it is iterated or
    /// stringified.
    ///
    /// # Example
    /// ```
    /// use quill::evaluate_source;
    ///
    /// assert_eq!(evaluate_source("1..3").unwrap().to_string(), "[1, 2, 3]");
    /// assert_eq!(evaluate_source("3..1").unwrap().to_string(), "[3, 2, 1]");
    /// assert_eq!(evaluate_source("1..<3").unwrap().to_string(), "[1, 2]");
    /// ```
    #[must_use]
    pub fn eval_range(&self, a: i32, b: i32) -> Value {
        let range = match self.op {
            BinaryOperator::RangeExclude => RangeValue::exclusive(a, b),
            _ => RangeValue::inclusive(a, b),
        };
        trace!(start = a, end = b, inclusive = range.is_inclusive(), "range created");
        Value::Range(range)
    }
}
