use tracing::debug;

use crate::{
    ast::{BinaryExpression, BinaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{context::EvalContext, core::EvalResult},
        value::core::{Value, ValueKind},
    },
};

impl BinaryExpression {
    /// Evaluates the node against `context`.
    ///
    /// Both operands are always evaluated, left first, before the operator
    /// is looked at. This holds for `&&`, `||` and `??` too: side effects of
    /// the right operand happen even when the left operand alone decides the
    /// result.
    ///
    /// # Parameters
    /// - `context`: Evaluates the operands and supplies coercions.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of the operation.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let Expr::Binary(node) = parse_source(r#""ab" * 3"#).unwrap() else {
    ///     unreachable!()
    /// };
    ///
    /// let result = node.evaluate(&mut Context::new()).unwrap();
    /// assert_eq!(result, Value::from("ababab"));
    /// ```
    pub fn evaluate<C>(&self, context: &mut C) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        let left = context.evaluate(&self.left)?;
        let right = context.evaluate(&self.right)?;

        debug!(op = %self.op,
               left = %left.kind(),
               right = %right.kind(),
               "evaluating binary expression");

        self.apply(context, &left, &right)
    }

    /// Applies the operator to two already evaluated operands.
    ///
    /// This routes the operation depending on the operator:
    /// - `??` returns the left value unless it is null.
    /// - `&&` and `||` combine the truthiness of both values.
    /// - `<<` and `>>` copy a list and append or prepend the other value.
    /// - Arithmetic, comparison and range operators go to the string
    ///   overloads when either value is a string, and to the promotion
    ///   ladder otherwise.
    ///
    /// # Parameters
    /// - `context`: Supplies coercions.
    /// - `left`: Left operand value.
    /// - `right`: Right operand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    pub fn apply<C>(&self, context: &C, left: &Value, right: &Value) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        use BinaryOperator::{
            Add, And, CompareEqual, CompareGreater, CompareGreaterOrEqual, CompareLess,
            CompareLessOrEqual, CompareNotEqual, Divide, DivideRound, EmptyCoalescing, Modulus,
            Multiply, Or, RangeExclude, RangeInclude, ShiftLeft, ShiftRight, Subtract,
        };

        match self.op {
            EmptyCoalescing => Ok(Self::eval_coalesce(left, right)),
            And | Or => Ok(self.eval_logic(context, left, right)),
            ShiftLeft | ShiftRight => self.eval_shift(left, right),
            Add | Subtract | Multiply | Divide | DivideRound | Modulus | CompareEqual
            | CompareNotEqual | CompareGreater | CompareLess | CompareGreaterOrEqual
            | CompareLessOrEqual | RangeInclude | RangeExclude => {
                self.eval_calculation(context, left, right)
            },
        }
    }

    /// Arithmetic, comparison and range operators.
    fn eval_calculation<C>(&self, context: &C, left: &Value, right: &Value) -> EvalResult<Value>
        where C: EvalContext + ?Sized
    {
        if left.is_string() || right.is_string() {
            return self.eval_string(context, left, right);
        }

        if matches!(self.op, BinaryOperator::CompareEqual | BinaryOperator::CompareNotEqual)
           && (left.is_null() || right.is_null())
        {
            let both_null = left.is_null() && right.is_null();
            return Ok(Value::Bool(compare(self.op, both_null, true)));
        }

        self.eval_promoted(context, left, right)
    }

    /// Error for an operator with no meaning for the given operand kinds.
    #[must_use]
    pub fn unsupported_operator(&self, left_kind: ValueKind, right_kind: ValueKind) -> RuntimeError {
        RuntimeError::UnsupportedOperator { op:         self.op,
                                            expression: self.to_string(),
                                            left:       self.left.to_string(),
                                            left_kind,
                                            right:      self.right.to_string(),
                                            right_kind,
                                            span:       self.span, }
    }

    /// Error for an operand pair the promotion ladder cannot reconcile.
    #[must_use]
    pub fn unsupported_types(&self, left: &Value, right: &Value) -> RuntimeError {
        RuntimeError::UnsupportedTypes { op:          self.op,
                                         expression:  self.to_string(),
                                         left_value:  left.describe(),
                                         left_kind:   left.kind(),
                                         right_value: right.describe(),
                                         right_kind:  right.kind(),
                                         span:        self.span, }
    }

    /// Error for integer division or remainder by zero.
    #[must_use]
    pub fn division_by_zero(&self) -> RuntimeError {
        RuntimeError::DivisionByZero { expression: self.to_string(),
                                       span:       self.span, }
    }

    /// Error for a result that does not fit its type.
    #[must_use]
    pub fn overflow(&self) -> RuntimeError {
        RuntimeError::Overflow { expression: self.to_string(),
                                 span:       self.span, }
    }
}

/// Applies one of the six comparison operators to two values of the same
/// type.
///
/// Relational operators use `PartialOrd`, so any comparison involving NaN is
/// false except `!=`.
///
/// # Panics
/// Panics if `op` is not a comparison operator; callers match on the
/// comparison operators before calling.
///
/// # Example
/// ```
/// use quill::{ast::BinaryOperator, interpreter::evaluator::binary::core::compare};
///
/// assert!(compare(BinaryOperator::CompareLessOrEqual, 2, 2));
/// assert!(!compare(BinaryOperator::CompareGreater, f64::NAN, 1.0));
/// ```
#[must_use]
pub fn compare<T: PartialOrd>(op: BinaryOperator, left: T, right: T) -> bool {
    match op {
        BinaryOperator::CompareEqual => left == right,
        BinaryOperator::CompareNotEqual => left != right,
        BinaryOperator::CompareGreater => left > right,
        BinaryOperator::CompareLess => left < right,
        BinaryOperator::CompareGreaterOrEqual => left >= right,
        BinaryOperator::CompareLessOrEqual => left <= right,
        _ => unreachable!("compare used with non comparison operator {op}"),
    }
}
