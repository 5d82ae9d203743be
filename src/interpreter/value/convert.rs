use crate::{
    ast::Span,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
    util::num::{round_to_i32, round_to_i64},
};

impl Value {
    /// Converts the value to `kind`, or returns a `ConversionFailure`.
    ///
    /// Numeric kinds convert between each other with native casts, except
    /// that narrowing to an integer rounds half to even and is range checked.
    /// Booleans convert to `1`/`0`, enums to their backing integer, and
    /// strings are parsed after trimming. Converting a number to `bool`
    /// tests it against zero. Non-numeric kinds only convert to themselves.
    ///
    /// # Parameters
    /// - `kind`: The target kind.
    /// - `span`: Source span for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: A value whose kind is `kind`.
    /// - `Err(RuntimeError::ConversionFailure)`: If no conversion applies.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::Span,
    ///     interpreter::value::core::{Value, ValueKind},
    /// };
    ///
    /// let span = Span::default();
    /// assert_eq!(Value::Int(2).convert_to(ValueKind::Double, span).unwrap(),
    ///            Value::Double(2.0));
    /// assert_eq!(Value::from(" 42 ").convert_to(ValueKind::Int, span).unwrap(),
    ///            Value::Int(42));
    /// assert!(Value::Null.convert_to(ValueKind::Int, span).is_err());
    /// ```
    pub fn convert_to(&self, kind: ValueKind, span: Span) -> EvalResult<Self> {
        if self.kind() == kind {
            return Ok(self.clone());
        }

        let converted = match kind {
            ValueKind::Int => self.to_i32().map(Self::Int),
            ValueKind::Long => self.to_i64().map(Self::Long),
            ValueKind::Float => self.to_f32().map(Self::Float),
            ValueKind::Double => self.to_f64().map(Self::Double),
            ValueKind::Bool => self.to_bool().map(Self::Bool),
            _ => None,
        };

        converted.ok_or_else(|| self.conversion_failure(kind, span))
    }

    /// Builds the `ConversionFailure` error for converting `self` to `kind`.
    #[must_use]
    pub fn conversion_failure(&self, kind: ValueKind, span: Span) -> RuntimeError {
        RuntimeError::ConversionFailure { value:      self.describe(),
                                          from:       self.kind(),
                                          to:         kind,
                                          expression: None,
                                          span, }
    }

    fn to_i32(&self) -> Option<i32> {
        match self {
            Self::Bool(b) => Some(i32::from(*b)),
            Self::Int(n) => Some(*n),
            Self::Long(n) => i32::try_from(*n).ok(),
            Self::Float(x) => round_to_i32(f64::from(*x)),
            Self::Double(x) => round_to_i32(*x),
            Self::Enum(member) => Some(member.value),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Int(n) => Some(i64::from(*n)),
            Self::Long(n) => Some(*n),
            Self::Float(x) => round_to_i64(f64::from(*x)),
            Self::Double(x) => round_to_i64(*x),
            Self::Enum(member) => Some(i64::from(member.value)),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn to_f32(&self) -> Option<f32> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(n) => Some(*n as f32),
            Self::Long(n) => Some(*n as f32),
            Self::Float(x) => Some(*x),
            Self::Double(x) => Some(*x as f32),
            Self::Enum(member) => Some(member.value as f32),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(n) => Some(f64::from(*n)),
            Self::Long(n) => Some(*n as f64),
            Self::Float(x) => Some(f64::from(*x)),
            Self::Double(x) => Some(*x),
            Self::Enum(member) => Some(f64::from(member.value)),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(n) => Some(*n != 0),
            Self::Long(n) => Some(*n != 0),
            Self::Float(x) => Some(*x != 0.0),
            Self::Double(x) => Some(*x != 0.0),
            Self::Enum(member) => Some(member.value != 0),
            Self::String(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            },
            _ => None,
        }
    }
}
