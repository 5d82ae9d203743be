use std::fmt;

/// Source location attached to every AST node.
///
/// `start` and `end` are byte offsets into the source text, `line` is the
/// 1-based line of the first byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end:   usize,
    /// Line number of the first character.
    pub line:  usize,
}

impl Span {
    /// Creates a span from a byte range and a line number.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }

    /// Returns the span covering `self` through `other`.
    ///
    /// # Example
    /// ```
    /// use quill::ast::Span;
    ///
    /// let joined = Span::new(0, 1, 1).to(Span::new(4, 5, 1));
    /// assert_eq!(joined, Span::new(0, 5, 1));
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self { start: self.start,
               end:   other.end,
               line:  self.line, }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({}..{})", self.line, self.start, self.end)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. Integer literals that fit in 32 bits are `Int`, larger ones
/// (or ones with an `L` suffix) are `Long`. Real literals are `Double` unless
/// suffixed with `f`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal.
    Null,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 32-bit signed integer literal.
    Int(i32),
    /// A 64-bit signed integer literal.
    Long(i64),
    /// A 32-bit floating-point literal (`1.5f`).
    Float(f32),
    /// A 64-bit floating-point literal.
    Double(f64),
    /// A double-quoted string literal.
    String(String),
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}L"),
            Self::Float(x) => write!(f, "{x:?}f"),
            Self::Double(x) => write!(f, "{x:?}"),
            Self::String(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        c => write!(f, "{c}")?,
                    }
                }
                write!(f, "\"")
            },
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is exclusively owned: every child is boxed and belongs to exactly
/// one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, null).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Location in the source code.
        span:  Span,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Location in the source code.
        span: Span,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Location in the source code.
        span: Span,
    },
    /// A binary operation.
    Binary(BinaryExpression),
    /// Function call expression (e.g. `date(2024, 1, 1)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Location in the source code.
        span:      Span,
    },
    /// List literal expression (`[1, 2, 3]`).
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Location in the source code.
        span:     Span,
    },
}

impl Expr {
    /// Returns the source span of `self`.
    ///
    /// ## Example
    /// ```
    /// use quill::ast::{Expr, Span};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             span: Span::new(3, 4, 5), };
    ///
    /// assert_eq!(expr.span().line, 5);
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. }
            | Self::Variable { span, .. }
            | Self::Unary { span, .. }
            | Self::Call { span, .. }
            | Self::List { span, .. } => *span,
            Self::Binary(binary) => binary.span,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Unary { op, expr, .. } => match expr.as_ref() {
                Self::Binary(_) => write!(f, "{op}({expr})"),
                _ => write!(f, "{op}{expr}"),
            },
            Self::Binary(binary) => write!(f, "{binary}"),
            Self::Call { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::List { elements, .. } => {
                write!(f, "[")?;
                write_comma_separated(f, elements)?;
                write!(f, "]")
            },
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A binary operator node: `left op right`.
///
/// Owns both operand expressions. Evaluation lives in
/// [`crate::interpreter::evaluator::binary`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    /// Left operand.
    pub left:  Box<Expr>,
    /// The operator.
    pub op:    BinaryOperator,
    /// Right operand.
    pub right: Box<Expr>,
    /// Location of the whole expression.
    pub span:  Span,
}

impl BinaryExpression {
    /// Creates a binary node whose span covers both operands.
    #[must_use]
    pub fn new(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        let span = left.span().to(right.span());
        Self { left: Box::new(left),
               op,
               right: Box::new(right),
               span }
    }
}

impl From<BinaryExpression> for Expr {
    fn from(binary: BinaryExpression) -> Self {
        Self::Binary(binary)
    }
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
            match expr {
                Expr::Binary(_) => write!(f, "({expr})"),
                _ => write!(f, "{expr}"),
            }
        }

        operand(f, &self.left)?;
        write!(f, " {} ", self.op)?;
        operand(f, &self.right)
    }
}

/// Represents a binary operator.
///
/// Operators are stateless tags. `ShiftLeft`/`ShiftRight` append and prepend
/// to lists rather than shifting bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`), always produces a float.
    Divide,
    /// Truncating division (`//`)
    DivideRound,
    /// Remainder (`%`)
    Modulus,
    /// Equal to (`==`)
    CompareEqual,
    /// Not equal to (`!=`)
    CompareNotEqual,
    /// Greater than (`>`)
    CompareGreater,
    /// Less than (`<`)
    CompareLess,
    /// Greater than or equal (`>=`)
    CompareGreaterOrEqual,
    /// Less than or equal (`<=`)
    CompareLessOrEqual,
    /// Inclusive range (`..`)
    RangeInclude,
    /// Exclusive range (`..<`)
    RangeExclude,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Null coalescing (`??`)
    EmptyCoalescing,
    /// List append (`<<`)
    ShiftLeft,
    /// List prepend (`>>`)
    ShiftRight,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::DivideRound => "//",
            Self::Modulus => "%",
            Self::CompareEqual => "==",
            Self::CompareNotEqual => "!=",
            Self::CompareGreater => ">",
            Self::CompareLess => "<",
            Self::CompareGreaterOrEqual => ">=",
            Self::CompareLessOrEqual => "<=",
            Self::RangeInclude => "..",
            Self::RangeExclude => "..<",
            Self::And => "&&",
            Self::Or => "||",
            Self::EmptyCoalescing => "??",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        }
    }

    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::CompareEqual
                 | Self::CompareNotEqual
                 | Self::CompareGreater
                 | Self::CompareLess
                 | Self::CompareGreaterOrEqual
                 | Self::CompareLessOrEqual)
    }

    /// Returns `true` for operators routed through the string overloads or
    /// the promotion ladder: comparisons, arithmetic and ranges.
    #[must_use]
    pub const fn is_calculation(self) -> bool {
        self.is_comparison()
        || matches!(self,
                    Self::Add
                    | Self::Subtract
                    | Self::Multiply
                    | Self::Divide
                    | Self::DivideRound
                    | Self::Modulus
                    | Self::RangeInclude
                    | Self::RangeExclude)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
