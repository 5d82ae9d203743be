use std::{collections::HashMap, fmt};

use tracing::trace;

use crate::{
    ast::{Expr, LiteralValue, Span},
    error::RuntimeError,
    interpreter::{
        evaluator::{context::EvalContext, function::builtin},
        value::core::{DEFAULT_DATE_FORMAT, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A host function callable from expressions.
///
/// Receives the evaluated arguments and the span of the call.
pub type NativeFunction = Box<dyn FnMut(&[Value], Span) -> EvalResult<Value>>;

/// Stores the runtime evaluation context.
///
/// `Context` is the reference implementation of [`EvalContext`]: it resolves
/// variables, calls registered native functions and builtins, evaluates
/// unary operators, and hands binary nodes to the binary-operator core.
///
/// ## Usage
///
/// Create a context once, populate variables and functions, then evaluate
/// any number of expressions against it.
///
/// ```
/// use quill::{interpreter::{evaluator::core::Context, value::core::Value}, parse_source};
///
/// let mut context = Context::new();
/// context.set_variable("price", Value::Int(40));
///
/// let expr = parse_source("price * 2 + 2").unwrap();
/// assert_eq!(context.eval(&expr).unwrap(), Value::Int(82));
/// ```
pub struct Context {
    /// Variables visible to expressions.
    pub variables: HashMap<String, Value>,
    functions:     HashMap<String, NativeFunction>,
    date_format:   String,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
         .field("variables", &self.variables)
         .field("functions", &self.functions.keys().collect::<Vec<_>>())
         .field("date_format", &self.date_format)
         .finish()
    }
}

impl Context {
    /// Creates a context with no variables, no registered functions and the
    /// default date format.
    #[must_use]
    pub fn new() -> Self {
        Self { variables:   HashMap::new(),
               functions:   HashMap::new(),
               date_format: DEFAULT_DATE_FORMAT.to_string(), }
    }

    /// Sets the strftime-style format used when dates are stringified.
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::evaluator::core::Context, parse_source};
    ///
    /// let mut context = Context::new().with_date_format("%Y-%m-%d");
    /// let expr = parse_source(r#""on " + date(2024, 3, 9)"#).unwrap();
    ///
    /// assert_eq!(context.eval(&expr).unwrap().to_string(), "on 2024-03-09");
    /// ```
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// The strftime-style format used when dates are stringified.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Registers a native function. Registered functions shadow builtins of
    /// the same name.
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::{evaluator::core::Context, value::core::Value}, parse_source};
    ///
    /// let mut context = Context::new();
    /// context.register_function("twice", |args, _span| {
    ///            Ok(Value::list(vec![args[0].clone(), args[0].clone()]))
    ///        });
    ///
    /// let expr = parse_source("twice(1) << 2").unwrap();
    /// assert_eq!(context.eval(&expr).unwrap().to_string(), "[1, 1, 2]");
    /// ```
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F)
        where F: FnMut(&[Value], Span) -> EvalResult<Value> + 'static
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Literals,
    /// variables, lists and calls are handled here; unary nodes go to
    /// `eval_unary` and binary nodes to [`crate::ast::BinaryExpression::evaluate`].
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, span } => self.eval_variable(name, *span),
            Expr::Unary { op, expr, span } => self.eval_unary(*op, expr, *span),
            Expr::Binary(binary) => binary.evaluate(self),
            Expr::Call { name,
                         arguments,
                         span, } => self.eval_call(name, arguments, *span),
            Expr::List { elements, .. } => {
                let items = elements.iter()
                                    .map(|element| self.eval(element))
                                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::list(items))
            },
        }
    }

    /// Converts a literal to its runtime value.
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        match value {
            LiteralValue::Null => Value::Null,
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Int(n) => Value::Int(*n),
            LiteralValue::Long(n) => Value::Long(*n),
            LiteralValue::Float(x) => Value::Float(*x),
            LiteralValue::Double(x) => Value::Double(*x),
            LiteralValue::String(s) => Value::String(s.clone()),
        }
    }

    fn eval_variable(&self, name: &str, span: Span) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           span })
    }

    /// Evaluates a call: arguments left to right, then the registered
    /// function or builtin.
    fn eval_call(&mut self, name: &str, arguments: &[Expr], span: Span) -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        if let Some(function) = self.functions.get_mut(name) {
            trace!(name, "calling native function");
            return function(&args, span);
        }

        match builtin(name) {
            Some(function) => function(&args, span),
            None => Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                        span }),
        }
    }
}

impl EvalContext for Context {
    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)
    }

    fn coerce_to_string(&self, _span: Span, value: &Value) -> String {
        value.render(&self.date_format)
    }
}
