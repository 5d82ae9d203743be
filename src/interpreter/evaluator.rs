/// The evaluation-context seam.
///
/// Declares [`context::EvalContext`], the collaborator the binary-operator
/// core calls back into for sub-expression evaluation and coercions.
pub mod context;

/// Reference evaluation context.
///
/// Contains [`core::Context`], variable and native-function storage, and the
/// `EvalResult` alias used throughout the evaluator.
pub mod core;

/// Binary operator evaluation.
///
/// Operand evaluation, operator dispatch, the promotion ladder and the
/// per-type handlers.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT for the reference context.
pub mod unary;

/// Built-in functions of the reference context.
///
/// Date and time-span constructors.
pub mod function;
