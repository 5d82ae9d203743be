/// Operand evaluation and top-level operator dispatch.
///
/// Evaluates both operands unconditionally, then routes the operator to
/// coalescing, logic, shift, string or numeric evaluation. Also holds the
/// shared error constructors and comparison helper.
pub mod core;

/// `??`, `&&` and `||`.
pub mod logic;

/// List append (`<<`) and prepend (`>>`).
pub mod shift;

/// String concatenation, repetition and ordinal comparison.
pub mod string;

/// The promotion ladder: picks the common type of two operands and
/// dispatches to its handler.
pub mod promotion;

/// `int` and `long` handlers.
pub mod integer;

/// `float` and `double` handlers.
pub mod float;

/// `bool` handler (equality only).
pub mod boolean;

/// Date and time-span handlers.
pub mod date;

/// Range generation for the `int` handler.
pub mod range;
