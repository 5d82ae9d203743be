/// Numeric conversion helpers.
///
/// This module holds the narrowing conversions the evaluator relies on:
/// truncation of floating quotients through a 32-bit integer, banker's
/// rounding of floats into integers, and range-checked integer narrowing.
///
/// Conversions that can fail return `Option` and leave the choice of error
/// to the caller, which knows the span and the values involved.
pub mod num;
