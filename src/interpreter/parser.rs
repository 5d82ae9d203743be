/// Parser entry points.
///
/// Contains the `ParseResult` alias, the top-level [`core::parse`] function
/// that rejects trailing input, and [`core::parse_expression`].
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from null coalescing down to the
/// multiplicative operators. All levels are left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `-` and `!`, literals, identifiers, calls, list literals
/// and parenthesized expressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several grammar rules.
pub mod utils;
