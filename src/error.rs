/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// expression source text.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree: unsupported operator/type combinations, failed
/// coercions, arithmetic faults and reference-context lookups.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
