/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and computes a value for each node. Binary
/// nodes go through operand evaluation, operator dispatch and the promotion
/// ladder; everything else is handled by the reference context.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables, builtins and host functions.
/// - Reports runtime errors such as unsupported operand types or failed
///   conversions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid input or out-of-range literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of a single expression.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Applies operator precedence and associativity.
/// - Validates grammar, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution: integers and floats of two widths, booleans, strings, dates,
/// time spans, lists, ranges, enums and host objects. It also provides typed
/// conversion and stringification.
///
/// # Responsibilities
/// - Defines the `Value` enum and its `ValueKind` tags.
/// - Implements conversions between kinds.
/// - Defines lazy ranges and the host object capability trait.
pub mod value;
