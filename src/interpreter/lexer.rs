use logos::Logos;

use crate::{ast::Span, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Double precision literals, such as `3.14` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_double)]
    Double(f64),
    /// Single precision literals, such as `1.5f`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fF]", parse_float)]
    #[regex(r"[0-9]+[fF]", parse_float)]
    Float(f32),
    /// `42L`
    #[regex(r"[0-9]+[lL]", parse_long)]
    Long(i64),
    /// Integer literal tokens, such as `42`.
    ///
    /// The parser narrows them to `int` when they fit.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Double-quoted strings with `\"`, `\\`, `\n` and `\t` escapes.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `and`, `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `or`, `||`
    #[token("or")]
    #[token("||")]
    Or,
    /// Identifier tokens; variable or function names such as `x` or `date`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `??`
    #[token("??")]
    DoubleQuestion,
    /// `...`, `..<`
    #[token("...")]
    #[token("..<")]
    DotDotLess,
    /// `..`
    #[token("..")]
    DotDot,
    /// `<<`
    #[token("<<")]
    LessLess,
    /// `>>`
    #[token(">>")]
    GreaterGreater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Splits `source` into tokens paired with their spans.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// - `Ok(Vec<(Token, Span)>)`: Every token in source order.
/// - `Err(ParseError::LiteralOutOfRange)`: If a numeric literal does not fit
///   its type.
/// - `Err(ParseError::UnexpectedToken)`: For any other unrecognized input.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 ..< 3L").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds, vec![Token::Integer(1), Token::DotDotLess, Token::Long(3)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Span)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let slice = lexer.slice();
        // Multi-line strings advance the counter inside their callback.
        let line = lexer.extras.line - slice.matches('\n').count();
        let span = Span::new(range.start, range.end, line);

        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) if slice.starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(ParseError::LiteralOutOfRange { literal: slice.to_string(),
                                                           span });
            },
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         span });
            },
        }
    }

    Ok(tokens)
}

/// Parses a double precision literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_double(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an `f`-suffixed literal.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f32> {
    without_suffix(lex.slice()).parse().ok()
}

/// Parses an `L`-suffixed literal.
fn parse_long(lex: &logos::Lexer<Token>) -> Option<i64> {
    without_suffix(lex.slice()).parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in 64 bits.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Drops the one-letter type suffix of a numeric literal.
fn without_suffix(slice: &str) -> &str {
    &slice[..slice.len() - 1]
}

/// Strips the quotes from a string literal and resolves its escapes.
///
/// # Returns
/// - `Some(String)`: The unescaped text.
/// - `None`: If the literal contains an unknown escape.
fn parse_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let mut text = String::with_capacity(slice.len());
    let mut chars = slice[1..slice.len() - 1].chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next()? {
            '"' => text.push('"'),
            '\\' => text.push('\\'),
            'n' => text.push('\n'),
            't' => text.push('\t'),
            _ => return None,
        }
    }
    Some(text)
}
