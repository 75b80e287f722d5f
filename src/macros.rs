//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// The three-argument form produces a token with no literal value; the
/// four-argument form attaches one (number and string tokens).
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, String::from("+"), 1);
/// let token = MK_TOKEN!(TokenKind::Number, String::from("42"), 1, Literal::Number(42.0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: None,
            line: $line,
        }
    };
    ($kind:expr, $lexeme:expr, $line:expr, $literal:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: Some($literal),
            line: $line,
        }
    };
}

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            let line = lexer.line();
            lexer.push(MK_TOKEN!($kind, String::from($value), line));
            lexer.advance_n($value.len());
        }
    };
}
