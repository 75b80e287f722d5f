//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Source line tracking for error reporting
//! - Comments and whitespace handling
//!
//! The token stream is always terminated by exactly one EOF token, which
//! is how the parser detects end-of-stream.

pub mod lexer;
pub mod tokens;
