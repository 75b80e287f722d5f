#![allow(clippy::module_inception)]

//! A parsing front end for the Lox scripting language.
//!
//! The crate is split into the stages a source string passes through:
//!
//! - `lexer` turns source text into a token stream
//! - `parser` turns the token stream into an AST
//! - `ast` holds the node definitions and a parenthesized printer
//! - `errors` holds the shared error type and diagnostic formatting
//!
//! Evaluation is out of scope: the parser produces trees, a downstream
//! consumer walks them.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
