//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses recursive descent with one
//! function per precedence level and handles:
//!
//! - Expression parsing (equality down to primary), left-associative
//!   binary levels by iteration, right-associative unary by recursion
//! - Statement parsing (variable declarations, print, expression and
//!   empty statements)
//! - Panic-mode recovery at statement boundaries, so one malformed
//!   declaration does not hide errors in the rest of the input
//!
//! Grammar failures are values: every level returns a `Result` and the
//! entry points decide what a failure means to the caller.

pub mod expr;
pub mod parser;
pub mod stmt;
