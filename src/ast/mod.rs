//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - expr: Definitions for the expression node variants
//! - stmt: Definitions for the statement node variants
//! - printer: Parenthesized printing of whole trees
//!
//! The node sets are closed enums; a whole-tree operation is a single
//! function matching exhaustively over the variants, so adding an
//! operation never touches the node definitions.
pub mod expr;
pub mod printer;
pub mod stmt;

#[cfg(test)]
mod tests;
