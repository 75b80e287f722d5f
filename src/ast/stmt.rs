use crate::lexer::tokens::Token;

use super::expr::Expr;

/// A statement node.
///
/// The statement vocabulary exists for downstream consumers even though
/// the single-expression parser entry point never produces one; the
/// statement-sequence entry point produces these.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A bare semicolon.
    Empty,
    /// Evaluate and discard.
    Expression(Expr),
    /// Evaluate and emit.
    Print(Expr),
    /// Declare a binding, optionally initialized.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
}
