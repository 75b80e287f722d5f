use crate::lexer::tokens::{Literal, Token};

/// An expression node.
///
/// Nodes are immutable after construction and exclusively own their
/// children, so every tree is a strict tree: no sharing, no cycles.
/// The parser guarantees that `Unary` and `Binary` operator tokens are
/// kinds valid at their grammar level.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value, taken from a literal token or keyword.
    Literal(Literal),
    /// A parenthesized sub-expression.
    Grouping(Box<Expr>),
    /// A prefix operation (`!`, `-`).
    Unary { operator: Token, operand: Box<Expr> },
    /// An infix operation.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
}
