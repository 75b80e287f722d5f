//! Parenthesized printing for AST nodes.
//!
//! One exhaustive match per node set; the output makes operator grouping
//! explicit, so tests can assert on tree shape through it:
//! `1 + 2 * 3` prints as `(+ 1 (* 2 3))`.

use super::{expr::Expr, stmt::Stmt};

pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => value.to_string(),
        Expr::Grouping(inner) => format!("(group {})", print_expr(inner)),
        Expr::Unary { operator, operand } => {
            format!("({} {})", operator.lexeme, print_expr(operand))
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => format!(
            "({} {} {})",
            operator.lexeme,
            print_expr(left),
            print_expr(right)
        ),
    }
}

pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Empty => String::from("(;)"),
        Stmt::Expression(expression) => format!("(; {})", print_expr(expression)),
        Stmt::Print(expression) => format!("(print {})", print_expr(expression)),
        Stmt::Var { name, initializer } => match initializer {
            Some(value) => format!("(var {} = {})", name.lexeme, print_expr(value)),
            None => format!("(var {})", name.lexeme),
        },
    }
}
