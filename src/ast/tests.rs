//! Unit tests for the AST printer and literal display.

use crate::lexer::tokens::{Literal, Token, TokenKind};
use crate::MK_TOKEN;

use super::expr::Expr;
use super::printer::{print_expr, print_stmt};
use super::stmt::Stmt;

fn operator(kind: TokenKind, lexeme: &str) -> Token {
    MK_TOKEN!(kind, String::from(lexeme), 1)
}

#[test]
fn test_literal_number_display_trims_integral_values() {
    assert_eq!(Literal::Number(1.0).to_string(), "1");
    assert_eq!(Literal::Number(2.5).to_string(), "2.5");
}

#[test]
fn test_literal_number_display_outside_i64_range() {
    // Must not saturate to 9223372036854775807.
    assert_eq!(Literal::Number(1e300).to_string(), 1e300_f64.to_string());
    assert_eq!(Literal::Number(-1e300).to_string(), (-1e300_f64).to_string());
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Bool(true).to_string(), "true");
    assert_eq!(Literal::Nil.to_string(), "nil");
    assert_eq!(Literal::String(String::from("hi")).to_string(), "hi");
}

#[test]
fn test_print_nested_expression() {
    // -123 * (45.5), built by hand
    let expr = Expr::Binary {
        left: Box::new(Expr::Unary {
            operator: operator(TokenKind::Dash, "-"),
            operand: Box::new(Expr::Literal(Literal::Number(123.0))),
        }),
        operator: operator(TokenKind::Star, "*"),
        right: Box::new(Expr::Grouping(Box::new(Expr::Literal(Literal::Number(
            45.5,
        ))))),
    };

    assert_eq!(print_expr(&expr), "(* (- 123) (group 45.5))");
}

#[test]
fn test_print_statements() {
    let one = Expr::Literal(Literal::Number(1.0));

    assert_eq!(print_stmt(&Stmt::Empty), "(;)");
    assert_eq!(print_stmt(&Stmt::Expression(one.clone())), "(; 1)");
    assert_eq!(print_stmt(&Stmt::Print(one.clone())), "(print 1)");
    assert_eq!(
        print_stmt(&Stmt::Var {
            name: MK_TOKEN!(TokenKind::Identifier, String::from("a"), 1),
            initializer: Some(one),
        }),
        "(var a = 1)"
    );
    assert_eq!(
        print_stmt(&Stmt::Var {
            name: MK_TOKEN!(TokenKind::Identifier, String::from("b"), 1),
            initializer: None,
        }),
        "(var b)"
    );
}
