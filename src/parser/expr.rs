//! Expression grammar, one function per precedence level.
//!
//! Each binary level parses the next-higher level, then folds same-level
//! operators left-to-right. `unary` recurses on itself, making prefix
//! operators right-associative. Recursion depth is bounded by the
//! nesting depth of the input.

use crate::{
    ast::expr::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::parser::Parser;

/// The lowest-precedence level, the expression grammar's entry point.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_equality(parser)
}

pub fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_comparison(parser)?;

    while parser.match_any(&[TokenKind::BangEquals, TokenKind::Equals]) {
        let operator = parser.previous().clone();
        let right = parse_comparison(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_term(parser)?;

    while parser.match_any(&[
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
    ]) {
        let operator = parser.previous().clone();
        let right = parse_term(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_factor(parser)?;

    while parser.match_any(&[TokenKind::Dash, TokenKind::Plus]) {
        let operator = parser.previous().clone();
        let right = parse_factor(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_unary(parser)?;

    while parser.match_any(&[TokenKind::Slash, TokenKind::Star]) {
        let operator = parser.previous().clone();
        let right = parse_unary(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

pub fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_any(&[TokenKind::Bang, TokenKind::Dash]) {
        let operator = parser.previous().clone();
        let operand = parse_unary(parser)?;
        return Ok(Expr::Unary {
            operator,
            operand: Box::new(operand),
        });
    }

    parse_primary(parser)
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_any(&[TokenKind::False]) {
        return Ok(Expr::Literal(Literal::Bool(false)));
    }
    if parser.match_any(&[TokenKind::True]) {
        return Ok(Expr::Literal(Literal::Bool(true)));
    }
    if parser.match_any(&[TokenKind::Nil]) {
        return Ok(Expr::Literal(Literal::Nil));
    }

    if parser.match_any(&[TokenKind::Number, TokenKind::String]) {
        // The scanner always attaches a literal to these token kinds.
        let value = parser.previous().literal.clone().unwrap_or(Literal::Nil);
        return Ok(Expr::Literal(value));
    }

    if parser.match_any(&[TokenKind::OpenParen]) {
        let inner = parse_expr(parser)?;
        parser.consume(
            TokenKind::CloseParen,
            ErrorImpl::UnexpectedToken {
                message: String::from("Expect ')' after expression."),
            },
        )?;
        return Ok(Expr::Grouping(Box::new(inner)));
    }

    Err(parser.log_error(ErrorImpl::ExpectedExpression))
}
