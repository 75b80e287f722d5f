//! Statement grammar.
//!
//! declaration -> var_decl | statement
//! var_decl    -> "var" IDENTIFIER ( "=" expression )? ";"
//! statement   -> ";" | "print" expression ";" | expression ";"

use crate::{
    ast::stmt::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.match_any(&[TokenKind::Var]) {
        return parse_var_decl_stmt(parser);
    }

    parse_statement(parser)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.consume(
        TokenKind::Identifier,
        ErrorImpl::UnexpectedToken {
            message: String::from("Expect variable name."),
        },
    )?;

    let initializer = if parser.match_any(&[TokenKind::Assignment]) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.consume(
        TokenKind::Semicolon,
        ErrorImpl::UnexpectedToken {
            message: String::from("Expect ';' after variable declaration."),
        },
    )?;

    Ok(Stmt::Var { name, initializer })
}

pub fn parse_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    // A bare semicolon is a no-op statement.
    if parser.match_any(&[TokenKind::Semicolon]) {
        return Ok(Stmt::Empty);
    }

    if parser.match_any(&[TokenKind::Print]) {
        return parse_print_stmt(parser);
    }

    let expression = parse_expr(parser)?;

    parser.consume(
        TokenKind::Semicolon,
        ErrorImpl::UnexpectedToken {
            message: String::from("Expect ';' after expression."),
        },
    )?;

    Ok(Stmt::Expression(expression))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let value = parse_expr(parser)?;

    parser.consume(
        TokenKind::Semicolon,
        ErrorImpl::UnexpectedToken {
            message: String::from("Expect ';' after value."),
        },
    )?;

    Ok(Stmt::Print(value))
}
