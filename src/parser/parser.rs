//! Parser state and token-cursor primitives.
//!
//! The `Parser` owns the token vector, a monotonically increasing read
//! cursor, and the diagnostics collected so far. The grammar itself
//! lives in free functions (`expr.rs`, `stmt.rs`) that thread the
//! parser through the descent by exclusive reference, so there is no
//! hidden shared state between recursive calls.

use crate::{
    ast::{expr::Expr, stmt::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, stmt::parse_declaration};

/// The main parser structure.
///
/// A fresh `Parser` is constructed per input; instances are never shared
/// between parses. The token vector is assumed to be terminated by
/// exactly one EOF token, which is the only end-of-stream signal the
/// cursor primitives look at.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics reported so far, in source order
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance over a token vector.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            errors: vec![],
        }
    }

    /// Parses a single expression.
    ///
    /// Any grammar failure maps to `None`; the error was already reported
    /// through the diagnostics channel at the point of failure. Callers
    /// distinguish "empty input" from "parse error" via `error_count`.
    pub fn parse_expression(&mut self) -> Option<Expr> {
        parse_expr(self).ok()
    }

    /// Parses a sequence of declarations until end-of-stream.
    ///
    /// On a grammar failure the parser synchronizes to the next statement
    /// boundary and keeps going, so several independent errors can be
    /// reported from one call. Callers inspect `had_error` before handing
    /// the statements to a consumer.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut statements = vec![];

        while !self.is_completed() {
            match parse_declaration(self) {
                Ok(stmt) => statements.push(stmt),
                Err(_) => self.synchronize(),
            }
        }

        statements
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the most recently consumed token.
    ///
    /// Safe to call before any token has been consumed: the index clamps
    /// to the first token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Advances to the next token unless already at end-of-stream, and
    /// returns the token just passed.
    pub fn advance(&mut self) -> &Token {
        if !self.is_completed() {
            self.pos += 1;
        }

        self.previous()
    }

    /// Returns true iff not at end-of-stream and the current token has
    /// the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_completed() && self.peek().kind == kind
    }

    /// If the current token's kind is among `kinds`, advances and returns
    /// true; otherwise returns false without advancing.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }

        false
    }

    /// True when the current token is the EOF marker.
    pub fn is_completed(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }

    /// Expects the current token to have the given kind.
    ///
    /// On a match the token is consumed and returned; on a mismatch the
    /// given error is reported against the current token and returned for
    /// propagation.
    pub fn consume(&mut self, kind: TokenKind, error_impl: ErrorImpl) -> Result<Token, Error> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.log_error(error_impl))
        }
    }

    /// Reports an error against the current token: emits the diagnostic
    /// line, records the error, and returns it for propagation.
    pub fn log_error(&mut self, error_impl: ErrorImpl) -> Error {
        let error = Error::at_token(error_impl, self.peek());
        eprintln!("{}", error.report());
        self.errors.push(error.clone());
        error
    }

    /// Discards tokens until just past a statement boundary.
    ///
    /// A boundary is the token after a semicolon, or a token that begins
    /// a new declaration.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_completed() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Diagnostics reported so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}
