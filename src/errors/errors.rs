use thiserror::Error;

use crate::lexer::tokens::Token;

/// A scanning or parsing failure tied to a source location.
///
/// The location string is what diagnostics cite: the offending token's
/// lexeme, or `end` when the failure happened at the EOF token.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
    location: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32, location: String) -> Self {
        Error {
            internal_error: error_impl,
            line,
            location,
        }
    }

    /// Builds an error citing a token, deriving line and location from it.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error {
            internal_error: error_impl,
            line: token.line,
            location: token.location(),
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_location(&self) -> &str {
        &self.location
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::ExpectedExpression => "ExpectedExpression",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    /// The phase that produced the error, used as the diagnostic prefix.
    pub fn get_stage(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::UnterminatedString => "scanner",
            ErrorImpl::ExpectedExpression | ErrorImpl::UnexpectedToken { .. } => "parser",
        }
    }

    /// Formats the single-line diagnostic for this error.
    ///
    /// The shape is an observable contract:
    /// `(parser)[line: <line> at <location>] error: <message>`
    pub fn report(&self) -> String {
        format!(
            "({})[line: {} at {}] error: {}",
            self.get_stage(),
            self.line,
            self.location,
            self.internal_error
        )
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("Unexpected character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Expression expected")]
    ExpectedExpression,
    #[error("{message}")]
    UnexpectedToken { message: String },
}
