//! Parser error type.

use std::fmt;

use rill_diagnostic::{Diagnostic, ErrorCode, Stage};
use rill_ir::{Pos, Token};

/// A syntax error: what the parser wanted, what it found, and where.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub pos: Pos,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, pos: Pos) -> Self {
        ParseError {
            code,
            message: message.into(),
            pos,
        }
    }

    /// The standard expected-vs-found error at `found`'s position.
    pub fn unexpected(expected: &str, found: &Token) -> Self {
        ParseError::new(
            ErrorCode::UnexpectedToken,
            format!("expected {expected}, found {}", found.kind.describe()),
            found.pos,
        )
    }

    /// Convert to the renderable form used by the CLI.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Stage::Syntax, self.code, self.message.clone()).at(self.pos)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.pos)
    }
}

impl std::error::Error for ParseError {}
