//! Scanner error type.

use std::fmt;

use rill_diagnostic::{Diagnostic, ErrorCode, Stage};
use rill_ir::Pos;

/// A lexical error: what went wrong, and exactly where.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LexError {
    pub code: ErrorCode,
    pub message: String,
    pub pos: Pos,
}

impl LexError {
    pub fn new(code: ErrorCode, message: impl Into<String>, pos: Pos) -> Self {
        LexError {
            code,
            message: message.into(),
            pos,
        }
    }

    /// Convert to the renderable form used by the CLI.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Stage::Lexical, self.code, self.message.clone()).at(self.pos)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.pos)
    }
}

impl std::error::Error for LexError {}
