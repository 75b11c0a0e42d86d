//! Runtime error type.

use std::fmt;

use rill_diagnostic::{Diagnostic, ErrorCode, Stage};

/// A fatal error raised during the interpreter walk.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RuntimeError {
    pub code: ErrorCode,
    pub message: String,
}

impl RuntimeError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        RuntimeError {
            code,
            message: message.into(),
        }
    }

    /// Convert to the renderable form used by the CLI.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Stage::Runtime, self.code, self.message.clone())
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RuntimeError {}
