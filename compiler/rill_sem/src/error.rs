//! Semantic error type.
//!
//! Semantic violations are structural rather than positional (a duplicate
//! name, a call with the wrong arity), so the error carries a code and a
//! descriptive message but no source position.

use std::fmt;

use rill_diagnostic::{Diagnostic, ErrorCode, Stage};

/// A semantic rule violation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SemError {
    pub code: ErrorCode,
    pub message: String,
}

impl SemError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SemError {
            code,
            message: message.into(),
        }
    }

    /// Convert to the renderable form used by the CLI.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Stage::Semantic, self.code, self.message.clone())
    }
}

impl fmt::Display for SemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SemError {}
