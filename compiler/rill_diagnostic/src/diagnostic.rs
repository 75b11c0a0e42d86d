//! The rendered form of a stage error.

use std::fmt;

use rill_ir::Pos;

use crate::ErrorCode;

/// Which pipeline stage raised a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
    Runtime,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexical => write!(f, "lexical error"),
            Stage::Syntax => write!(f, "syntax error"),
            Stage::Semantic => write!(f, "semantic error"),
            Stage::Runtime => write!(f, "runtime error"),
        }
    }
}

/// A single renderable error.
///
/// Lexical and syntax errors carry the position of the offending character or
/// token; semantic and runtime errors are structural checks and carry none.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub stage: Stage,
    pub code: ErrorCode,
    pub message: String,
    pub pos: Option<Pos>,
}

impl Diagnostic {
    pub fn new(stage: Stage, code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            stage,
            code,
            message: message.into(),
            pos: None,
        }
    }

    /// Attach a source position.
    #[must_use]
    pub fn at(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.stage, self.code, self.message)?;
        if let Some(pos) = self.pos {
            write!(f, " at {pos}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_stage_code_and_message() {
        let diag = Diagnostic::new(
            Stage::Semantic,
            ErrorCode::DuplicateIdentifier,
            "Variable 'x' already declared in this scope",
        );
        assert_eq!(
            format!("{diag}"),
            "semantic error[M002]: Variable 'x' already declared in this scope"
        );
    }

    #[test]
    fn renders_position_when_present() {
        let diag = Diagnostic::new(
            Stage::Lexical,
            ErrorCode::InvalidCharacter,
            "Invalid character: '@'",
        )
        .at(Pos::new(4, 1, 5));
        assert_eq!(
            format!("{diag}"),
            "lexical error[L001]: Invalid character: '@' at position 4 (line 1, column 5)"
        );
    }
}
