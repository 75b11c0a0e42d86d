//! Error codes for all pipeline diagnostics.
//!
//! Each code is a unique identifier whose leading letter names the stage that
//! raised it:
//! - `L###`: lexical errors
//! - `S###`: syntax errors
//! - `M###`: semantic errors
//! - `R###`: runtime errors

use std::fmt;

/// Error codes for all pipeline diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical errors (L###)
    /// Character outside the language's alphabet.
    InvalidCharacter,
    /// String literal missing its closing quote or containing a raw newline.
    UnterminatedString,
    /// Malformed numeric literal.
    InvalidNumber,

    // Syntax errors (S###)
    /// Found a token the grammar does not allow here.
    UnexpectedToken,
    /// Declaration name list and initializer list differ in length.
    WrongNumberOfExpressions,

    // Semantic errors (M###)
    /// Reference to a name with no declaration in any enclosing scope.
    UndeclaredIdentifier,
    /// Second declaration of a name in the same scope.
    DuplicateIdentifier,
    /// A name used where a different kind of symbol is required.
    WrongSymbolKind,
    /// Call with the wrong number of arguments.
    WrongNumberOfArguments,
    /// Assignment target is a constant.
    AssignmentToConstant,
    /// `give` without a value inside a function.
    FunctionEmptyGive,
    /// `give` with a value inside a procedure.
    ProcedureGivingValue,
    /// `skip` with no enclosing `while`.
    SkipOutsideWhile,
    /// `stop` with no enclosing `while`.
    StopOutsideWhile,
    /// `give` with no enclosing function or procedure.
    GiveOutsideCallable,

    // Runtime errors (R###)
    /// Identifier missing from the current frame (backstop for unanalyzed
    /// trees).
    UndefinedIdentifier,
    /// Division or modulo with a zero right operand.
    DivisionByZero,
    /// Operator applied to operands it is not defined for.
    InvalidOperation,
    /// Checked integer arithmetic overflowed.
    IntegerOverflow,
    /// Function completed without giving a value, or gave an empty `give`.
    FunctionGaveNothing,
    /// Procedure gave a value.
    ProcedureGaveValue,
}

impl ErrorCode {
    /// The stable code string, e.g. `M003`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidCharacter => "L001",
            ErrorCode::UnterminatedString => "L002",
            ErrorCode::InvalidNumber => "L003",
            ErrorCode::UnexpectedToken => "S001",
            ErrorCode::WrongNumberOfExpressions => "S002",
            ErrorCode::UndeclaredIdentifier => "M001",
            ErrorCode::DuplicateIdentifier => "M002",
            ErrorCode::WrongSymbolKind => "M003",
            ErrorCode::WrongNumberOfArguments => "M004",
            ErrorCode::AssignmentToConstant => "M005",
            ErrorCode::FunctionEmptyGive => "M006",
            ErrorCode::ProcedureGivingValue => "M007",
            ErrorCode::SkipOutsideWhile => "M008",
            ErrorCode::StopOutsideWhile => "M009",
            ErrorCode::GiveOutsideCallable => "M010",
            ErrorCode::UndefinedIdentifier => "R001",
            ErrorCode::DivisionByZero => "R002",
            ErrorCode::InvalidOperation => "R003",
            ErrorCode::IntegerOverflow => "R004",
            ErrorCode::FunctionGaveNothing => "R005",
            ErrorCode::ProcedureGaveValue => "R006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_by_stage_letter() {
        assert!(ErrorCode::InvalidCharacter.as_str().starts_with('L'));
        assert!(ErrorCode::UnexpectedToken.as_str().starts_with('S'));
        assert!(ErrorCode::AssignmentToConstant.as_str().starts_with('M'));
        assert!(ErrorCode::DivisionByZero.as_str().starts_with('R'));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            format!("{}", ErrorCode::DuplicateIdentifier),
            ErrorCode::DuplicateIdentifier.as_str()
        );
    }
}
