//! Recursive descent parser for rill.
//!
//! Consumes the token stream the lexer produced and builds the [`Program`]
//! tree. Lookahead is a plain index into the buffered stream, so statement
//! disambiguation (assignment vs. call, `elif` after a block) never mutates
//! and restores scanner state.
//!
//! Statements are separated by newlines, but the separator carries no
//! information the grammar cannot recover: blank lines between statements
//! are skipped freely, and a statement simply ends where the next one must
//! begin. The one place newlines decide the parse is `give`, where a
//! directly following newline or `}` means give-with-no-value.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use rill_ir::{Program, Token};
use tracing::debug;

/// Parser state: a cursor over the token stream.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a scanned token stream.
    ///
    /// The stream must end with an `Eof` token (see `rill_lexer::tokenize`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse a whole program: one top-level block, then end of input.
    ///
    /// Fails on the first unexpected token, including trailing tokens after
    /// the closing `}`.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let program = self.program()?;
        debug!(
            statements = program.block.statements.len(),
            "parsed program"
        );
        Ok(program)
    }
}

/// Parse a scanned token stream into a program.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
