//! Scanner for rill.
//!
//! Hand-written state machine over the source characters. [`Lexer`] produces
//! one [`Token`] per call to [`Lexer::next_token`]; [`tokenize`] drives it to
//! the end of input and returns the whole stream, terminated by an `Eof`
//! token.
//!
//! Newlines are significant (they separate statements) and become `Newline`
//! tokens, with directly consecutive newline characters collapsed into one.
//! All other whitespace and `#` line comments are skipped.

mod error;
mod keywords;
mod scanner;

pub use error::LexError;
pub use scanner::Lexer;

use rill_ir::{Token, TokenKind};

/// Scan an entire source text into a token stream.
///
/// The returned stream always ends with a single `Eof` token. Stops at the
/// first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
