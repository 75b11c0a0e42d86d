//! Token types for the rill scanner.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Pos;

/// A token with the position of its first character.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Token { kind, pos }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}
