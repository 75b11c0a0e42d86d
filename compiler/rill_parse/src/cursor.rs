//! Token cursor for navigating the token stream.
//!
//! The whole stream is scanned up front, so lookahead is a plain index
//! offset; nothing is ever rolled back. The stream invariant (established by
//! the lexer) is that the final token is `Eof`, and the cursor never moves
//! past it.

use rill_ir::{Pos, Token, TokenKind};

use crate::ParseError;

/// Cursor over a scanned token stream.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the stream.
    ///
    /// `tokens` must be non-empty and end with an `Eof` token, which is what
    /// `rill_lexer::tokenize` produces.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        // pos is clamped to the final Eof by advance().
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// The current token's kind.
    #[inline]
    pub fn kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// The current token's position.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.current().pos
    }

    /// The token `offset` past the current one, saturating at the final
    /// `Eof`.
    #[inline]
    pub fn peek_token(&self, offset: usize) -> &'a Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Kind of the token `offset` past the current one, saturating at `Eof`.
    #[inline]
    pub fn peek(&self, offset: usize) -> &'a TokenKind {
        &self.peek_token(offset).kind
    }

    /// True when the current token is `kind`.
    #[inline]
    pub fn at(&self, kind: &TokenKind) -> bool {
        self.kind() == kind
    }

    /// Move to the next token. Stops at the final `Eof`.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    /// Consume the current token, returning it.
    #[inline]
    pub fn bump(&mut self) -> &'a Token {
        let token = self.current();
        self.advance();
        token
    }

    /// Consume the current token if it equals `kind`; otherwise fail with
    /// an expected-vs-found error.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(ParseError::unexpected(kind.describe(), self.current()))
        }
    }

    /// Consume the current token if it is an identifier, returning the name.
    pub fn expect_ident(&mut self) -> Result<(String, Pos), ParseError> {
        match self.kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let pos = self.pos();
                self.advance();
                Ok((name, pos))
            }
            _ => Err(ParseError::unexpected("identifier", self.current())),
        }
    }

    /// If the current token is `kind`, consume it and return true.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip any run of `Newline` tokens.
    pub fn skip_newlines(&mut self) {
        while self.at(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Kind of the next non-newline token, without consuming anything.
    pub fn peek_past_newlines(&self) -> &'a TokenKind {
        let mut idx = self.pos;
        while idx < self.tokens.len() - 1 && self.tokens[idx].kind == TokenKind::Newline {
            idx += 1;
        }
        &self.tokens[idx].kind
    }
}
