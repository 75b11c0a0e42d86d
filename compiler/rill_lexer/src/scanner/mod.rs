//! The scanning state machine.
//!
//! The lexer owns a character buffer and a single scan cursor (position plus
//! 1-based line/column). Each call to [`Lexer::next_token`] skips whatever is
//! insignificant at the cursor, then dispatches on the current character to
//! one focused method that consumes exactly one token.
//!
//! The buffer is a `Vec<char>` so positions count characters, matching what
//! the column counter reports even for non-ASCII string contents.

use rill_diagnostic::ErrorCode;
use rill_ir::{Pos, Token, TokenKind};

use crate::keywords;
use crate::LexError;

/// Scanner over one source text.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current character, or `None` at end of input.
    #[inline]
    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Look `offset` characters past the current one without advancing.
    #[inline]
    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Cursor position as a [`Pos`].
    #[inline]
    fn here(&self) -> Pos {
        // The buffer length is bounded well below u32::MAX for any source
        // this pipeline is meant for; saturate rather than panic past that.
        Pos::new(
            u32::try_from(self.pos).unwrap_or(u32::MAX),
            self.line,
            self.column,
        )
    }

    /// Advance one character, maintaining the line/column counters.
    fn advance(&mut self) {
        if self.current() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> LexError {
        LexError::new(code, message, self.here())
    }

    /// Skip horizontal whitespace. Newlines are significant and stay.
    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(c) if c.is_whitespace() && c != '\n') {
            self.advance();
        }
    }

    /// Skip a `#` comment up to (not including) the line's newline.
    fn skip_comment(&mut self) {
        while matches!(self.current(), Some(c) if c != '\n') {
            self.advance();
        }
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token at end of input; calling again keeps returning
    /// `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace();

            if self.current() == Some('#') {
                self.skip_comment();
                continue;
            }

            let start = self.here();
            return match self.current() {
                None => Ok(Token::new(TokenKind::Eof, start)),
                Some('\n') => {
                    self.advance();
                    // Directly consecutive newlines collapse into one token.
                    while self.current() == Some('\n') {
                        self.advance();
                    }
                    Ok(Token::new(TokenKind::Newline, start))
                }
                Some(c) if c.is_ascii_digit() => self.number(start),
                Some('.') => {
                    if matches!(self.peek(1), Some(d) if d.is_ascii_digit()) {
                        self.number(start)
                    } else {
                        Err(self.error(
                            ErrorCode::InvalidNumber,
                            "Invalid number: lone decimal point",
                        ))
                    }
                }
                Some(q @ ('\'' | '"')) => self.string(start, q),
                Some(c) if c.is_alphabetic() || c == '_' => Ok(self.identifier(start)),
                Some(c) => self.operator(start, c),
            };
        }
    }

    /// Scan a numeric literal: digits with at most one decimal point, where
    /// every decimal point must be followed by a digit.
    fn number(&mut self, start: Pos) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        let mut has_dot = false;

        while let Some(c) = self.current() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.advance();
            } else if c == '.' {
                if has_dot {
                    return Err(self.error(
                        ErrorCode::InvalidNumber,
                        "Invalid number: multiple decimal points",
                    ));
                }
                if !matches!(self.peek(1), Some(d) if d.is_ascii_digit()) {
                    return Err(self.error(
                        ErrorCode::InvalidNumber,
                        "Invalid number: decimal point not followed by a digit",
                    ));
                }
                has_dot = true;
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if has_dot {
            let value: f64 = lexeme.parse().map_err(|_| {
                self.error(ErrorCode::InvalidNumber, format!("Invalid number: '{lexeme}'"))
            })?;
            TokenKind::float(value)
        } else {
            let value: i64 = lexeme.parse().map_err(|_| {
                self.error(
                    ErrorCode::InvalidNumber,
                    format!("Invalid number: '{lexeme}' does not fit an int"),
                )
            })?;
            TokenKind::Int(value)
        };
        Ok(Token::new(kind, start))
    }

    /// Scan a string literal delimited by `quote`, decoding escapes.
    ///
    /// Recognized escapes: `\n \t \r \\ \' \"`. Unknown escapes pass the
    /// escaped character through unchanged. Raw newlines are not allowed.
    fn string(&mut self, start: Pos, quote: char) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut text = String::new();

        loop {
            match self.current() {
                None => {
                    return Err(self.error(
                        ErrorCode::UnterminatedString,
                        format!("Unterminated string, expected closing {quote}"),
                    ));
                }
                Some('\n') => {
                    return Err(self.error(
                        ErrorCode::UnterminatedString,
                        "Unterminated string: newline inside string literal",
                    ));
                }
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(Token::new(TokenKind::Str(text), start));
                }
                Some('\\') => {
                    self.advance();
                    let Some(escaped) = self.current() else {
                        return Err(self.error(
                            ErrorCode::UnterminatedString,
                            "Unterminated string: escape at end of input",
                        ));
                    };
                    text.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        // \\, \', \" and anything unknown pass through.
                        other => other,
                    });
                    self.advance();
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scan an identifier, resolving reserved words and `true`/`false`.
    fn identifier(&mut self, start: Pos) -> Token {
        let mut lexeme = String::new();
        while matches!(self.current(), Some(c) if c.is_alphanumeric() || c == '_') {
            // current() is Some inside the loop guard.
            if let Some(c) = self.current() {
                lexeme.push(c);
            }
            self.advance();
        }

        let kind = keywords::lookup(&lexeme).unwrap_or(TokenKind::Ident(lexeme));
        Token::new(kind, start)
    }

    /// Scan an operator or punctuation character, matching two-character
    /// operators greedily before the single-character table.
    fn operator(&mut self, start: Pos, c: char) -> Result<Token, LexError> {
        let two = match (c, self.peek(1)) {
            ('-', Some('>')) => Some(TokenKind::Arrow),
            ('*', Some('*')) => Some(TokenKind::Power),
            ('/', Some('/')) => Some(TokenKind::FloorDiv),
            ('=', Some('=')) => Some(TokenKind::EqEq),
            ('!', Some('=')) => Some(TokenKind::NotEq),
            ('<', Some('=')) => Some(TokenKind::LessEq),
            ('>', Some('=')) => Some(TokenKind::GreaterEq),
            _ => None,
        };
        if let Some(kind) = two {
            self.advance();
            self.advance();
            return Ok(Token::new(kind, start));
        }

        let single = match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ',' => Some(TokenKind::Comma),
            '=' => Some(TokenKind::Assign),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '%' => Some(TokenKind::Percent),
            '<' => Some(TokenKind::Less),
            '>' => Some(TokenKind::Greater),
            _ => None,
        };
        match single {
            Some(kind) => {
                self.advance();
                Ok(Token::new(kind, start))
            }
            None => Err(self.error(
                ErrorCode::InvalidCharacter,
                format!("Invalid character: '{c}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests;
