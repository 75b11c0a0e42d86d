//! Token kinds.
//!
//! One variant per lexical element of rill. Literal variants carry their
//! decoded payload; the float payload is stored as raw bits so the type can
//! stay `Eq` and `Hash`.

use std::fmt;

/// The kind of a token, with the literal payload where there is one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Int(i64),
    /// Float literal, stored as `f64::to_bits` so `TokenKind` stays `Eq`.
    Float(u64),
    /// String literal with escapes already decoded.
    Str(String),
    Bool(bool),
    Ident(String),

    // Keywords
    Let,
    Keep,
    Func,
    Proc,
    Exec,
    Give,
    Show,
    If,
    Elif,
    Else,
    While,
    Skip,
    Stop,
    And,
    Or,
    Not,

    // Type keywords
    IntType,
    FloatType,
    StringType,
    BoolType,

    // Multi-character operators
    Arrow,
    Power,
    FloorDiv,
    EqEq,
    NotEq,
    LessEq,
    GreaterEq,

    // Single-character operators and punctuation
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Comma,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Less,
    Greater,

    // Structure
    Newline,
    Eof,
}

impl TokenKind {
    /// Wrap an `f64` literal value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Decode the float payload, if this is a float literal.
    #[inline]
    pub fn float_value(&self) -> Option<f64> {
        match self {
            TokenKind::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Human-readable name of the kind, without any payload.
    ///
    /// Used by syntax errors to report expected-kind vs found-kind.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "int literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::Bool(_) => "bool literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Let => "'let'",
            TokenKind::Keep => "'keep'",
            TokenKind::Func => "'func'",
            TokenKind::Proc => "'proc'",
            TokenKind::Exec => "'exec'",
            TokenKind::Give => "'give'",
            TokenKind::Show => "'show'",
            TokenKind::If => "'if'",
            TokenKind::Elif => "'elif'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::Skip => "'skip'",
            TokenKind::Stop => "'stop'",
            TokenKind::And => "'and'",
            TokenKind::Or => "'or'",
            TokenKind::Not => "'not'",
            TokenKind::IntType => "'int'",
            TokenKind::FloatType => "'float'",
            TokenKind::StringType => "'string'",
            TokenKind::BoolType => "'bool'",
            TokenKind::Arrow => "'->'",
            TokenKind::Power => "'**'",
            TokenKind::FloorDiv => "'//'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::LessEq => "'<='",
            TokenKind::GreaterEq => "'>='",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Assign => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Less => "'<'",
            TokenKind::Greater => "'>'",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
