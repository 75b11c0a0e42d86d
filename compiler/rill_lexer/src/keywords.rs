//! Reserved word resolution.
//!
//! Maps identifier text to keyword token kinds, with `true`/`false` resolving
//! to boolean literals rather than identifiers. Lookup is length-bucketed:
//! every reserved word is 2-6 characters, so anything outside that range is
//! rejected without a single comparison.

use rill_ir::TokenKind;

/// Look up a reserved word.
///
/// Returns `None` when `text` is an ordinary identifier.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=6).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "int" => Some(TokenKind::IntType),
            "let" => Some(TokenKind::Let),
            "not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            "bool" => Some(TokenKind::BoolType),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "exec" => Some(TokenKind::Exec),
            "func" => Some(TokenKind::Func),
            "give" => Some(TokenKind::Give),
            "keep" => Some(TokenKind::Keep),
            "proc" => Some(TokenKind::Proc),
            "show" => Some(TokenKind::Show),
            "skip" => Some(TokenKind::Skip),
            "stop" => Some(TokenKind::Stop),
            "true" => Some(TokenKind::Bool(true)),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::Bool(false)),
            "float" => Some(TokenKind::FloatType),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "string" => Some(TokenKind::StringType),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve() {
        assert_eq!(lookup("let"), Some(TokenKind::Let));
        assert_eq!(lookup("while"), Some(TokenKind::While));
        assert_eq!(lookup("exec"), Some(TokenKind::Exec));
        assert_eq!(lookup("string"), Some(TokenKind::StringType));
    }

    #[test]
    fn booleans_are_literals_not_identifiers() {
        assert_eq!(lookup("true"), Some(TokenKind::Bool(true)));
        assert_eq!(lookup("false"), Some(TokenKind::Bool(false)));
    }

    #[test]
    fn non_keywords_fall_through() {
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("whileish"), None);
        assert_eq!(lookup("lets"), None);
        assert_eq!(lookup("TRUE"), None); // keywords are case-sensitive
    }
}
