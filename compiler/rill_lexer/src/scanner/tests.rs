use pretty_assertions::assert_eq;

use rill_diagnostic::ErrorCode;
use rill_ir::TokenKind;

use crate::{tokenize, LexError};

/// Scan and drop positions, keeping the kinds.
fn kinds(source: &str) -> Vec<TokenKind> {
    match tokenize(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("unexpected lexical error: {err}"),
    }
}

fn error_of(source: &str) -> LexError {
    match tokenize(source) {
        Ok(tokens) => panic!("expected a lexical error, got {tokens:?}"),
        Err(err) => err,
    }
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn statement_shape_scans() {
    assert_eq!(
        kinds("let int x = 2"),
        vec![
            TokenKind::Let,
            TokenKind::IntType,
            TokenKind::Ident("x".into()),
            TokenKind::Assign,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn consecutive_newlines_collapse() {
    assert_eq!(
        kinds("show 1\n\n\nshow 2"),
        vec![
            TokenKind::Show,
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Show,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(
        kinds("show 1 # trailing comment\nshow 2"),
        vec![
            TokenKind::Show,
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Show,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multi_character_operators_match_greedily() {
    assert_eq!(
        kinds("-> ** // == != <= >="),
        vec![
            TokenKind::Arrow,
            TokenKind::Power,
            TokenKind::FloorDiv,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LessEq,
            TokenKind::GreaterEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn slash_alone_is_division() {
    assert_eq!(
        kinds("7 / 2"),
        vec![
            TokenKind::Int(7),
            TokenKind::Slash,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn float_and_leading_dot_literals() {
    assert_eq!(
        kinds("3.25 .5"),
        vec![
            TokenKind::float(3.25),
            TokenKind::float(0.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_with_two_dots_is_rejected() {
    let err = error_of("1.2.3");
    assert_eq!(err.code, ErrorCode::InvalidNumber);
}

#[test]
fn lone_dot_is_rejected() {
    let err = error_of("show .");
    assert_eq!(err.code, ErrorCode::InvalidNumber);
}

#[test]
fn trailing_dot_is_rejected() {
    let err = error_of("7.");
    assert_eq!(err.code, ErrorCode::InvalidNumber);
}

#[test]
fn strings_decode_escapes() {
    assert_eq!(
        kinds(r#""a\tb\\c\"d""#),
        vec![TokenKind::Str("a\tb\\c\"d".into()), TokenKind::Eof]
    );
}

#[test]
fn unknown_escape_passes_through() {
    assert_eq!(
        kinds(r"'\q'"),
        vec![TokenKind::Str("q".into()), TokenKind::Eof]
    );
}

#[test]
fn single_and_double_quotes_both_delimit() {
    assert_eq!(
        kinds(r#"'it' "works""#),
        vec![
            TokenKind::Str("it".into()),
            TokenKind::Str("works".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn newline_inside_string_is_unterminated() {
    let err = error_of("'ab\ncd'");
    assert_eq!(err.code, ErrorCode::UnterminatedString);
    assert_eq!(err.pos.line, 1);
}

#[test]
fn missing_closing_quote_is_unterminated() {
    let err = error_of("'abc");
    assert_eq!(err.code, ErrorCode::UnterminatedString);
}

#[test]
fn booleans_are_literals() {
    assert_eq!(
        kinds("true false trueish"),
        vec![
            TokenKind::Bool(true),
            TokenKind::Bool(false),
            TokenKind::Ident("trueish".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifiers_take_digits_and_underscores() {
    assert_eq!(
        kinds("_tmp x2 long_name"),
        vec![
            TokenKind::Ident("_tmp".into()),
            TokenKind::Ident("x2".into()),
            TokenKind::Ident("long_name".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn invalid_character_reports_line_and_column() {
    let err = error_of("show 1\n  @");
    assert_eq!(err.code, ErrorCode::InvalidCharacter);
    assert_eq!(err.pos.line, 2);
    assert_eq!(err.pos.column, 3);
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = match tokenize("let int x\nx = 1") {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected lexical error: {err}"),
    };
    // 'x' on the second line starts at line 2, column 1.
    assert_eq!(tokens[4].kind, TokenKind::Ident("x".into()));
    assert_eq!(tokens[4].pos.line, 2);
    assert_eq!(tokens[4].pos.column, 1);
}

#[test]
fn token_kinds_round_trip_through_rendering() {
    // Render kinds back to equivalent source, rescan, and compare kinds.
    let source = "let int a , b = 1 , 2\nshow a + b";
    let first = kinds(source);
    let rendered: String = first
        .iter()
        .map(|kind| match kind {
            TokenKind::Int(v) => format!("{v} "),
            TokenKind::Ident(name) => format!("{name} "),
            TokenKind::Newline => "\n".to_string(),
            TokenKind::Eof => String::new(),
            TokenKind::Let => "let ".to_string(),
            TokenKind::IntType => "int ".to_string(),
            TokenKind::Show => "show ".to_string(),
            TokenKind::Assign => "= ".to_string(),
            TokenKind::Comma => ", ".to_string(),
            TokenKind::Plus => "+ ".to_string(),
            other => panic!("unexpected kind in fixture: {other:?}"),
        })
        .collect();
    assert_eq!(kinds(&rendered), first);
}
