use pretty_assertions::assert_eq;

use rill_diagnostic::{Diagnostic, ErrorCode, Stage};

use crate::{check_source, parse_source, run_source_with};

fn run(source: &str) -> Result<Vec<String>, Diagnostic> {
    let mut out: Vec<String> = Vec::new();
    run_source_with(source, &mut out)?;
    Ok(out)
}

fn output(source: &str) -> Vec<String> {
    match run(source) {
        Ok(out) => out,
        Err(diagnostic) => panic!("unexpected diagnostic: {diagnostic}"),
    }
}

fn diagnostic_of(source: &str) -> Diagnostic {
    match run(source) {
        Ok(out) => panic!("expected a diagnostic, got output {out:?}"),
        Err(diagnostic) => diagnostic,
    }
}

#[test]
fn end_to_end_shows_five() {
    assert_eq!(output("{ let int x = 2 show x + 3 }"), vec!["5"]);
}

#[test]
fn procedure_giving_a_value_fails_analysis() {
    let diagnostic = diagnostic_of("{ proc p() { give 1 } exec p() }");
    assert_eq!(diagnostic.stage, Stage::Semantic);
    assert_eq!(diagnostic.code, ErrorCode::ProcedureGivingValue);
    assert_eq!(diagnostic.message, "procedure cannot give a value");
}

#[test]
fn check_does_not_execute() {
    // A division by zero passes analysis; only `run` would trip it.
    let source = "{ show 1 / 0 }";
    if let Err(diagnostic) = check_source(source) {
        panic!("unexpected diagnostic: {diagnostic}");
    }
    let diagnostic = diagnostic_of(source);
    assert_eq!(diagnostic.stage, Stage::Runtime);
    assert_eq!(diagnostic.code, ErrorCode::DivisionByZero);
}

#[test]
fn lexical_errors_carry_a_position() {
    let diagnostic = diagnostic_of("{ show @ }");
    assert_eq!(diagnostic.stage, Stage::Lexical);
    assert_eq!(diagnostic.code, ErrorCode::InvalidCharacter);
    assert!(diagnostic.pos.is_some());
}

#[test]
fn syntax_errors_carry_a_position() {
    let diagnostic = diagnostic_of("{ let int }");
    assert_eq!(diagnostic.stage, Stage::Syntax);
    assert_eq!(diagnostic.code, ErrorCode::UnexpectedToken);
    assert!(diagnostic.pos.is_some());
}

#[test]
fn semantic_errors_stop_before_execution() {
    let diagnostic = diagnostic_of("{ show missing }");
    assert_eq!(diagnostic.stage, Stage::Semantic);
    assert_eq!(diagnostic.code, ErrorCode::UndeclaredIdentifier);
}

#[test]
fn parse_source_skips_analysis() {
    // References an undeclared name; parsing alone accepts it.
    let program = match parse_source("{ show missing }") {
        Ok(program) => program,
        Err(diagnostic) => panic!("unexpected diagnostic: {diagnostic}"),
    };
    assert_eq!(program.block.statements.len(), 1);
}

#[test]
fn a_small_program_runs_start_to_finish() {
    let source = "\
{
    # squares below a limit
    keep int limit = 40
    let int n = 1
    while n * n < limit {
        show n * n
        n = n + 1
    }

    func label(int v) -> string {
        give 'n=' + v
    }
    show label(n)
}
";
    assert_eq!(output(source), vec!["1", "4", "9", "16", "25", "36", "n=7"]);
}
