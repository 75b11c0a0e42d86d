use pretty_assertions::assert_eq;

use rill_diagnostic::ErrorCode;

use crate::{interpret_with, RuntimeError};

fn run(source: &str) -> Result<Vec<String>, RuntimeError> {
    let tokens = match rill_lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected lexical error: {err}"),
    };
    let program = match rill_parse::parse(&tokens) {
        Ok(program) => program,
        Err(err) => panic!("unexpected syntax error: {err}"),
    };
    let mut out: Vec<String> = Vec::new();
    interpret_with(&program, &mut out)?;
    Ok(out)
}

fn output(source: &str) -> Vec<String> {
    match run(source) {
        Ok(out) => out,
        Err(err) => panic!("unexpected runtime error: {err}"),
    }
}

fn fails(source: &str) -> RuntimeError {
    match run(source) {
        Ok(out) => panic!("expected a runtime error, got output {out:?}"),
        Err(err) => err,
    }
}

#[test]
fn shows_an_arithmetic_result() {
    assert_eq!(output("{ let int x = 2 show x + 3 }"), vec!["5"]);
}

#[test]
fn declaration_binds_each_name_before_the_next_initializer() {
    assert_eq!(output("{ let int a, b = 1, a show b }"), vec!["1"]);
}

#[test]
fn self_referential_initializer_reads_nothing() {
    assert_eq!(
        fails("{ let int x = x }").code,
        ErrorCode::UndefinedIdentifier
    );
}

#[test]
fn integer_operators() {
    let out = output("{\nshow 7 // 2\nshow 7 % 2\nshow 2 ** 3\n}");
    assert_eq!(out, vec!["3", "1", "8"]);
}

#[test]
fn floor_semantics_for_negatives() {
    let out = output("{\nshow -7 // 2\nshow -7 % 2\n}");
    assert_eq!(out, vec!["-4", "1"]);
}

#[test]
fn true_division_yields_float() {
    assert_eq!(output("{ show 7 / 2 }"), vec!["3.5"]);
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert_eq!(fails("{ show 5 / 0 }").code, ErrorCode::DivisionByZero);
}

#[test]
fn string_concatenation_with_a_number() {
    assert_eq!(output("{ show 'a' + 1 }"), vec!["a1"]);
}

#[test]
fn and_short_circuits() {
    let out = output(
        "{\nfunc f() -> bool {\nshow 'evaluated'\ngive true\n}\nshow false and f()\n}",
    );
    assert_eq!(out, vec!["false"]);
}

#[test]
fn or_short_circuits() {
    let out = output(
        "{\nfunc f() -> bool {\nshow 'evaluated'\ngive true\n}\nshow true or f()\n}",
    );
    assert_eq!(out, vec!["true"]);
}

#[test]
fn not_inverts() {
    assert_eq!(output("{ show not false }"), vec!["true"]);
}

#[test]
fn truthiness_drives_a_while_loop() {
    let out = output("{\nlet int n = 3\nwhile n {\nshow n\nn = n - 1\n}\n}");
    assert_eq!(out, vec!["3", "2", "1"]);
}

#[test]
fn skip_and_stop_in_a_loop() {
    let source = "{\nlet int n = 0\nwhile true {\nn = n + 1\nif n == 2 {\nskip\n}\nif n == 4 {\nstop\n}\nshow n\n}\n}";
    assert_eq!(output(source), vec!["1", "3"]);
}

#[test]
fn give_escapes_nested_blocks() {
    let source = "{\nfunc f(int n) -> int {\nwhile true {\nif n > 0 {\ngive n\n}\nn = n + 1\n}\ngive 0\n}\nshow f(0)\n}";
    assert_eq!(output(source), vec!["1"]);
}

#[test]
fn statements_after_give_do_not_run() {
    let source = "{\nfunc f() -> int {\ngive 1\nshow 'unreachable'\n}\nshow f()\n}";
    assert_eq!(output(source), vec!["1"]);
}

#[test]
fn recursion() {
    let source = "{\nfunc fact(int n) -> int {\nif n == 0 {\ngive 1\n}\ngive n * fact(n - 1)\n}\nshow fact(5)\n}";
    assert_eq!(output(source), vec!["120"]);
}

#[test]
fn callee_sees_caller_bindings() {
    let source = "{\nlet int x = 40\nfunc f() -> int {\ngive x + 2\n}\nshow f()\n}";
    assert_eq!(output(source), vec!["42"]);
}

#[test]
fn callee_writes_do_not_leak_back() {
    let source = "{\nlet int x = 1\nproc p() {\nx = 99\n}\nexec p()\nshow x\n}";
    assert_eq!(output(source), vec!["1"]);
}

#[test]
fn parameters_bind_over_seeded_members() {
    let source = "{\nlet int n = 9\nfunc f(int n) -> int {\ngive n\n}\nshow f(2)\n}";
    assert_eq!(output(source), vec!["2"]);
}

#[test]
fn declared_names_default_per_type() {
    let out = output("{\nlet int a, b\nshow a + b\nlet string s\nshow s + '!'\n}");
    assert_eq!(out, vec!["0", "!"]);
}

#[test]
fn elif_chain_picks_the_first_true_arm() {
    let source = "{\nlet int n = 2\nif n == 1 {\nshow 'one'\n}\nelif n == 2 {\nshow 'two'\n}\nelse {\nshow 'many'\n}\n}";
    assert_eq!(output(source), vec!["two"]);
}

#[test]
fn bare_call_statement_discards_the_value() {
    let source = "{\nfunc f() -> int {\nshow 'ran'\ngive 1\n}\nf()\n}";
    assert_eq!(output(source), vec!["ran"]);
}

#[test]
fn function_falling_off_the_end_is_an_error() {
    let source = "{\nfunc f() -> int {\nlet int x = 1\n}\nshow f()\n}";
    assert_eq!(fails(source).code, ErrorCode::FunctionGaveNothing);
}

#[test]
fn procedure_giving_a_value_is_an_error() {
    // Unanalyzed tree: the interpreter's own backstop fires.
    let source = "{\nproc p() {\ngive 1\n}\nexec p()\n}";
    assert_eq!(fails(source).code, ErrorCode::ProcedureGaveValue);
}

#[test]
fn undefined_identifier_is_a_runtime_backstop() {
    assert_eq!(fails("{ show y }").code, ErrorCode::UndefinedIdentifier);
}

#[test]
fn integer_overflow_is_a_runtime_error() {
    let source = "{\nlet int big = 9223372036854775807\nshow big + 1\n}";
    assert_eq!(fails(source).code, ErrorCode::IntegerOverflow);
}

#[test]
fn constants_evaluate_like_variables() {
    assert_eq!(output("{ keep float pi = 3.5\nshow pi * 2 }"), vec!["7"]);
}

#[test]
fn while_condition_rechecked_each_iteration() {
    let source = "{\nlet int n = 0\nwhile n < 3 {\nn = n + 1\n}\nshow n\n}";
    assert_eq!(output(source), vec!["3"]);
}
