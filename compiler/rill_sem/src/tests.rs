use pretty_assertions::assert_eq;

use rill_diagnostic::ErrorCode;

use crate::{analyze, SemError};

fn check(source: &str) -> Result<(), SemError> {
    let tokens = match rill_lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected lexical error: {err}"),
    };
    let program = match rill_parse::parse(&tokens) {
        Ok(program) => program,
        Err(err) => panic!("unexpected syntax error: {err}"),
    };
    analyze(&program)
}

fn accepts(source: &str) {
    if let Err(err) = check(source) {
        panic!("expected analysis to pass, got: {err}");
    }
}

fn rejects(source: &str) -> SemError {
    match check(source) {
        Ok(()) => panic!("expected analysis to fail"),
        Err(err) => err,
    }
}

#[test]
fn declared_then_referenced_is_accepted() {
    accepts("{ let int x = 1 show x }");
}

#[test]
fn undeclared_reference_is_rejected() {
    let err = rejects("{ show x }");
    assert_eq!(err.code, ErrorCode::UndeclaredIdentifier);
}

#[test]
fn duplicate_in_same_scope_is_rejected() {
    let err = rejects("{ let int x\nlet float x }");
    assert_eq!(err.code, ErrorCode::DuplicateIdentifier);
}

#[test]
fn shadowing_an_outer_scope_is_accepted() {
    accepts("{\nlet int x = 1\nif true {\nlet int x = 2\nshow x\n}\n}");
}

#[test]
fn initializer_may_reference_an_earlier_name_in_the_list() {
    accepts("{ let int a, b = 1, a }");
    accepts("{ keep int a, b = 1, a }");
}

#[test]
fn initializer_may_reference_the_name_it_declares() {
    // Declared before its initializer is checked; reading it is a
    // runtime concern, not a semantic one.
    accepts("{ let int x = x }");
}

#[test]
fn inner_block_sees_outer_bindings() {
    accepts("{\nlet int x = 1\nwhile x < 3 {\nx = x + 1\n}\n}");
}

#[test]
fn assignment_to_constant_is_rejected() {
    let err = rejects("{ keep int c = 1\nc = 2 }");
    assert_eq!(err.code, ErrorCode::AssignmentToConstant);
}

#[test]
fn assignment_to_a_function_is_rejected() {
    let err = rejects("{ func f() -> int { give 1 }\nf = 2 }");
    assert_eq!(err.code, ErrorCode::WrongSymbolKind);
}

#[test]
fn calling_a_variable_is_rejected() {
    let err = rejects("{ let int x = 1\nshow x() }");
    assert_eq!(err.code, ErrorCode::WrongSymbolKind);
}

#[test]
fn exec_of_a_function_is_rejected() {
    let err = rejects("{ func f() -> int { give 1 }\nexec f() }");
    assert_eq!(err.code, ErrorCode::WrongSymbolKind);
}

#[test]
fn wrong_argument_count_is_rejected() {
    let err = rejects("{ func f(int a) -> int { give a }\nshow f(1, 2) }");
    assert_eq!(err.code, ErrorCode::WrongNumberOfArguments);
}

#[test]
fn matching_argument_count_is_accepted() {
    accepts("{ func f(int a, int b) -> int { give a + b }\nshow f(1, 2) }");
}

#[test]
fn empty_give_in_function_is_rejected() {
    let err = rejects("{ func f() -> int { give }\nshow f() }");
    assert_eq!(err.code, ErrorCode::FunctionEmptyGive);
}

#[test]
fn valued_give_in_procedure_is_rejected() {
    let err = rejects("{ proc p() { give 1 }\nexec p() }");
    assert_eq!(err.code, ErrorCode::ProcedureGivingValue);
    assert_eq!(err.message, "procedure cannot give a value");
}

#[test]
fn empty_give_in_procedure_is_accepted() {
    accepts("{ proc p() { give }\nexec p() }");
}

#[test]
fn give_nested_in_blocks_finds_its_callable() {
    accepts("{ func f(int n) -> int {\nif n > 0 {\ngive 1\n}\ngive 0\n} show f(2) }");
}

#[test]
fn give_at_program_level_is_rejected() {
    let err = rejects("{ give 1 }");
    assert_eq!(err.code, ErrorCode::GiveOutsideCallable);
}

#[test]
fn skip_outside_while_is_rejected_even_inside_if() {
    let err = rejects("{ if true { skip } }");
    assert_eq!(err.code, ErrorCode::SkipOutsideWhile);
}

#[test]
fn stop_outside_while_is_rejected() {
    let err = rejects("{ stop }");
    assert_eq!(err.code, ErrorCode::StopOutsideWhile);
}

#[test]
fn skip_inside_nested_if_in_while_is_accepted() {
    accepts("{\nlet int n = 0\nwhile n < 5 {\nn = n + 1\nif n == 2 {\nskip\n}\nshow n\n}\n}");
}

#[test]
fn recursive_function_can_call_itself() {
    accepts("{ func f(int n) -> int {\nif n == 0 {\ngive 1\n}\ngive n * f(n - 1)\n} show f(3) }");
}

#[test]
fn forward_reference_to_a_later_function_is_rejected() {
    let err = rejects("{ show f()\nfunc f() -> int { give 1 } }");
    assert_eq!(err.code, ErrorCode::UndeclaredIdentifier);
}

#[test]
fn duplicate_parameter_names_are_rejected() {
    let err = rejects("{ func f(int a, int a) -> int { give a } }");
    assert_eq!(err.code, ErrorCode::DuplicateIdentifier);
}

#[test]
fn parameter_shadows_outer_binding() {
    accepts("{\nlet int a = 1\nfunc f(int a) -> int { give a }\nshow f(2)\n}");
}

#[test]
fn constants_can_be_read() {
    accepts("{ keep float pi = 3.14\nshow pi * 2 }");
}
