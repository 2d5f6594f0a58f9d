use reckon::{
    DivisionMode, Evaluator,
    error::{EvalError, SyntaxError},
    evaluate, is_valid, validate,
};

fn assert_valid(src: &str) {
    if let Err(e) = validate(src) {
        panic!("Expression {src:?} was rejected: {e}");
    }
}

fn assert_invalid(src: &str) {
    assert!(!is_valid(src), "Expression {src:?} was accepted but should be rejected");
}

fn assert_value(src: &str, expected: f64) {
    assert_valid(src);
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn empty_and_whitespace_only_are_invalid() {
    for src in ["", " ", "  ", "\t", " \t "] {
        assert_invalid(src);
        assert_eq!(validate(src), Err(SyntaxError::Empty));
    }
}

#[test]
fn parentheses_must_balance() {
    assert_valid("(1+2)");
    assert_valid("((1 + 2) * (3 - 4))");
    assert_invalid("(1+2");
    assert_invalid("1+2)");
    assert_invalid("()");
    assert_eq!(validate("((1 + 2)"), Err(SyntaxError::UnclosedParen { count: 1 }));
    assert_eq!(validate("1 + 2)"), Err(SyntaxError::UnmatchedClosingParen { column: 6 }));
}

#[test]
fn number_literals() {
    assert_invalid("1.2.3");
    assert_valid("-5");
    assert_valid("0.25");
    assert_invalid(".");
    assert_invalid("-");
    assert_invalid("- 5");
}

#[test]
fn bare_decimal_points_are_numbers() {
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("-.5 * 2", -1.0);
}

#[test]
fn operators_must_alternate_with_operands() {
    assert_invalid("1++2");
    assert_invalid("1 + + 2");
    assert_invalid("+ 1");
    assert_invalid("1 +");
    assert_invalid("1 2");
    assert_invalid("2 (3)");
    assert_eq!(validate("1 +"), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(validate("1 * * 2"),
               Err(SyntaxError::ExpectedOperand { found:  "*".to_string(),
                                                  column: 5, }));
    assert_eq!(validate("1 2"),
               Err(SyntaxError::ExpectedOperator { found:  "2".to_string(),
                                                   column: 3, }));
}

#[test]
fn spacing_rules() {
    assert_valid("1 + 2");
    assert_valid("1+2");
    assert_valid(" 1 + 2");
    assert_eq!(validate("1 +  2"), Err(SyntaxError::RepeatedWhitespace { column: 5 }));
    assert_eq!(validate("1 + 2 "), Err(SyntaxError::TrailingWhitespace { column: 6 }));
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(validate("2 % 3"),
               Err(SyntaxError::UnexpectedCharacter { fragment: "%".to_string(),
                                                      column:   3, }));
    assert_invalid("x + 1");
    assert_invalid("1e5");
    assert_invalid("1,5");
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("10 - 2 ^ 3 / 4", 8.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
}

#[test]
fn signed_operands() {
    assert_value("3 - -2", 5.0);
    assert_value("3-2", 1.0);
    assert_value("(-1) * (-1)", 1.0);
    assert_value("-2 ^ 2", 4.0);
}

#[test]
fn glued_operators_are_not_signs() {
    assert_invalid("1--2");
    assert_invalid("1*-2");
    assert_invalid("(1+-2)");
    assert_value("1 - -2", 3.0);
    assert_value("3 -5", -2.0);
    assert_eq!(validate("1--2"),
               Err(SyntaxError::ExpectedOperand { found:  "-".to_string(),
                                                  column: 3, }));
}

#[test]
fn nested_parentheses() {
    assert_value("((2))", 2.0);
    assert_value("(1 + (2 * (3 + 4))) / 3", 5.0);
    assert_value("2 ^ (1 + 1) ^ 2", 16.0);
}

#[test]
fn evaluation_is_repeatable() {
    let src = "(1.5 + 2) * 3 ^ 2 / 7";
    assert_eq!(evaluate(src), evaluate(src));
}

#[test]
fn division_by_zero_is_error_in_strict_mode() {
    assert_eq!(evaluate("1 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("5 / (3 - 3)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("0 / -0"), Err(EvalError::DivisionByZero));
}

#[test]
fn division_by_zero_follows_ieee_when_asked() {
    let evaluator = Evaluator::new(DivisionMode::Ieee);
    assert_eq!(evaluator.evaluate("1 / 0"), Ok(f64::INFINITY));
    assert_eq!(evaluator.evaluate("-1 / 0"), Ok(f64::NEG_INFINITY));
    assert!(evaluator.evaluate("0 / 0").is_ok_and(f64::is_nan));
}

#[test]
fn evaluating_unvalidated_input_fails_cleanly() {
    assert_eq!(evaluate(""), Err(EvalError::MissingOperand));
    assert_eq!(evaluate("1 +"), Err(EvalError::MissingOperand));
    assert_eq!(evaluate("(1 + 2"), Err(EvalError::UnmatchedParen));
    assert_eq!(evaluate("1 + 2)"), Err(EvalError::UnmatchedParen));
    assert_eq!(evaluate("1 2"), Err(EvalError::ExtraOperands { count: 2 }));
    assert!(matches!(evaluate("1 & 2"), Err(EvalError::Syntax(_))));
}

#[test]
fn errors_have_readable_messages() {
    let e = validate("1 +  2").unwrap_err();
    assert!(e.to_string().contains("Column 5"));
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero.");
}

fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

#[test]
fn core_types_are_thread_safe() {
    _assert_send_sync_static::<Evaluator>();
    _assert_send_sync_static::<SyntaxError>();
    _assert_send_sync_static::<EvalError>();
}
