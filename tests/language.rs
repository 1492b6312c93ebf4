use linecalc::{Context, interpret};

fn eval(ctx: &mut Context, line: &str) -> i64 {
    interpret(ctx, line).unwrap_or_else(|e| panic!("Line '{line}' failed: {e}"))
                        .unwrap_or_else(|| panic!("Line '{line}' produced no value"))
}

fn assert_failure(ctx: &mut Context, line: &str) {
    if interpret(ctx, line).is_ok() {
        panic!("Line '{line}' succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "1 + 2"), 3);
    assert_eq!(eval(&mut ctx, "8 - 5"), 3);
    assert_eq!(eval(&mut ctx, "7 * 9"), 63);
    assert_eq!(eval(&mut ctx, "10 / 2"), 5);
    assert_eq!(eval(&mut ctx, "42"), 42);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "2 + 3 * 4"), 14);
    assert_eq!(eval(&mut ctx, "(2 + 3) * 4"), 20);
    assert_eq!(eval(&mut ctx, "2 * 3 + 4"), 10);
}

#[test]
fn exponentiation_binds_tighter_than_multiplication() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "2 ^ 3 * 4"), 32);
    assert_eq!(eval(&mut ctx, "4 * 2 ^ 3"), 32);
}

#[test]
fn exponentiation_is_right_associative() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "2 ^ 3 ^ 2"), 512);
    assert_eq!(eval(&mut ctx, "2 ^ 10"), 1024);
}

#[test]
fn division_and_modulo_are_integral() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "7 / 2"), 3);
    assert_eq!(eval(&mut ctx, "7 % 2"), 1);
    assert_eq!(eval(&mut ctx, "printf(7 / 2)"), 3);
    assert_eq!(eval(&mut ctx, "printf(7 % 2)"), 1);
}

#[test]
fn assignment_persists_across_lines() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "a = 5"), 5);
    assert_eq!(eval(&mut ctx, "printf(a + 1)"), 6);
}

#[test]
fn reassignment_reflects_the_latest_value() {
    let mut ctx = Context::new();

    eval(&mut ctx, "x = 1");
    eval(&mut ctx, "x = 2");
    assert_eq!(eval(&mut ctx, "printf(x)"), 2);
}

#[test]
fn assignment_is_usable_as_a_sub_expression() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "2 + (a = 40)"), 42);
    assert_eq!(eval(&mut ctx, "a"), 40);
}

#[test]
fn comparisons_yield_zero_or_one() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "2 < 3"), 1);
    assert_eq!(eval(&mut ctx, "3 < 2"), 0);
    assert_eq!(eval(&mut ctx, "2 <= 2"), 1);
    assert_eq!(eval(&mut ctx, "3 >= 4"), 0);
    assert_eq!(eval(&mut ctx, "5 > 4"), 1);
    assert_eq!(eval(&mut ctx, "2 != 3"), 1);
    assert_eq!(eval(&mut ctx, "2 != 2"), 0);
}

#[test]
fn comparisons_share_the_additive_tier() {
    let mut ctx = Context::new();

    // `1 + 1 < 3` folds left: `(1 + 1) < 3`.
    assert_eq!(eval(&mut ctx, "1 + 1 < 3"), 1);
    assert_eq!(eval(&mut ctx, "2 * 3 != 6"), 0);
}

#[test]
fn two_character_comparisons_lex_as_single_tokens() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "1 <= 2"), 1);
    assert_eq!(eval(&mut ctx, "2 >= 3"), 0);
    assert_eq!(eval(&mut ctx, "1 != 2"), 1);

    // Split across whitespace they are two tokens and no longer parse.
    assert_failure(&mut ctx, "1 < = 2");
}

#[test]
fn undefined_variable_is_an_error_and_the_session_continues() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "printf(b)");

    assert_eq!(eval(&mut ctx, "a = 1"), 1);
    assert_eq!(eval(&mut ctx, "a"), 1);
}

#[test]
fn failed_line_preserves_earlier_state() {
    let mut ctx = Context::new();

    eval(&mut ctx, "a = 5");
    assert_failure(&mut ctx, "a = 1 / 0");
    assert_eq!(eval(&mut ctx, "a"), 5);
}

#[test]
fn division_by_zero_is_an_error() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "1 / 0");
    assert_failure(&mut ctx, "1 % 0");
}

#[test]
fn negative_exponent_is_an_error() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "2 ^ (0 - 1)");
}

#[test]
fn overflow_is_an_error() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "9223372036854775807 + 1");
    assert_failure(&mut ctx, "2 ^ 64");
}

#[test]
fn unrecognized_characters_are_lexical_errors() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "2 $ 2");
    assert_failure(&mut ctx, "1 ! 2");
    assert_failure(&mut ctx, "99999999999999999999");
}

#[test]
fn trailing_tokens_are_an_error() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "1 2");
    assert_failure(&mut ctx, "printf(1) 2");
}

#[test]
fn blank_lines_produce_no_value() {
    let mut ctx = Context::new();

    assert_eq!(interpret(&mut ctx, "").unwrap(), None);
    assert_eq!(interpret(&mut ctx, "   ").unwrap(), None);
}

#[test]
fn printf_requires_its_parentheses() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "printf 1");
    assert_failure(&mut ctx, "printf(1");
    assert_failure(&mut ctx, "printf(1))");
}

#[test]
fn printf_is_not_a_sub_expression() {
    let mut ctx = Context::new();

    assert_failure(&mut ctx, "1 + printf(2)");
}

#[test]
fn identifiers_are_letter_runs() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "abc = 2"), 2);
    assert_eq!(eval(&mut ctx, "abc * 3"), 6);

    // `x1` lexes as the identifier `x` followed by the number `1`.
    eval(&mut ctx, "x = 3");
    assert_failure(&mut ctx, "x1");
}

#[test]
fn longer_identifiers_beat_the_printf_keyword() {
    let mut ctx = Context::new();

    assert_eq!(eval(&mut ctx, "printfoo = 3"), 3);
    assert_eq!(eval(&mut ctx, "printfoo"), 3);
}

#[test]
fn sessions_are_independent() {
    let mut first = Context::new();
    let mut second = Context::new();

    eval(&mut first, "a = 1");
    assert_failure(&mut second, "a");
}
