use cambridge_pseudo::interpreter::execute;

/// Output of `OUTPUT <expr>` on a fresh run
fn output(expr: &str) -> String {
    let response = execute(&format!("OUTPUT {}", expr));
    assert!(
        response.success,
        "'{}' faulted: {:?}",
        expr,
        response.error()
    );
    response.output_lines().join("\n")
}

/// Fault message of `OUTPUT <expr>` on a fresh run
fn fault(expr: &str) -> String {
    let response = execute(&format!("OUTPUT {}", expr));
    assert!(!response.success, "'{}' did not fault", expr);
    response.error().unwrap().text.clone()
}

#[test]
fn test_operator_trial_order() {
    // `/` is tried first, then DIV, MOD, +, -, *
    assert_eq!(output("2 * 3 + 4"), "10");
    assert_eq!(output("2 * 3 - 1"), "5");
    assert_eq!(output("12 / 2 * 3"), "2");
    assert_eq!(output("8 - 2 - 1"), "7");
    assert_eq!(output("10 - 4 + 1"), "7");
}

#[test]
fn test_division() {
    assert_eq!(output("7 / 2"), "3.5");
    assert_eq!(output("8 / 2"), "4");
    assert_eq!(
        fault("5/0"),
        "Line 1: RuntimeError — Cannot divide by zero"
    );
    assert_eq!(
        fault("1 / 0.00000001"),
        "Line 1: RuntimeError — Cannot divide by zero"
    );
}

#[test]
fn test_integer_division_and_modulo() {
    assert_eq!(output("7 DIV 2"), "3");
    assert_eq!(output("7 div 2"), "3");
    assert_eq!(output("-7 MOD 3"), "-1");
    assert_eq!(output("2.5 DIV 1"), "2");
    assert_eq!(
        fault("7 DIV 0"),
        "Line 1: RuntimeError — Cannot divide by zero"
    );
    assert_eq!(
        fault("7 MOD 0"),
        "Line 1: RuntimeError — Cannot perform MOD with zero"
    );
}

#[test]
fn test_numeric_promotion() {
    assert_eq!(output("1 + 2.5"), "3.5");
    assert_eq!(output("0.5 + 0.5"), "1");
    assert_eq!(output("3 - -2"), "5");
    assert_eq!(output("TRUE + 1"), "2");
}

#[test]
fn test_concatenation() {
    assert_eq!(output("\"a\" + \"b\""), "ab");
    assert_eq!(output("\"n=\" + 5"), "n=5");
    assert_eq!(output("\"flag \" + FALSE"), "flag FALSE");
}

#[test]
fn test_literal_text_fallback() {
    assert_eq!(output("\"Hello, World\""), "Hello, World");
    assert_eq!(output("x > 1"), "x > 1");
}

#[test]
fn test_conversion_faults() {
    assert_eq!(
        fault("\"abc\" * 2"),
        "Line 1: RuntimeError — Cannot convert 'abc' to a number"
    );
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        fault("9223372036854775807 + 1"),
        "Line 1: RuntimeError — Integer overflow in +"
    );
    assert_eq!(
        fault("4611686018427387904 * 2"),
        "Line 1: RuntimeError — Integer overflow in *"
    );
}
