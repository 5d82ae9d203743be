use std::fs;

use chrono::TimeDelta;
use pretty_assertions::assert_eq;
use quill::{
    ast::BinaryOperator,
    error::{ParseError, RuntimeError},
    evaluate_in, evaluate_source,
    interpreter::{
        evaluator::core::Context,
        value::{core::Value, range::RangeValue},
    },
    parse_source,
};
use walkdir::WalkDir;

#[test]
fn fixture_expressions_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            match evaluate_source(&source) {
                Ok(value) => assert_eq!(value.to_string(),
                                        expected,
                                        "case {} in {:?}: {}",
                                        i + 1,
                                        path,
                                        source),
                Err(e) => panic!("case {} in {:?} failed:\n{}\nError: {}", i + 1, path, source, e),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/fixtures");
}

/// Reads `expression => rendered result` lines, skipping blanks and `#`
/// comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once(" => "))
           .map(|(source, expected)| (source.trim().to_string(), expected.trim().to_string()))
           .collect()
}

fn eval(src: &str) -> Value {
    evaluate_source(src).unwrap_or_else(|e| panic!("Expression `{src}` failed: {e}"))
}

fn render(src: &str) -> String {
    eval(src).to_string()
}

fn assert_failure(src: &str) {
    if evaluate_source(src).is_ok() {
        panic!("Expression `{src}` succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate_source(src) {
        Ok(value) => panic!("Expression `{src}` succeeded with {value:?}"),
        Err(e) => e.downcast_ref::<RuntimeError>()
                   .cloned()
                   .unwrap_or_else(|| panic!("Expression `{src}` failed outside evaluation: {e}")),
    }
}

fn range(value: Value) -> RangeValue {
    match value {
        Value::Range(range) => range,
        other => panic!("Expected a range, found {other:?}"),
    }
}

#[test]
fn integer_addition() {
    assert_eq!(eval("1 + 2"), Value::Int(3));
}

#[test]
fn mixed_addition_promotes_to_double() {
    assert_eq!(eval("1.0 + 2"), Value::Double(3.0));
    assert_eq!(render("1.0 + 2"), "3");
}

#[test]
fn string_repetition_in_both_orders() {
    assert_eq!(eval(r#""ab" * 3"#), Value::from("ababab"));
    assert_eq!(eval(r#"3 * "ab""#), Value::from("ababab"));
}

#[test]
fn ranges_ascend_descend_and_exclude() {
    assert_eq!(render("(1..3)"), "[1, 2, 3]");
    assert_eq!(render("(3..1)"), "[3, 2, 1]");
    assert_eq!(render("(1...3)"), "[1, 2]");
    assert_eq!(render("(1..<3)"), "[1, 2]");
    assert_eq!(eval("1..3"), Value::Range(RangeValue::inclusive(1, 3)));
}

#[test]
fn date_difference_is_one_day() {
    let one_day = TimeDelta::try_days(1).unwrap();
    assert_eq!(eval("date(2024, 3, 2) - date(2024, 3, 1)"), Value::Duration(one_day));
}

#[test]
fn shift_appends_and_prepends_without_mutation() {
    let mut context = Context::new();
    context.set_variable("xs", Value::list(vec![Value::Int(1), Value::Int(2)]));

    let appended = evaluate_in(&mut context, "xs << 3").unwrap();
    let prepended = evaluate_in(&mut context, "0 >> xs").unwrap();

    assert_eq!(appended.to_string(), "[1, 2, 3]");
    assert_eq!(prepended.to_string(), "[0, 1, 2]");
    assert_eq!(context.get_variable("xs").unwrap().to_string(), "[1, 2]");
}

#[test]
fn divide_round_matches_truncating_division() {
    let mut context = Context::new();
    let numerators = [-7, -1, 0, 5, 13, i32::MAX, i32::MIN + 1];
    let denominators = [-3, -1, 1, 2, 7];

    for a in numerators {
        for b in denominators {
            context.set_variable("a", Value::Int(a));
            context.set_variable("b", Value::Int(b));

            assert_eq!(evaluate_in(&mut context, "a // b").unwrap(), Value::Int(a / b), "{a} // {b}");
            #[allow(clippy::cast_precision_loss)]
            let quotient = a as f32 / b as f32;
            assert_eq!(evaluate_in(&mut context, "a / b").unwrap(), Value::Float(quotient), "{a} / {b}");
        }
    }
}

#[test]
fn range_lengths_and_membership() {
    let pairs = [(1, 5), (5, 1), (-3, 2), (2, -3), (0, 1), (1, 0), (-10, -4)];
    let mut context = Context::new();

    for (a, b) in pairs {
        context.set_variable("a", Value::Int(a));
        context.set_variable("b", Value::Int(b));

        let inclusive = range(evaluate_in(&mut context, "a..b").unwrap());
        let exclusive = range(evaluate_in(&mut context, "a..<b").unwrap());
        let distance = usize::try_from((a - b).abs()).unwrap();

        assert_eq!(inclusive.len(), distance + 1, "{a}..{b}");
        assert_eq!(exclusive.len(), distance, "{a}..<{b}");
        assert!(inclusive.iter().any(|n| n == a) && exclusive.iter().any(|n| n == a));
        assert!(inclusive.iter().any(|n| n == b));
        assert!(!exclusive.iter().any(|n| n == b));
    }
}

#[test]
fn ranges_are_restartable() {
    let value = range(eval("4..6"));
    let first: Vec<i32> = value.iter().collect();
    let second: Vec<i32> = value.iter().collect();

    assert_eq!(first, vec![4, 5, 6]);
    assert_eq!(first, second);
    assert_eq!(render("1..1"), "[1]");
    assert_eq!(render("1..<1"), "[]");
}

#[test]
fn string_repetition_counts() {
    let mut context = Context::new();
    context.set_variable("s", Value::from("xo"));

    for n in 0..5 {
        context.set_variable("n", Value::Int(n));
        let expected = Value::String("xo".repeat(usize::try_from(n).unwrap()));

        assert_eq!(evaluate_in(&mut context, "s * n").unwrap(), expected);
        assert_eq!(evaluate_in(&mut context, "n * s").unwrap(), expected);
    }

    assert_eq!(eval(r#""ab" * -2"#), Value::from(""));
    assert_eq!(eval(r#""ab" * 2L"#), Value::from("abab"));
}

#[test]
fn concatenation_preserves_order() {
    assert_eq!(eval(r#""a" + "b""#), Value::from("ab"));
    assert_eq!(eval(r#""b" + "a""#), Value::from("ba"));
    assert_eq!(eval(r#""x" + 1.5"#), Value::from("x1.5"));
    assert_eq!(eval(r#"2 + "x""#), Value::from("2x"));
    assert_eq!(eval(r#""a" + null"#), Value::from("a"));
}

#[test]
fn divide_widens_through_single_precision() {
    assert_eq!(eval("7 / 2"), Value::Float(3.5));
    assert_eq!(eval("1L / 4"), Value::Float(0.25));
    assert_eq!(eval("1.5f / 2"), Value::Float(0.75));
    assert_eq!(eval("0.1 / 1"), Value::Double(f64::from(0.1_f32)));
}

#[test]
fn divide_round_on_floats_truncates_through_int() {
    assert_eq!(eval("7.5 // 2"), Value::Double(3.0));
    assert_eq!(eval("-7.5 // 2"), Value::Double(-3.0));
    assert_eq!(eval("7.5f // 2"), Value::Double(3.0));
    assert_eq!(eval("1.0e10 // 1"), Value::Double(f64::from(i32::MIN)));
    assert_eq!(eval("1.0 // 0"), Value::Double(f64::from(i32::MIN)));
}

#[test]
fn modulus_in_each_type() {
    assert_eq!(eval("7 % 3"), Value::Int(1));
    assert_eq!(eval("-7 % 3"), Value::Int(-1));
    assert_eq!(eval("10L % 4"), Value::Long(2));
    assert_eq!(eval("7.5 % 2"), Value::Double(1.5));
    assert_eq!(eval("7.5f % 2"), Value::Float(1.5));
}

#[test]
fn promotion_ladder() {
    assert_eq!(eval("1 + 2L"), Value::Long(3));
    assert_eq!(eval("3000000000 + 1"), Value::Long(3_000_000_001));
    assert_eq!(eval("1.5f + 1"), Value::Float(2.5));
    assert_eq!(eval("1.5f + 1.0"), Value::Double(2.5));
    assert_eq!(eval("true + 1"), Value::Int(2));
    assert_eq!(eval("2L * 1.5f"), Value::Float(3.0));
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(eval("2147483647 + 1"), Value::Int(i32::MIN));
    assert_eq!(eval("-2147483647 - 2"), Value::Int(i32::MAX));
}

#[test]
fn comparisons() {
    assert_eq!(eval("2 < 3"), Value::Bool(true));
    assert_eq!(eval("3 <= 2"), Value::Bool(false));
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval("2L >= 2"), Value::Bool(true));
    assert_eq!(eval("true == 1"), Value::Bool(true));
    assert_eq!(eval("true != false"), Value::Bool(true));
    assert_eq!(eval(r#""abc" < "abd""#), Value::Bool(true));
    assert_eq!(eval(r#""10" == 10"#), Value::Bool(true));
    assert_eq!(eval(r#""10" < "9""#), Value::Bool(true));
}

#[test]
fn strings_compare_by_utf16_code_units() {
    let mut context = Context::new();
    context.set_variable("halfwidth", Value::from("\u{FF61}"));
    context.set_variable("emoji", Value::from("\u{1F600}"));

    assert_eq!(evaluate_in(&mut context, "halfwidth > emoji").unwrap(), Value::Bool(true));
}

#[test]
fn null_handling() {
    assert_eq!(eval("null == null"), Value::Bool(true));
    assert_eq!(eval("null != 1"), Value::Bool(true));
    assert_eq!(eval("0 == null"), Value::Bool(false));
    assert_eq!(eval("null ?? 5"), Value::Int(5));
    assert_eq!(eval("3 ?? 5"), Value::Int(3));
    assert_eq!(eval("false ?? 5"), Value::Bool(false));
    assert!(matches!(runtime_error("null + 1"), RuntimeError::ConversionFailure { .. }));
}

#[test]
fn logical_operators_use_truthiness() {
    assert_eq!(eval("true && false"), Value::Bool(false));
    assert_eq!(eval("null || 1"), Value::Bool(true));
    assert_eq!(eval("0 and 1"), Value::Bool(true));
    assert_eq!(eval(r#""" or false"#), Value::Bool(true));
    assert_eq!(eval("null && true"), Value::Bool(false));
    assert_eq!(eval("!0"), Value::Bool(false));
    assert_eq!(eval("!null"), Value::Bool(true));
}

#[test]
fn dates_and_time_spans() {
    assert_eq!(eval("date(2024, 3, 1) < date(2024, 3, 2)"), Value::Bool(true));
    assert_eq!(eval("date(2024, 3, 1) + days(1) == date(2024, 3, 2)"), Value::Bool(true));
    assert_eq!(render("date(2024, 3, 1, 12, 0, 0) - date(2024, 3, 1)"), "12:00:00");
    assert_eq!(render("date(2024, 3, 1) - date(2024, 3, 2)"), "-1.00:00:00");
    assert_eq!(render(r#""on " + date(2024, 3, 9)"#), "on 09 Mar 2024");
}

#[test]
fn unsupported_operators() {
    let cases = ["1 << 2",
                 "[1] >> 2",
                 r#""a" - "b""#,
                 r#""a" // 2"#,
                 "true + true",
                 "true < false",
                 "1L..3",
                 "1.5..3",
                 "date(2024, 1, 1) * date(2024, 1, 2)",
                 "date(2024, 1, 1) - days(1)"];

    for src in cases {
        assert!(matches!(runtime_error(src), RuntimeError::UnsupportedOperator { .. }),
                "{src}");
    }
}

#[test]
fn unsupported_types() {
    let error = runtime_error("days(1) + date(2024, 1, 1)");
    assert!(matches!(error,
                     RuntimeError::UnsupportedTypes { op: BinaryOperator::Add, .. }));
    assert!(matches!(runtime_error("[1] + [2]"), RuntimeError::UnsupportedTypes { .. }));
}

#[test]
fn conversion_failures() {
    assert!(matches!(runtime_error("date(2024, 1, 1) + 1"),
                     RuntimeError::ConversionFailure { .. }));
    assert!(matches!(runtime_error("[1] + 1"), RuntimeError::ConversionFailure { .. }));
}

#[test]
fn oversized_repetition_overflows() {
    for src in [r#""ab" * 9223372036854775807L"#,
                r#"9223372036854775807L * "x""#,
                r#""ab" * 2147483647"#]
    {
        assert!(matches!(runtime_error(src), RuntimeError::Overflow { .. }), "{src}");
    }

    assert_eq!(eval(r#""" * 9223372036854775807L"#), Value::from(""));
    assert_eq!(eval(r#""ab" * 3L"#), Value::from("ababab"));
}

#[test]
fn errors_over_large_ranges_stay_short() {
    let error = runtime_error("(0..2000000000) + 1");
    assert!(matches!(&error, RuntimeError::ConversionFailure { value, .. } if value == "0..2000000000"));
    assert!(error.to_string().len() < 200, "{error}");

    let error = runtime_error("[0..<2000000000, 1, 2, 3, 4, 5, 6, 7, 8, 9] + [1]");
    let message = error.to_string();
    assert!(message.contains("[0..<2000000000, 1, 2, 3, 4, 5, 6, 7, ...]/list"), "{message}");
    assert!(message.len() < 300, "{message}");
}

#[test]
fn string_multiply_misuse() {
    assert!(matches!(runtime_error(r#""a" * "b""#), RuntimeError::StringOperatorMisuse { .. }));
    assert!(matches!(runtime_error(r#""ab" * 2.5"#),
                     RuntimeError::StringOperatorMisuse { .. }));
}

#[test]
fn integer_division_faults() {
    assert!(matches!(runtime_error("1 // 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1L % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("(-2147483647 - 1) // -1"), RuntimeError::Overflow { .. }));
    assert_eq!(eval("1 / 0"), Value::Float(f32::INFINITY));
}

#[test]
fn errors_carry_expression_text_and_span() {
    let error = runtime_error("1 +\n(true << false)");

    let RuntimeError::UnsupportedOperator { expression,
                                            left,
                                            right,
                                            span,
                                            .. } = error
    else {
        panic!("unexpected error {error:?}");
    };

    assert_eq!(expression, "true << false");
    assert_eq!(left, "true");
    assert_eq!(right, "false");
    assert_eq!(span.line, 2);
}

#[test]
fn reference_context_errors() {
    assert!(matches!(runtime_error("missing + 1"), RuntimeError::UnknownVariable { .. }));
    assert!(matches!(runtime_error("nope(1)"), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(runtime_error("days(1, 2)"),
                     RuntimeError::ArgumentCountMismatch { found: 2, .. }));
    assert!(matches!(runtime_error("date(2024, 2, 30)"), RuntimeError::InvalidArgument { .. }));
    assert!(matches!(runtime_error(r#"-"a""#), RuntimeError::UnsupportedUnary { .. }));
}

#[test]
fn parse_errors() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("[1, 2");
    assert_failure("1 2");
    assert_failure("1 @ 2");
    assert_failure(r#""bad \q escape""#);

    assert!(matches!(parse_source("99999999999999999999"),
                     Err(ParseError::LiteralOutOfRange { .. })));
    assert!(matches!(parse_source("1 +"), Err(ParseError::UnexpectedEndOfInput { line: 1 })));
    assert!(matches!(parse_source("(1"), Err(ParseError::ExpectedDelimiter { expected: ')', .. })));
}

#[test]
fn precedence_and_rendering() {
    assert_eq!(parse_source("1 + 2 * 3").unwrap().to_string(), "1 + (2 * 3)");
    assert_eq!(parse_source("1..2 + 3").unwrap().to_string(), "1 .. (2 + 3)");
    assert_eq!(parse_source("a ?? b || c").unwrap().to_string(), "a ?? (b || c)");
    assert_eq!(parse_source("1 - 2 - 3").unwrap().to_string(), "(1 - 2) - 3");
    assert_eq!(parse_source("1...3").unwrap().to_string(), "1 ..< 3");
    assert_eq!(eval("1 - 2 - 3"), Value::Int(-4));
    assert_eq!(eval("2 + 3 * 4 == 14 && 1 < 2"), Value::Bool(true));
}

#[test]
fn comments_and_newlines_are_ignored() {
    assert_eq!(eval("1 + # one\n2 # two"), Value::Int(3));
}

#[test]
fn custom_date_format() {
    let mut context = Context::new().with_date_format("%Y-%m-%d");
    let value = evaluate_in(&mut context, r#""due " + date(2025, 12, 31)"#).unwrap();

    assert_eq!(value, Value::from("due 2025-12-31"));
}
