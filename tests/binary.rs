use std::{cell::Cell, rc::Rc};

use pretty_assertions::assert_eq;
use quill::{
    ast::{BinaryExpression, BinaryOperator, Expr, LiteralValue, Span},
    error::RuntimeError,
    evaluate_in,
    interpreter::{
        evaluator::{
            binary::promotion::promotion_target,
            context::EvalContext,
            core::{Context, EvalResult},
        },
        value::{
            core::{Value, ValueKind},
            object::{EnumValue, ScriptObject},
        },
    },
    parse_source,
};

/// A context with a `tick(x)` function that counts its calls and returns `x`.
fn counting_context() -> (Context, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let mut context = Context::new();

    let counter = Rc::clone(&calls);
    context.register_function("tick", move |args, _span| {
               counter.set(counter.get() + 1);
               Ok(args.first().cloned().unwrap_or(Value::Null))
           });

    (context, calls)
}

fn binary(source: &str) -> BinaryExpression {
    match parse_source(source).unwrap() {
        Expr::Binary(node) => node,
        other => panic!("`{source}` is not a binary expression: {other:?}"),
    }
}

fn literal(value: LiteralValue) -> Expr {
    Expr::Literal { value,
                    span: Span::default() }
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let cases = [("tick(false) && tick(true)", Value::Bool(false)),
                 ("tick(true) || tick(false)", Value::Bool(true)),
                 ("tick(true) and tick(true)", Value::Bool(true)),
                 ("tick(null) or tick(null)", Value::Bool(false))];

    for (source, expected) in cases {
        let (mut context, calls) = counting_context();
        assert_eq!(evaluate_in(&mut context, source).unwrap(), expected, "{source}");
        assert_eq!(calls.get(), 2, "{source}");
    }
}

#[test]
fn coalescing_evaluates_both_sides() {
    let (mut context, calls) = counting_context();
    assert_eq!(evaluate_in(&mut context, "tick(1) ?? tick(2)").unwrap(), Value::Int(1));
    assert_eq!(calls.get(), 2);

    let (mut context, calls) = counting_context();
    assert_eq!(evaluate_in(&mut context, "tick(null) ?? tick(2)").unwrap(), Value::Int(2));
    assert_eq!(calls.get(), 2);
}

#[test]
fn left_operand_is_evaluated_first() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut context = Context::new();

    let seen = Rc::clone(&order);
    context.register_function("mark", move |args, _span| {
               seen.borrow_mut().push(args[0].to_string());
               Ok(args[0].clone())
           });

    evaluate_in(&mut context, r#"mark("left") + mark("right")"#).unwrap();
    assert_eq!(*order.borrow(), vec!["left".to_string(), "right".to_string()]);
}

#[test]
fn errors_in_operands_stop_evaluation() {
    let (mut context, calls) = counting_context();
    let error = evaluate_in(&mut context, "missing && tick(true)").unwrap_err();

    assert!(error.to_string().contains("missing"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn shift_copies_operand_lists() {
    let node = binary("[1] << 2");
    let original = Value::list(vec![Value::Int(1)]);

    let result = node.apply(&Context::new(), &original, &Value::Int(2)).unwrap();

    assert_eq!(result.to_string(), "[1, 2]");
    assert_eq!(original.to_string(), "[1]");
    match (&original, &result) {
        (Value::List(a), Value::List(b)) => assert!(!Rc::ptr_eq(a, b)),
        _ => panic!("expected lists"),
    }

    let node = binary("0 >> [1]");
    let result = node.apply(&Context::new(), &Value::Int(0), &original).unwrap();
    assert_eq!(result.to_string(), "[0, 1]");
    assert_eq!(original.to_string(), "[1]");
}

#[derive(Debug)]
struct Weekdays;

impl ScriptObject for Weekdays {
    fn type_name(&self) -> &str {
        "weekdays"
    }

    fn as_sequence(&self) -> Option<Vec<Value>> {
        Some(vec![Value::from("mon"), Value::from("tue")])
    }
}

#[derive(Debug)]
struct Opaque;

impl ScriptObject for Opaque {
    fn type_name(&self) -> &str {
        "opaque"
    }
}

#[test]
fn sequence_capable_objects_take_part_in_shifts() {
    let mut context = Context::new();
    context.set_variable("week", Value::object(Weekdays));
    context.set_variable("blob", Value::object(Opaque));

    assert_eq!(evaluate_in(&mut context, r#"week << "wed""#).unwrap().to_string(),
               "[mon, tue, wed]");
    assert_eq!(evaluate_in(&mut context, r#""sun" >> week"#).unwrap().to_string(),
               "[sun, mon, tue]");
    assert_eq!(evaluate_in(&mut context, r#""is " + blob"#).unwrap(), Value::from("is opaque"));

    let error = evaluate_in(&mut context, "blob << 1").unwrap_err();
    assert!(matches!(error.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::UnsupportedOperator { left_kind: ValueKind::Object, .. })));
}

#[test]
fn enums_promote_like_int() {
    let mut context = Context::new();
    context.set_variable("green", Value::Enum(EnumValue::new("Color", "Green", 2)));
    context.set_variable("red", Value::Enum(EnumValue::new("Color", "Red", 1)));

    assert_eq!(evaluate_in(&mut context, "green + 1").unwrap(), Value::Int(3));
    assert_eq!(evaluate_in(&mut context, "green == 2").unwrap(), Value::Bool(true));
    assert_eq!(evaluate_in(&mut context, "green > red").unwrap(), Value::Bool(true));
    assert_eq!(evaluate_in(&mut context, "green * 1.5").unwrap(), Value::Double(3.0));
    assert_eq!(evaluate_in(&mut context, "red..green").unwrap().to_string(), "[1, 2]");
    assert_eq!(evaluate_in(&mut context, r#""c: " + green"#).unwrap(), Value::from("c: Green"));
}

/// Treats zero as false and shouts when stringifying.
struct Strict {
    inner: Context,
}

impl EvalContext for Strict {
    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.inner.eval(expr)
    }

    fn coerce_to_bool(&self, value: &Value) -> bool {
        match value {
            Value::Int(n) => *n != 0,
            Value::Null | Value::Bool(false) => false,
            _ => true,
        }
    }

    fn coerce_to_string(&self, _span: Span, value: &Value) -> String {
        value.to_string().to_uppercase()
    }
}

#[test]
fn custom_context_supplies_coercions() {
    let mut strict = Strict { inner: Context::new() };

    assert_eq!(binary("0 || 0").evaluate(&mut strict).unwrap(), Value::Bool(false));
    assert_eq!(binary("0 || 0").evaluate(&mut Context::new()).unwrap(), Value::Bool(true));
    assert_eq!(binary(r#""ab" + true"#).evaluate(&mut strict).unwrap(), Value::from("ABTRUE"));
    assert_eq!(binary(r#""ab" * 2"#).evaluate(&mut strict).unwrap(), Value::from("ABAB"));
}

/// Answers every coercion with a string.
struct Broken;

impl EvalContext for Broken {
    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        Context::new().eval(expr)
    }

    fn coerce_to_kind(&self, _span: Span, _value: &Value, _kind: ValueKind) -> EvalResult<Value> {
        Ok(Value::from("nope"))
    }
}

#[test]
fn coercion_to_the_wrong_kind_is_a_conversion_failure() {
    let error = binary("1 + 2L").evaluate(&mut Broken).unwrap_err();

    assert_eq!(error,
               RuntimeError::ConversionFailure { value:      "1".to_string(),
                                                 from:       ValueKind::Int,
                                                 to:         ValueKind::Long,
                                                 expression: Some("1 + 2L".to_string()),
                                                 span:       Span::new(0, 6, 1), });
    assert!(error.to_string().contains("in `1 + 2L`"), "{error}");
}

#[test]
fn same_kind_operands_skip_coercion() {
    assert_eq!(binary("1 + 2").evaluate(&mut Broken).unwrap(), Value::Int(3));
}

#[test]
fn nodes_built_by_hand_evaluate() {
    let node = BinaryExpression::new(literal(LiteralValue::Long(5)),
                                     BinaryOperator::DivideRound,
                                     literal(LiteralValue::Int(2)));

    assert_eq!(node.to_string(), "5L // 2");
    assert_eq!(node.evaluate(&mut Context::new()).unwrap(), Value::Long(2));
}

#[test]
fn promotion_order() {
    use ValueKind::{Bool, Date, Double, Enum, Float, Int, Long, String};

    assert_eq!(promotion_target(Int, Double), Some(Double));
    assert_eq!(promotion_target(Float, Long), Some(Float));
    assert_eq!(promotion_target(Bool, Long), Some(Long));
    assert_eq!(promotion_target(Enum, Enum), Some(Int));
    assert_eq!(promotion_target(Bool, Bool), Some(Bool));
    assert_eq!(promotion_target(Date, Int), Some(Int));
    assert_eq!(promotion_target(Date, String), None);
}

#[test]
fn operator_categories() {
    assert!(BinaryOperator::RangeExclude.is_calculation());
    assert!(BinaryOperator::CompareLessOrEqual.is_comparison());
    assert!(!BinaryOperator::EmptyCoalescing.is_calculation());
    assert!(!BinaryOperator::ShiftLeft.is_calculation());
}

#[test]
fn error_messages_name_kinds_and_location() {
    let mut context = Context::new();
    let error = evaluate_in(&mut context, "days(1) + date(2024, 1, 1)").unwrap_err();
    let message = error.to_string();

    assert!(message.contains("timespan"), "{message}");
    assert!(message.contains("date"), "{message}");
    assert!(message.contains("line 1"), "{message}");
}
