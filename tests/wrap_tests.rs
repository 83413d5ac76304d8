//! Integration tests for wrapping functions with placeholder arguments.

use pointfree::evaluate::EvaluationError;
use pointfree::prelude::*;
use rstest::rstest;

/// Adds numbers, concatenates anything else.
fn plus() -> Function {
    Function::new(|arguments| {
        let (left, right) = (&arguments[0], &arguments[1]);
        match (left, right) {
            (Value::Number(left), Value::Number(right)) => Ok(Value::from(left + right)),
            _ => Ok(Value::from(format!("{left}{right}"))),
        }
    })
    .named("plus")
}

fn say_greeting() -> Function {
    Function::new(|arguments| Ok(Value::from(format!("{}, {}!", arguments[0], arguments[1]))))
}

// =============================================================================
// Eager calls
// =============================================================================

#[rstest]
#[case(args![1, 3], Value::from(4))]
#[case(args!["cc", "dd"], Value::from("ccdd"))]
fn test_literal_arguments_call_immediately(
    #[case] arguments: Vec<Argument>,
    #[case] expected: Value,
) {
    let bound = placeholderify(plus()).bind(arguments).unwrap();
    assert!(!bound.is_deferred());
    assert_eq!(bound.into_value(), Some(expected));
}

// =============================================================================
// Deferred calls
// =============================================================================

#[rstest]
fn test_single_placeholder_parameter() {
    let say_hi = Function::new(|arguments| Ok(Value::from(format!("Hi, {}!", arguments[0]))));
    let bound = placeholderify(say_hi).bind(args![__]).unwrap();
    assert_eq!(
        bound.evaluate(&[Value::from("Hendrik")]),
        Ok(Value::from("Hi, Hendrik!"))
    );
}

#[rstest]
fn test_two_placeholder_parameters() {
    let bound = placeholderify(say_greeting()).bind(args![__, __]).unwrap();
    assert_eq!(bound.arity(), 2);
    assert_eq!(
        bound.evaluate(&[Value::from("Hello"), Value::from("Hendrik")]),
        Ok(Value::from("Hello, Hendrik!"))
    );
}

#[rstest]
fn test_mixed_parameters() {
    let bound = placeholderify(say_greeting()).bind(args!["Oh hi", __]).unwrap();
    assert_eq!(
        bound.evaluate(&[Value::from("Hendrik")]),
        Ok(Value::from("Oh hi, Hendrik!"))
    );
}

#[rstest]
fn test_property_placeholder_parameter() {
    let subject = Value::object([("attr2", 2)]);
    let bound = __.wrap(plus()).bind(args![__.property("attr2"), 7]).unwrap();
    assert_eq!(bound.evaluate(&[subject]), Ok(Value::from(9)));
}

#[rstest]
fn test_nested_placeholders_consume_depth_first() {
    let inner = placeholderify(plus()).bind(args![__, __]).unwrap();
    let outer = placeholderify(plus()).bind(args![inner, __]).unwrap();
    assert_eq!(outer.arity(), 3);
    assert_eq!(
        outer.evaluate(&[Value::from("a"), Value::from("b"), Value::from("c")]),
        Ok(Value::from("abc"))
    );
}

#[rstest]
fn test_surplus_arguments_are_ignored() {
    let bound = placeholderify(say_greeting()).bind(args![__, "you"]).unwrap();
    assert_eq!(
        bound.evaluate(&[Value::from("Hey"), Value::from("unused")]),
        Ok(Value::from("Hey, you!"))
    );
}

#[rstest]
fn test_too_few_arguments() {
    let bound = placeholderify(say_greeting()).bind(args![__, __]).unwrap();
    assert_eq!(
        bound.evaluate(&[Value::from("Hello")]),
        Err(EvaluationError::ArgumentPoolExhausted {
            requested: 1,
            remaining: 0
        })
    );
}

#[rstest]
fn test_deferred_function_errors_propagate() {
    let failing = Function::new(|arguments| {
        Err(EvaluationError::thrown(format!("rejected {}", arguments[0])))
    });
    let bound = placeholderify(failing).bind(args![__]).unwrap();
    assert_eq!(
        bound.evaluate(&[Value::from(5)]),
        Err(EvaluationError::thrown("rejected 5"))
    );
}

#[rstest]
fn test_deferred_result_feeds_further_chain() {
    let greeting = placeholderify(say_greeting())
        .bind(args![__, __])
        .unwrap()
        .into_token()
        .unwrap();
    let shout = greeting.method("toUpperCase", args![]);
    assert_eq!(
        shout.evaluate(&[Value::from("hello"), Value::from("world")]),
        Ok(Value::from("HELLO, WORLD!"))
    );
}
