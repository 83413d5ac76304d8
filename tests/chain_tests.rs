//! Integration tests for recorded chains.
//!
//! Every test records a chain against `__` and replays it against a shared
//! test object carrying plain properties, nested objects, arrays and methods.

use pointfree::evaluate::EvaluationError;
use pointfree::prelude::*;
use rstest::rstest;

fn number(value: &Value) -> f64 {
    value.to_number()
}

fn test_object_with(attr2: i32) -> Value {
    let attr3 = Object::builder()
        .property("attr", 3)
        .method("fun1", |_, _| Ok(Value::from("Correctly mapped!")))
        .method("fun2", |receiver, arguments| {
            let attr = receiver.get(&Key::from("attr")).unwrap_or_default();
            Ok(Value::from(number(&attr) * number(&arguments[0])))
        })
        .build();

    Object::builder()
        .property("attr1", "attr_1")
        .property("attr2", attr2)
        .property("attr3", attr3)
        .property("attr4", Value::array(["arr1", "arr2", "arr3", "arr4"]))
        .method("fun1", |_, _| Ok(Value::from("Correctly mapped!")))
        .method("fun2", |_, _| Ok(Value::object([("attr", "fun_2")])))
        .method("fun3", |_, arguments| {
            Ok(Value::from(format!("This is a {}.", arguments[0])))
        })
        .method("fun4", |receiver, arguments| {
            let attr2 = receiver.get(&Key::from("attr2")).unwrap_or_default();
            Ok(Value::from(number(&attr2) * number(&arguments[0])))
        })
        .method("fun5", |_, arguments| {
            Ok(Value::from(format!("{} {}", arguments[0], arguments[1])))
        })
        .method("funN", |_, arguments| {
            Ok(Value::from(arguments.iter().map(number).sum::<f64>()))
        })
        .build()
        .into()
}

fn test_object() -> Value {
    test_object_with(2)
}

// =============================================================================
// Property reads
// =============================================================================

#[rstest]
fn test_single_attribute() {
    assert_eq!(__.property("attr1").apply(&test_object()), Ok(Value::from("attr_1")));
}

#[rstest]
#[case(0, "correctly mapped!")]
#[case(1, "also mapped correctly...")]
fn test_numeric_attribute(#[case] index: usize, #[case] expected: &str) {
    let subject = Value::array(["correctly mapped!", "also mapped correctly..."]);
    assert_eq!(__.index(index).apply(&subject), Ok(Value::from(expected)));
}

#[rstest]
fn test_chained_attributes() {
    assert_eq!(
        __.property("attr3").property("attr").apply(&test_object()),
        Ok(Value::from(3))
    );
}

#[rstest]
fn test_indexed_attribute_inside_chain() {
    assert_eq!(
        __.property("attr4").index(2).apply(&test_object()),
        Ok(Value::from("arr3"))
    );
}

#[rstest]
fn test_function_attribute_is_returned_uncalled() {
    let value = __.property("fun1").apply(&test_object()).unwrap();
    let Some(function) = value.as_function() else {
        panic!("expected a function, got {value:?}");
    };
    assert_eq!(
        function.call(&Value::Undefined, &[]),
        Ok(Value::from("Correctly mapped!"))
    );
}

// =============================================================================
// Method calls
// =============================================================================

#[rstest]
fn test_method_without_arguments() {
    assert_eq!(
        __.method("fun1", args![]).apply(&test_object()),
        Ok(Value::from("Correctly mapped!"))
    );
}

#[rstest]
fn test_method_with_one_argument() {
    assert_eq!(
        __.method("fun3", args!["test"]).apply(&test_object()),
        Ok(Value::from("This is a test."))
    );
}

#[rstest]
#[case(args![1, 2], 3)]
#[case(args![1, 2, 4], 7)]
#[case(args![1, 2, 4, 1, 7], 15)]
fn test_method_with_n_arguments(#[case] arguments: Vec<Argument>, #[case] expected: i32) {
    assert_eq!(
        __.method("funN", arguments).apply(&test_object()),
        Ok(Value::from(expected))
    );
}

#[rstest]
#[case(2, 3, 6)]
#[case(1, 4, 4)]
fn test_method_reads_its_receiver(#[case] attr2: i32, #[case] factor: i32, #[case] expected: i32) {
    assert_eq!(
        __.method("fun4", args![factor]).apply(&test_object_with(attr2)),
        Ok(Value::from(expected))
    );
}

#[rstest]
fn test_nested_method_without_arguments() {
    assert_eq!(
        __.property("attr3").method("fun1", args![]).apply(&test_object()),
        Ok(Value::from("Correctly mapped!"))
    );
}

#[rstest]
fn test_attribute_of_method_result() {
    assert_eq!(
        __.method("fun2", args![]).property("attr").apply(&test_object()),
        Ok(Value::from("fun_2"))
    );
}

#[rstest]
fn test_nested_method_reads_nested_receiver() {
    assert_eq!(
        __.property("attr3").method("fun2", args![3]).apply(&test_object()),
        Ok(Value::from(9))
    );
}

#[rstest]
fn test_builtin_method_with_multiple_arguments() {
    assert_eq!(
        __.property("attr1").method("substr", args![1, 2]).apply(&test_object()),
        Ok(Value::from("tt"))
    );
}

#[rstest]
fn test_call_after_property_matches_method() {
    let called = __.property("fun3").call(args!["call"]);
    let method = __.method("fun3", args!["call"]);
    assert_eq!(called.apply(&test_object()), method.apply(&test_object()));
}

// =============================================================================
// Placeholder arguments
// =============================================================================

#[rstest]
fn test_single_placeholder_argument() {
    let subject = Value::object([(
        "fun",
        Value::function(|arguments| Ok(Value::from(format!("arg: {}", arguments[0])))),
    )]);
    let token = __.method("fun", args![__]);
    assert_eq!(
        token.evaluate(&[subject, Value::from("testarg")]),
        Ok(Value::from("arg: testarg"))
    );
}

#[rstest]
fn test_two_placeholder_arguments() {
    let subject = Value::object([(
        "fun",
        Value::function(|arguments| {
            Ok(Value::from(format!("{}-{}", arguments[0], arguments[1])))
        }),
    )]);
    let token = __.method("fun", args![__, __]);
    assert_eq!(token.arity(), 3);
    assert_eq!(
        token.evaluate(&[subject, Value::from("argument1"), Value::from("argument2")]),
        Ok(Value::from("argument1-argument2"))
    );
}

#[rstest]
fn test_chain_as_placeholder_argument() {
    let other = Value::object([("someAttr", 92)]);
    let token = __.method("fun4", args![__.property("someAttr")]);
    assert_eq!(token.evaluate(&[test_object(), other]), Ok(Value::from(184)));
}

#[rstest]
fn test_mixed_literal_and_placeholder_arguments() {
    let token = __.method("fun5", args!["literal", __]);
    assert_eq!(
        token.evaluate(&[test_object(), Value::from("placeholder")]),
        Ok(Value::from("literal placeholder"))
    );
}

#[rstest]
fn test_recalled_argument_consumes_only_its_latest_arguments() {
    let subject = Value::object([(
        "fun",
        Value::function(|arguments| Ok(Value::array(arguments.to_vec()))),
    )]);
    let inner = __.method("concat", args![__]).call(args!["lit"]);
    let token = __.method("fun", args![inner.clone(), __]);

    assert_eq!(inner.arity(), 1);
    assert_eq!(token.arity(), 3);
    assert_eq!(
        token.evaluate(&[subject, Value::from("s"), Value::from("x")]),
        Ok(Value::array(["slit", "x"]))
    );
}

// =============================================================================
// Branching
// =============================================================================

#[rstest]
fn test_branches_from_shared_prefix_are_independent() {
    let attr3 = __.property("attr3");
    let attr = attr3.property("attr");
    let scaled = attr3.method("fun2", args![2]);

    assert_eq!(attr3.chain().len(), 1);
    assert_eq!(attr.apply(&test_object()), Ok(Value::from(3)));
    assert_eq!(scaled.apply(&test_object()), Ok(Value::from(6)));
    assert!(attr3.apply(&test_object()).unwrap().as_object().is_some());
}

#[rstest]
fn test_tokens_are_reusable_across_evaluations() {
    let token = __.property("attr2");
    for attr2 in [1, 5, 9] {
        assert_eq!(token.apply(&test_object_with(attr2)), Ok(Value::from(attr2)));
    }
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn test_missing_nested_property() {
    let error = __.property("attr3").property("missing").apply(&test_object()).unwrap_err();
    assert!(matches!(
        error,
        EvaluationError::PropertyUndefined { ref key, .. } if key.is_name("missing")
    ));
}

#[rstest]
fn test_invoking_plain_attribute() {
    let error = __.method("attr1", args![]).apply(&test_object()).unwrap_err();
    assert!(matches!(error, EvaluationError::NotCallable { .. }));
    assert!(error.to_string().starts_with("property attr1 is not a function in {"));
}

#[rstest]
fn test_missing_placeholder_argument() {
    let token = __.method("fun5", args![__, __]);
    assert_eq!(
        token.evaluate(&[test_object(), Value::from("only one")]),
        Err(EvaluationError::ArgumentPoolExhausted {
            requested: 1,
            remaining: 0
        })
    );
}

#[rstest]
fn test_missing_subject() {
    assert_eq!(
        __.property("attr1").evaluate(&[]),
        Err(EvaluationError::ArgumentPoolExhausted {
            requested: 1,
            remaining: 0
        })
    );
}
