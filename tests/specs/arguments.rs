//! Argument type validation for the dynamically typed entry point.

use crate::prelude::*;

const TEXT_ERROR: &str = "Expected a string, found";
const PHRASE_ERROR: &str =
    "Search strings must either be passed as a string or an array of strings, found";

/// > A non-string text argument is rejected, naming the received type.
#[test]
fn non_string_text_is_rejected() {
    for (text, type_name) in [
        (json!(1), "number"),
        (json!(true), "boolean"),
        (json!(null), "null"),
        (json!([]), "array"),
        (json!({}), "object"),
    ] {
        let message = rejected(text, json!(""));
        assert!(
            message.ends_with(&format!("{TEXT_ERROR} {type_name}")),
            "{message}"
        );
    }
}

/// > A phrase argument that is neither a string nor an array is rejected.
#[test]
fn non_string_phrase_is_rejected() {
    for (query, type_name) in [
        (json!(1), "number"),
        (json!(true), "boolean"),
        (json!(null), "null"),
        (json!({}), "object"),
    ] {
        let message = rejected(json!(""), query);
        assert!(
            message.ends_with(&format!("{PHRASE_ERROR} {type_name}")),
            "{message}"
        );
    }
}

/// > An array holding a non-string is rejected, naming the element type.
#[test]
fn array_with_non_string_element_is_rejected() {
    let message = rejected(json!("abc"), json!(["abc", null]));
    assert!(message.ends_with(&format!("{PHRASE_ERROR} array containing null")));
}

/// > Well-typed dynamic calls return the same shapes as typed calls.
#[test]
fn well_typed_dynamic_calls_succeed() {
    let single = lookalike::find_value(&json!("abcabc"), &json!("abc")).unwrap();
    assert_eq!(single.to_json(), json!(["abc", "abc"]));

    let batch = lookalike::find_value(&json!("abcdef"), &json!(["abc", "xyz"])).unwrap();
    assert_eq!(batch.to_json(), json!({ "abc": ["abc"], "xyz": [] }));
}
