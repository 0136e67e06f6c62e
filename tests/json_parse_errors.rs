//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used in condition message decode hints.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[allow(dead_code)]
#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;
use serde_json::{Map, Value};

type Kv = Map<String, Value>;

#[test]
fn category_mapping_handles_syntax_and_truncation() {
    let syntax_err = parse::from_str::<Kv>(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let truncated_err = parse::from_str::<Kv>(r#"{"a":1"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&truncated_err),
        ParseFailureCategory::Truncated
    );
}

#[test]
fn category_mapping_flags_non_object_top_level() {
    for input in ["[1,2,3]", "null", "\"text\"", "42", "true"] {
        let err = parse::from_str::<Kv>(input).unwrap_err();
        assert_eq!(
            parse::categorize_error(&err),
            ParseFailureCategory::NotAnObject,
            "input {input}"
        );
    }
}

#[test]
fn quoted_value_text_does_not_change_category() {
    let cases = [
        r#""recursion limit""#,
        r#""number out of range""#,
        r#""EOF while parsing a value""#,
        r#""invalid type: null, expected u32""#,
    ];
    for input in cases {
        let err = parse::from_str::<Kv>(input).unwrap_err();
        assert_eq!(
            parse::categorize_error(&err),
            ParseFailureCategory::NotAnObject,
            "input {input}"
        );
    }
}

#[test]
fn shape_errors_ignore_quoted_map_expectation() {
    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Attempts {
        count: u32,
    }

    let err = serde_json::from_str::<Attempts>(r#"{"count":"x, expected a map"}"#).unwrap_err();
    assert_eq!(parse::categorize_error(&err), ParseFailureCategory::Shape);
}

#[test]
fn category_mapping_handles_numeric_and_depth_errors() {
    let number_err = parse::from_str::<Kv>(r#"{"n":1e309}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&number_err),
        ParseFailureCategory::NumericRange
    );

    let depth = 256usize;
    let mut payload = String::from(r#"{"deep":"#);
    payload.push_str(&"[".repeat(depth));
    payload.push('0');
    payload.push_str(&"]".repeat(depth));
    payload.push('}');
    let depth_err = parse::from_str::<Kv>(&payload).unwrap_err();
    assert_eq!(
        parse::categorize_error(&depth_err),
        ParseFailureCategory::DepthLimit
    );
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str::<Kv>("[]").unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: not-an-object"));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn hint_does_not_echo_payload() {
    let err = parse::from_str::<Kv>(r#"{"secret-token": oops}"#).unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(!hint.contains("secret-token"));
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
}
