#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Value` and `Scalar` serialize untagged, so they map directly onto
//! JSON documents.

use lazyseq::prelude::*;
use rstest::rstest;

// =============================================================================
// Value
// =============================================================================

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Bool(true))]
#[case("42", Value::Int(42))]
#[case("1.5", Value::Float(1.5))]
#[case("\"text\"", Value::from("text"))]
#[case("[1,\"a\",null]", Value::List(vec![Value::Int(1), Value::from("a"), Value::Null]))]
fn test_value_json_roundtrip(#[case] json: &str, #[case] expected: Value) {
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(value, expected);
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
}

#[rstest]
fn test_value_map_keeps_document_order() {
    let json = r#"{"zeta":1,"alpha":{"nested":[true]}}"#;
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(value.to_string(), "{zeta: 1, alpha: {nested: [true]}}");
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
}

#[rstest]
fn test_decoded_document_as_sequence() {
    let json = r#"[{"name":"ada","age":36},{"name":"bob"}]"#;
    let document: Value = serde_json::from_str(json).unwrap();

    let mut names = from_value(document).unwrap().pluck("name");
    assert_eq!(names.join(",").unwrap(), "ada,bob");
}

// =============================================================================
// Scalar
// =============================================================================

#[rstest]
fn test_scalar_json_roundtrip() {
    let scalars = vec![
        Scalar::Null,
        Scalar::Bool(false),
        Scalar::Int(-3),
        Scalar::from(0.25),
        Scalar::from("s"),
    ];
    let json = serde_json::to_string(&scalars).unwrap();
    assert_eq!(json, r#"[null,false,-3,0.25,"s"]"#);

    let restored: Vec<Scalar> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, scalars);
}

#[rstest]
fn test_scalar_rejects_composites() {
    assert!(serde_json::from_str::<Scalar>("[1]").is_err());
}

// =============================================================================
// KeyValuePair
// =============================================================================

#[rstest]
fn test_key_value_pair_json_roundtrip() {
    let pair = KeyValuePair::new("id".to_string(), 7);
    let json = serde_json::to_string(&pair).unwrap();
    assert_eq!(json, r#"{"key":"id","value":7}"#);

    let restored: KeyValuePair<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, pair);
}
