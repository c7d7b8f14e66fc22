//! Serialized representation of `Maybe`

use insta::assert_snapshot;
use serde_json::json;

use maybe_core::{IntoMaybe, Maybe, is_maybe};

#[test]
fn some_serializes_with_kind_tag() {
    let json = serde_json::to_string(&Maybe::Some(42)).unwrap();
    assert_snapshot!(json, @r#"{"_kind":"Some","value":42}"#);
}

#[test]
fn none_serializes_as_bare_tag() {
    let json = serde_json::to_string(&Maybe::<i32>::None).unwrap();
    assert_snapshot!(json, @r#"{"_kind":"None"}"#);
}

#[test]
fn deserializes_tagged_json() {
    let some: Maybe<String> =
        serde_json::from_value(json!({"_kind": "Some", "value": "pt-BR"})).unwrap();
    let none: Maybe<String> = serde_json::from_value(json!({"_kind": "None"})).unwrap();

    assert_eq!(some, Maybe::Some("pt-BR".to_string()));
    assert_eq!(none, Maybe::None);
}

#[test]
fn serialized_values_are_recognized_and_flattened() {
    let value = serde_json::to_value(Maybe::Some("en-US")).unwrap();
    assert!(is_maybe(&value));
    assert_eq!(value.into_maybe(), Maybe::Some(json!("en-US")));

    assert!(!is_maybe(&json!({"language": "en-US"})));
}

#[test]
fn then_flattens_untyped_results() {
    let lookup = |key: &str| match key {
        "user" => json!({"_kind": "Some", "value": "pt-BR"}),
        "org" => json!({"_kind": "None"}),
        _ => json!("raw"),
    };

    assert_eq!(Maybe::Some("user").then(lookup), Maybe::Some(json!("pt-BR")));
    assert_eq!(Maybe::Some("org").then(lookup), Maybe::None);
    assert_eq!(Maybe::Some("other").then(lookup), Maybe::Some(json!("raw")));
}
