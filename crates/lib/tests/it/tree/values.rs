use arbor::{
    Node, Value,
    tree::{lookup, path::split_path, remove_at},
};
use serde_json::json;

#[test]
fn test_json_round_trip_through_serde() {
    let input = json!({"name": "alice", "score": 1.5, "tags": ["a"], "nested": {"ok": true, "none": null}});
    let value: Value = serde_json::from_value(input.clone()).unwrap();

    assert_eq!(value.child("score"), Some(Value::Float(1.5)));
    assert_eq!(serde_json::to_value(&value).unwrap(), input);
}

#[test]
fn test_equality_is_structural_for_containers() {
    let a = Value::from(json!({"x": [1, 2]}));
    let b = Value::from(json!({"x": [1, 2]}));
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert_ne!(a, Value::from(json!({"x": [2, 1]})));
}

#[test]
fn test_lookup_and_remove_share_path_rules() {
    let root = Node::new();
    root.insert("users", Value::from(json!({"alice": {"tags": ["a", "b"]}})));

    assert_eq!(lookup(&split_path("users..alice.tags.0"), &root).unwrap(), "a");
    assert_eq!(remove_at(&split_path("users.alice.tags.0"), &root).unwrap(), "a");
    assert_eq!(lookup(&split_path("users.alice.tags.0"), &root), Some(Value::Null));
    assert!(remove_at(&[], &root).is_none());
    assert_eq!(root.len(), 1);
}

#[test]
fn test_display_renders_json() {
    assert_eq!(Value::from("plain").to_string(), "plain");
    assert_eq!(Value::from(json!({"a": [1, null]})).to_string(), r#"{"a":[1,null]}"#);
}
