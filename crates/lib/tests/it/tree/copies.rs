use arbor::{
    Node, Value,
    tree::{List, Opaque},
};
use serde_json::json;

use crate::helpers::*;

/// {"l1": {"l2": {"l3": {"leaf": 1}}, "items": [[1, 2]]}}
fn three_levels() -> Value {
    Value::from(json!({"l1": {"l2": {"l3": {"leaf": 1}}, "items": [[1, 2]]}}))
}

fn deepest(value: &Value) -> Node {
    let l3 = value
        .child("l1")
        .and_then(|v| v.child("l2"))
        .and_then(|v| v.child("l3"))
        .unwrap();
    l3.as_map().unwrap().clone()
}

#[test]
fn test_deep_copy_isolates_every_level() {
    let original = three_levels();
    let copy = original.deep_copy();

    deepest(&copy).insert("leaf", 99);
    copy.child("l1")
        .and_then(|v| v.child("items"))
        .and_then(|v| v.child("0"))
        .unwrap()
        .as_list()
        .unwrap()
        .push(3);

    assert_eq!(deepest(&original).get("leaf").unwrap(), 1);
    assert_eq!(original.to_json(), json!({"l1": {"l2": {"l3": {"leaf": 1}}, "items": [[1, 2]]}}));
}

#[test]
fn test_shallow_copy_isolates_only_first_level() {
    let original = three_levels();
    let copy = original.shallow_copy();

    deepest(&copy).insert("leaf", 99);
    assert_eq!(deepest(&original).get("leaf").unwrap(), 99);

    copy.as_map().unwrap().insert("extra", true);
    assert!(!original.as_map().unwrap().contains_key("extra"));
}

#[test]
fn test_store_live_vs_copy_vs_deep_copy() {
    let store = seeded_store();

    let live = store.get("users.alice").unwrap();
    live.as_map().unwrap().insert("age", 31);
    assert_eq!(store.get("users.alice.age").unwrap(), 31);

    let shallow = store.get_copy("users.alice").unwrap();
    shallow.as_map().unwrap().insert("age", 40);
    assert_eq!(store.get("users.alice.age").unwrap(), 31);
    shallow
        .child("address")
        .unwrap()
        .as_map()
        .unwrap()
        .insert("city", "Bergen");
    assert_eq!(store.get("users.alice.address.city").unwrap(), "Bergen");

    let deep = store.get_deep_copy("users.alice").unwrap();
    deep.as_map().unwrap().insert("age", 50);
    deep.child("address")
        .and_then(|v| v.child("geo"))
        .unwrap()
        .as_map()
        .unwrap()
        .insert("lat", 0);
    assert_eq!(store.get("users.alice.age").unwrap(), 31);
    assert_eq!(store.get("users.alice.address.geo.lat").unwrap(), 59);
}

#[test]
fn test_live_list_reference() {
    let store = seeded_store();
    let tags = store.get("users.bob.tags").unwrap();
    tags.as_list().unwrap().push("oncall");

    assert_eq!(store.get("users.bob.tags.2").unwrap(), "oncall");
    assert_eq!(store.get_copy("users.bob.tags").unwrap().as_list().unwrap().len(), 3);
}

#[test]
fn test_opaque_values_are_shared_by_copies() {
    let marker = Opaque::new(String::from("handle"));
    let list = List::new();
    list.push(marker.clone());
    let value = Value::List(list);

    let deep = value.deep_copy();
    let copied = deep.child("0").unwrap();
    assert!(copied.as_opaque().unwrap().ptr_eq(&marker));
    assert_eq!(
        copied.as_opaque().unwrap().downcast_ref::<String>().map(String::as_str),
        Some("handle")
    );
    assert_eq!(deep.to_json(), json!([null]));
}

#[test]
fn test_primitives_pass_through_copies() {
    let store = seeded_store();
    assert_eq!(store.get_copy("users.bob.age"), Some(Value::Int(25)));
    assert_eq!(store.get_deep_copy("_session.me").unwrap(), "alice");
}
