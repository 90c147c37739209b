//! Value types for the data tree.
//!
//! This module provides the [`Value`] enum that represents everything that can
//! be stored in the data tree. Values are either primitives (null, booleans,
//! numbers, text), containers ([`Node`] mappings and [`List`] sequences), or
//! [`Opaque`] handles to arbitrary Rust values.
//!
//! # Aliasing
//!
//! Containers are shared handles. Cloning a `Value::Map` or `Value::List`
//! produces a second handle to the *same* storage, so a write through either
//! one is visible through both. This is what gives [`Store::get`] its live
//! reference semantics. Use [`Value::shallow_copy`] or [`Value::deep_copy`] to
//! obtain isolated storage.
//!
//! [`Store::get`]: crate::Store::get
//!
//! ```
//! # use arbor::tree::{Node, Value};
//! let node = Node::new();
//! let alias = Value::Map(node.clone());
//! node.insert("name", "Alice");
//!
//! assert_eq!(alias.as_map().unwrap().get("name").unwrap(), "Alice");
//! ```

use std::{any::Any, fmt, rc::Rc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{List, Node, path::join_segments};

/// Values that can be stored in the data tree.
///
/// # Value Types
///
/// ## Primitives
/// - [`Value::Null`] - explicit null
/// - [`Value::Bool`] - booleans
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floats
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Containers (shared handles)
/// - [`Value::List`] - ordered sequence
/// - [`Value::Map`] - string-keyed mapping
///
/// ## Everything else
/// - [`Value::Opaque`] - a reference to a value the tree cannot look inside;
///   copies always share it.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types:
///
/// ```
/// # use arbor::tree::Value;
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::Int(42) == 42);
/// assert!(Value::Bool(true) == true);
/// assert!(!(Value::Int(42) == "42"));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Shared ordered sequence
    List(List),
    /// Shared string-keyed mapping
    Map(Node),
    /// Reference to a value the tree does not understand
    Opaque(Opaque),
}

impl Value {
    /// Returns true for null, booleans, numbers and text
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_)
        )
    }

    /// Returns true for lists and maps
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to borrow as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list handle, if this is a list
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the map handle, if this is a map
    pub fn as_map(&self) -> Option<&Node> {
        match self {
            Value::Map(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the opaque handle, if this is an opaque value
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }

    /// Returns true if both values are handles to the same storage.
    ///
    /// Primitives never share storage, so this is false for them even when
    /// they compare equal.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Steps one level into a container.
    ///
    /// Maps are indexed by key, lists by a segment that parses as `usize`.
    /// Anything else has no children.
    pub fn child(&self, segment: &str) -> Option<Value> {
        match self {
            Value::Map(node) => node.get(segment),
            Value::List(list) => list.get(segment.parse().ok()?),
            _ => None,
        }
    }

    /// One-level copy.
    ///
    /// A map or list gets fresh top-level storage holding the same element
    /// handles, so nested containers stay shared with the original.
    /// Primitives are copied and opaque values keep pointing at the same
    /// referent.
    pub fn shallow_copy(&self) -> Value {
        match self {
            Value::List(list) => Value::List(list.shallow_copy()),
            Value::Map(node) => Value::Map(node.shallow_copy()),
            other => other.clone(),
        }
    }

    /// Recursive copy.
    ///
    /// Every reachable map and list is rebuilt, so no container storage is
    /// shared with the original. Opaque values are still shared.
    ///
    /// Cycles are not detected: deep-copying a structure that contains itself
    /// recurses without bound.
    pub fn deep_copy(&self) -> Value {
        match self {
            Value::List(list) => Value::List(list.deep_copy()),
            Value::Map(node) => Value::Map(node.deep_copy()),
            other => other.clone(),
        }
    }

    /// Converts to a `serde_json::Value`.
    ///
    /// Opaque values and non-finite floats become JSON null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Opaque(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(list) => {
                serde_json::Value::Array(list.to_vec().iter().map(Value::to_json).collect())
            }
            Value::Map(node) => node.to_json(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Opaque(_) => write!(f, "<opaque>"),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

// Primitive comparisons

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

// Conversions into Value

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Map(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Value::Opaque(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(List::from(values))
    }
}

/// Integers beyond the `i64` range become floats and may lose precision.
/// [`Store::seed`](crate::Store::seed) rejects such input instead.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Path of the first number in `json` that would not convert to a [`Value`]
/// exactly, if any.
///
/// Only unsigned integers above `i64::MAX` qualify: they would be stored as
/// floats.
pub(crate) fn inexact_number_path(json: &serde_json::Value) -> Option<String> {
    fn walk(json: &serde_json::Value, path: &mut Vec<String>) -> bool {
        let mut descend = |segment: String, child: &serde_json::Value| {
            path.push(segment);
            let found = walk(child, path);
            if !found {
                path.pop();
            }
            found
        };
        match json {
            serde_json::Value::Number(n) => n.is_u64() && n.as_i64().is_none(),
            serde_json::Value::Array(items) => items
                .iter()
                .enumerate()
                .any(|(index, item)| descend(index.to_string(), item)),
            serde_json::Value::Object(entries) => entries
                .iter()
                .any(|(key, value)| descend(key.clone(), value)),
            _ => false,
        }
    }

    let mut path = Vec::new();
    walk(json, &mut path).then(|| join_segments(&path))
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// A shared reference to a value the data tree cannot look inside.
///
/// Copies, shallow or deep, always hand back the same referent.
///
/// ```
/// # use arbor::tree::{Opaque, Value};
/// let handle = Opaque::new(String::from("socket"));
/// let value = Value::Opaque(handle.clone());
///
/// assert!(value.deep_copy().ptr_eq(&value));
/// assert_eq!(handle.downcast_ref::<String>().map(String::as_str), Some("socket"));
/// ```
#[derive(Clone)]
pub struct Opaque {
    inner: Rc<dyn Any>,
}

impl Opaque {
    /// Wraps `value` in a new shared handle
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }

    /// Borrows the referent as `T`, if it is one
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same referent
    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:p})", Rc::as_ptr(&self.inner))
    }
}
