//! The data tree: nested, shared, path-addressable storage.
//!
//! Every value in the store lives in one tree rooted at a [`Node`]. The first
//! level holds one mapping per collection and the second level one raw value
//! per document:
//!
//! ```text
//! root
//! ├── users            <- collection data
//! │   ├── alice        <- document value
//! │   └── bob
//! └── _session
//!     └── ...
//! ```
//!
//! Containers ([`Node`] and [`List`]) are shared handles, so the same storage
//! can be reachable from the tree and from a [`Collection`] at once, and a
//! value handed out by [`lookup`] is a live alias into the tree.
//!
//! [`Collection`]: crate::store::Collection
//!
//! # Usage
//!
//! ```
//! use arbor::tree::{Node, Value, lookup, path::split_path};
//!
//! let root = Node::new();
//! let users = Node::new();
//! users.insert("alice", Value::from(serde_json::json!({"age": 30})));
//! root.insert("users", users);
//!
//! let age = lookup(&split_path("users.alice.age"), &root);
//! assert_eq!(age, Some(Value::Int(30)));
//! assert!(lookup(&split_path("users.carol"), &root).is_none());
//! ```

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

pub mod errors;
pub mod list;
pub mod path;
pub mod value;

pub use errors::TreeError;
pub use list::List;
pub use value::{Opaque, Value};

/// A shared, string-keyed mapping.
///
/// `Node` is a handle: cloning it produces another handle to the same
/// storage. The store root, each collection's data and every nested object
/// inside a document are `Node`s. Keys iterate in sorted order.
#[derive(Clone, Default)]
pub struct Node {
    inner: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl Node {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true if there are no keys
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Returns the value under `key`. Containers come back as aliases.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.borrow().get(key).cloned()
    }

    /// Like [`Node::get`], but a missing key is an error
    pub fn try_get(&self, key: &str) -> Result<Value, TreeError> {
        self.get(key).ok_or_else(|| TreeError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Returns the mapping stored under `key`.
    ///
    /// Fails if the key is missing or holds something other than a map.
    pub fn try_get_map(&self, key: &str) -> Result<Node, TreeError> {
        match self.try_get(key)? {
            Value::Map(node) => Ok(node),
            other => Err(TreeError::TypeMismatch {
                path: key.to_string(),
                expected: "map".to_string(),
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Sets `key`, returning the previous value if there was one
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.borrow_mut().insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if there was one
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner.borrow_mut().remove(key)
    }

    /// Removes every key while keeping this storage (and every handle to it)
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// Sorted snapshot of the keys
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }

    /// Sorted snapshot of the entries. Containers inside are aliases.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.inner
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns true if both handles share storage
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// New top-level storage holding the same value handles
    pub fn shallow_copy(&self) -> Node {
        Node {
            inner: Rc::new(RefCell::new(self.inner.borrow().clone())),
        }
    }

    /// New storage at every level; see [`Value::deep_copy`]
    pub fn deep_copy(&self) -> Node {
        self.inner
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.deep_copy()))
            .collect()
    }

    /// Converts to a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.inner
                .borrow()
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.inner.borrow() == *other.inner.borrow()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.borrow().iter()).finish()
    }
}

impl FromIterator<(String, Value)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Node {
            inner: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}

/// Walks `segments` from `root` and returns the value at the end.
///
/// An empty segment list returns the root itself. Any missing key, invalid
/// list index or non-container along the way yields `None`. The result is a
/// live alias: writing into a returned container writes into the tree.
pub fn lookup(segments: &[String], root: &Node) -> Option<Value> {
    let mut current = Value::Map(root.clone());
    for segment in segments {
        current = current.child(segment)?;
    }
    Some(current)
}

/// Deletes exactly the value at `segments`, returning it.
///
/// Returns `None` without touching anything if the path does not exist or is
/// empty (the root cannot be removed). A map parent loses the key. A list
/// parent keeps its length and the slot becomes [`Value::Null`], so sibling
/// indices do not shift.
pub fn remove_at(segments: &[String], root: &Node) -> Option<Value> {
    let (last, parents) = segments.split_last()?;
    match lookup(parents, root)? {
        Value::Map(parent) => parent.remove(last),
        Value::List(parent) => {
            let index: usize = last.parse().ok()?;
            parent.set(index, Value::Null).ok()
        }
        _ => None,
    }
}
