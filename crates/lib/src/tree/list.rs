//! Shared ordered sequences.

use std::{cell::RefCell, fmt, rc::Rc};

use super::{TreeError, Value};

/// A shared, ordered sequence of values.
///
/// `List` is a handle: cloning it yields another handle to the same storage.
/// Use [`List::shallow_copy`] or [`List::deep_copy`] for independent storage.
#[derive(Clone, Default)]
pub struct List {
    inner: Rc<RefCell<Vec<Value>>>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Returns the element at `index`. Containers come back as aliases.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.inner.borrow().get(index).cloned()
    }

    /// Appends a value
    pub fn push(&self, value: impl Into<Value>) {
        self.inner.borrow_mut().push(value.into());
    }

    /// Replaces the element at `index`, returning the previous one
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<Value, TreeError> {
        let mut items = self.inner.borrow_mut();
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or(TreeError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Removes the element at `index`, shifting later elements down
    pub fn remove(&self, index: usize) -> Result<Value, TreeError> {
        let mut items = self.inner.borrow_mut();
        if index >= items.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: items.len(),
            });
        }
        Ok(items.remove(index))
    }

    /// Removes every element in place
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// Snapshot of the elements. Containers inside are aliases.
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.borrow().clone()
    }

    /// Returns true if both handles share storage
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// New top-level storage holding the same element handles
    pub fn shallow_copy(&self) -> List {
        List::from(self.to_vec())
    }

    /// New storage at every level; see [`Value::deep_copy`]
    pub fn deep_copy(&self) -> List {
        self.inner.borrow().iter().map(Value::deep_copy).collect()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.inner.borrow() == *other.inner.borrow()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.borrow().iter()).finish()
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(values)),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List::from(iter.into_iter().collect::<Vec<_>>())
    }
}
