//! Path reads: live references, shallow copies and deep copies.

use crate::tree::{Value, lookup};

use super::Store;

impl Store {
    /// Returns the value at `subpath` as a live reference.
    ///
    /// Containers come back as handles to the tree's own storage, so writing
    /// into them writes into the store. An empty path returns the root.
    pub fn get(&self, subpath: &str) -> Option<Value> {
        self.get_at(&self.split_path(subpath))
    }

    /// [`get`](Self::get) for an already tokenized path
    pub fn get_at(&self, segments: &[String]) -> Option<Value> {
        let value = lookup(segments, &self.inner.data);
        tracing::trace!(?segments, found = value.is_some(), "Path lookup");
        value
    }

    /// Returns a one-level copy of the value at `subpath`.
    ///
    /// The top-level map or list is new, but nested containers are still
    /// shared with the tree.
    pub fn get_copy(&self, subpath: &str) -> Option<Value> {
        self.copy_at(&self.split_path(subpath))
    }

    /// [`get_copy`](Self::get_copy) for an already tokenized path
    pub fn copy_at(&self, segments: &[String]) -> Option<Value> {
        self.get_at(segments).map(|value| value.shallow_copy())
    }

    /// Returns a fully independent copy of the value at `subpath`.
    ///
    /// Opaque values are still shared. Self-referencing structures are not
    /// supported.
    pub fn get_deep_copy(&self, subpath: &str) -> Option<Value> {
        self.deep_copy_at(&self.split_path(subpath))
    }

    /// [`get_deep_copy`](Self::get_deep_copy) for an already tokenized path
    pub fn deep_copy_at(&self, segments: &[String]) -> Option<Value> {
        self.get_at(segments).map(|value| value.deep_copy())
    }
}
