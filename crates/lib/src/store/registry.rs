//! Registry of live collections by name.

use std::{collections::HashMap, rc::Rc};

use super::Collection;

/// Maps collection names to the one live [`Collection`] for each.
///
/// The registry only does bookkeeping. Building a collection (choosing its
/// document factory, wiring its data into the tree) is the store's job, which
/// passes a constructor to [`get_or_create`](Self::get_or_create).
#[derive(Debug, Default)]
pub struct CollectionRegistry {
    collections: HashMap<String, Rc<Collection>>,
}

impl CollectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the collection registered under `name`
    ///
    /// # Returns
    /// A new handle to the collection, or `None` if the name is not registered
    pub fn get(&self, name: &str) -> Option<Rc<Collection>> {
        self.collections.get(name).cloned()
    }

    /// Get the collection under `name`, registering the one built by `make`
    /// if there is none.
    ///
    /// `make` only runs on a miss, so repeated calls never build a second
    /// collection for the same name.
    pub fn get_or_create(&mut self, name: &str, make: impl FnOnce() -> Collection) -> Rc<Collection> {
        self.collections
            .entry(name.to_string())
            .or_insert_with(|| Rc::new(make()))
            .clone()
    }

    /// Unregister `name`, returning the collection if it was present
    pub fn remove(&mut self, name: &str) -> Option<Rc<Collection>> {
        self.collections.remove(name)
    }

    /// Check if a collection is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Sorted list of registered names
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Handles to every registered collection, sorted by name
    pub fn collections(&self) -> Vec<Rc<Collection>> {
        let mut collections: Vec<_> = self.collections.values().cloned().collect();
        collections.sort_by(|a, b| a.name().cmp(b.name()));
        collections
    }

    /// Number of registered collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Check if no collections are registered
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
