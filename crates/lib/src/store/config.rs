//! Store configuration.

use std::{collections::HashMap, rc::Rc};

use crate::{
    constants::is_local_collection,
    doc::{DocFactory, LocalDocs},
    tree::path::{DotPath, PathSplitter},
};

/// Configuration for a [`Store`](crate::Store).
///
/// Chooses the document factory for each collection and the path tokenizer.
/// The factory for a name is resolved once, when its collection is created:
///
/// 1. an explicit [`with_factory`](Self::with_factory) override for the name;
/// 2. otherwise, for names starting with `_` or `$`, the default factory;
/// 3. otherwise the shared factory, if one is configured;
/// 4. otherwise the default factory ([`LocalDocs`] unless replaced).
///
/// ```
/// use std::rc::Rc;
/// use arbor::{StoreConfig, doc::LocalDocs};
///
/// let config = StoreConfig::new().with_shared_factory(Rc::new(LocalDocs));
/// assert_eq!(config.factory_for("users").kind(), "local:v0");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    default_factory: Rc<dyn DocFactory>,
    shared_factory: Option<Rc<dyn DocFactory>>,
    overrides: HashMap<String, Rc<dyn DocFactory>>,
    path_splitter: Rc<dyn PathSplitter>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_factory: Rc::new(LocalDocs),
            shared_factory: None,
            overrides: HashMap::new(),
            path_splitter: Rc::new(DotPath),
        }
    }
}

impl StoreConfig {
    /// Local documents everywhere, dot-separated paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fallback factory
    pub fn with_default_factory(mut self, factory: Rc<dyn DocFactory>) -> Self {
        self.default_factory = factory;
        self
    }

    /// Sets the factory for shared (non `_`/`$`) collections
    pub fn with_shared_factory(mut self, factory: Rc<dyn DocFactory>) -> Self {
        self.shared_factory = Some(factory);
        self
    }

    /// Pins the factory for one collection name
    pub fn with_factory(mut self, name: impl Into<String>, factory: Rc<dyn DocFactory>) -> Self {
        self.overrides.insert(name.into(), factory);
        self
    }

    /// Replaces the path tokenizer
    pub fn with_path_splitter(mut self, splitter: Rc<dyn PathSplitter>) -> Self {
        self.path_splitter = splitter;
        self
    }

    /// Resolves the factory a new collection called `name` will use
    pub fn factory_for(&self, name: &str) -> Rc<dyn DocFactory> {
        if let Some(factory) = self.overrides.get(name) {
            return factory.clone();
        }
        match &self.shared_factory {
            Some(shared) if !is_local_collection(name) => shared.clone(),
            _ => self.default_factory.clone(),
        }
    }

    /// Tokenizes `path` with the configured splitter
    pub fn split_path(&self, path: &str) -> Vec<String> {
        self.path_splitter.split(path)
    }
}
