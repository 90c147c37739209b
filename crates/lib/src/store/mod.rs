//! The store: collections, documents and the shared data tree.
//!
//! A [`Store`] owns one data tree and the registry of live collections built
//! over it. Collections are created on demand, each with a document factory
//! picked by the store's [`StoreConfig`], and documents are created on demand
//! within a collection.
//!
//! Values are read by dotted path through [`Store::get`] (a live alias),
//! [`Store::get_copy`] (one level copied) or [`Store::get_deep_copy`]
//! (everything copied), and deleted through [`Store::destroy`], which first
//! tears down any reactive state registered under the path.
//!
//! ```
//! use arbor::{Store, Value};
//!
//! let store = Store::new();
//! store.get_or_create_doc("users", "alice", Some(Value::from(serde_json::json!({"age": 30}))));
//!
//! assert_eq!(store.get("users.alice.age"), Some(Value::Int(30)));
//! assert_eq!(store.get_collection("users").unwrap().size(), 1);
//!
//! store.destroy("users").unwrap();
//! assert!(store.get_collection("users").is_none());
//! ```

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    Result,
    doc::Document,
    reactive::{ReactiveLayer, ReactiveLayers, Silent},
    tree::{Node, Value, value::inexact_number_path},
};

mod accessor;
mod collection;
mod config;
mod destroy;
mod errors;
mod registry;

pub use collection::Collection;
pub use config::StoreConfig;
pub use errors::StoreError;
pub use registry::CollectionRegistry;

/// Shared state behind a [`Store`] and its [`WeakStore`] handles.
pub(crate) struct StoreInternal {
    pub(crate) collections: RefCell<CollectionRegistry>,
    pub(crate) data: Node,
    pub(crate) config: StoreConfig,
    pub(crate) layers: RefCell<ReactiveLayers>,
    silent_depth: Cell<usize>,
    event_context: RefCell<Option<String>>,
    generation: Cell<u64>,
}

/// An in-memory store of collections and documents over one data tree.
///
/// `Store` is the single owner of its state. Collections and documents only
/// hold a [`WeakStore`], so dropping the store releases everything even while
/// handles to collections are still around.
///
/// # Handle validity
///
/// - [`data`](Self::data) returns the same root node for the whole life of
///   the store; even a full [`destroy`](Self::destroy) drains it in place.
/// - A [`Collection`] handle goes stale when that collection is destroyed
///   (see [`Collection::is_destroyed`]).
/// - [`generation`](Self::generation) increments on every full wipe, so
///   callers can tell that all earlier collection handles are stale.
pub struct Store {
    inner: Rc<StoreInternal>,
}

/// Non-owning handle to a [`Store`].
#[derive(Clone)]
pub struct WeakStore {
    inner: Weak<StoreInternal>,
}

impl WeakStore {
    /// Returns true while the store is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Runs `f` against the store if it is still alive
    pub fn with<R>(&self, f: impl FnOnce(&Store) -> R) -> Option<R> {
        self.inner.upgrade().map(|inner| f(&Store { inner }))
    }

    pub(crate) fn internal(&self) -> Option<Rc<StoreInternal>> {
        self.inner.upgrade()
    }
}

impl fmt::Debug for WeakStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with `config`
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            inner: Rc::new(StoreInternal {
                collections: RefCell::new(CollectionRegistry::new()),
                data: Node::new(),
                config,
                layers: RefCell::new(ReactiveLayers::new()),
                silent_depth: Cell::new(0),
                event_context: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// The configuration this store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// A non-owning handle to this store
    pub fn downgrade(&self) -> WeakStore {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Handle to the root of the data tree
    pub fn data(&self) -> Node {
        self.inner.data.clone()
    }

    /// Sorted names of the live collections
    pub fn collection_names(&self) -> Vec<String> {
        self.inner.collections.borrow().names()
    }

    /// Returns the live collection called `name`, without creating it
    pub fn get_collection(&self, name: &str) -> Option<Rc<Collection>> {
        self.inner.collections.borrow().get(name)
    }

    /// Like [`get_collection`](Self::get_collection), but a miss is an error
    pub fn collection(&self, name: &str) -> Result<Rc<Collection>> {
        self.get_collection(name).ok_or_else(|| {
            StoreError::CollectionNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Returns the document `id` in collection `name`, without creating
    /// either
    pub fn get_doc(&self, name: &str, id: &str) -> Option<Rc<dyn Document>> {
        self.get_collection(name)?.get_doc(id)
    }

    /// Like [`get_doc`](Self::get_doc), but a miss is an error
    pub fn doc(&self, name: &str, id: &str) -> Result<Rc<dyn Document>> {
        let collection = self.collection(name)?;
        collection.get_doc(id).ok_or_else(|| {
            StoreError::DocumentNotFound {
                collection: name.to_string(),
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Returns the collection called `name`, creating it if needed.
    ///
    /// A new collection gets the document factory the configuration picks
    /// for its name, and replaces whatever was stored under `tree[name]` with
    /// a fresh empty node.
    pub fn get_or_create_collection(&self, name: &str) -> Rc<Collection> {
        if let Some(collection) = self.get_collection(name) {
            return collection;
        }
        let factory = self.inner.config.factory_for(name);
        tracing::debug!(collection = name, kind = factory.kind(), "Creating collection");
        let store = self.downgrade();
        self.inner
            .collections
            .borrow_mut()
            .get_or_create(name, || Collection::new(store, &self.inner.data, name, factory))
    }

    /// Returns the document `id` in collection `name`, creating the
    /// collection and document as needed.
    ///
    /// `data` only initializes a new document; an existing one is returned
    /// unchanged.
    pub fn get_or_create_doc(&self, name: &str, id: &str, data: Option<Value>) -> Rc<dyn Document> {
        self.get_or_create_collection(name).get_or_create_doc(id, data)
    }

    /// Puts the store in silent mode until the returned guard is dropped
    pub fn silent(&self) -> Silent<'_> {
        Silent::enter(self)
    }

    /// Returns true while any [`Silent`] guard is alive
    pub fn is_silent(&self) -> bool {
        self.inner.silent_depth.get() > 0
    }

    pub(crate) fn enter_silent(&self) {
        self.inner.silent_depth.set(self.inner.silent_depth.get() + 1);
    }

    pub(crate) fn exit_silent(&self) {
        self.inner
            .silent_depth
            .set(self.inner.silent_depth.get().saturating_sub(1));
    }

    /// Associates subsequent operations with an event context.
    ///
    /// The next [`destroy`](Self::destroy) hands the context to every
    /// reactive layer and then clears it.
    pub fn set_event_context(&self, context: impl Into<String>) {
        *self.inner.event_context.borrow_mut() = Some(context.into());
    }

    /// The current event context, if any
    pub fn event_context(&self) -> Option<String> {
        self.inner.event_context.borrow().clone()
    }

    /// Drops the current event context
    pub fn clear_event_context(&self) {
        self.inner.event_context.borrow_mut().take();
    }

    /// Registers a reactive layer to be torn down by [`destroy`](Self::destroy)
    pub fn add_reactive_layer(&self, layer: Rc<dyn ReactiveLayer>) {
        self.inner.layers.borrow_mut().add_layer(layer);
    }

    /// Number of full wipes this store has gone through
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    /// A fresh random document id
    pub fn new_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Tokenizes `path` with the configured splitter
    pub fn split_path(&self, path: &str) -> Vec<String> {
        self.inner.config.split_path(path)
    }

    /// Creates one document per `collection -> id -> data` entry in `json`.
    ///
    /// The whole input is checked before anything is created, so a malformed
    /// seed leaves the store untouched. Integers outside the `i64` range are
    /// rejected rather than stored inexactly. Documents that already exist are left
    /// as they are.
    ///
    /// # Returns
    /// The number of entries processed
    pub fn seed(&self, json: &serde_json::Value) -> Result<usize> {
        let collections = json.as_object().ok_or_else(|| StoreError::InvalidSeed {
            path: String::new(),
            reason: "expected an object of collections".to_string(),
        })?;
        for (name, docs) in collections {
            if !docs.is_object() {
                return Err(StoreError::InvalidSeed {
                    path: name.clone(),
                    reason: "expected an object of documents".to_string(),
                }
                .into());
            }
        }
        if let Some(path) = inexact_number_path(json) {
            return Err(StoreError::InvalidSeed {
                path,
                reason: "integer does not fit in i64".to_string(),
            }
            .into());
        }

        let mut count = 0;
        for (name, docs) in collections {
            for (id, data) in docs.as_object().into_iter().flatten() {
                self.get_or_create_doc(name, id, Some(Value::from(data.clone())));
                count += 1;
            }
        }
        tracing::debug!(count, "Seeded store");
        Ok(count)
    }

    /// Snapshot of the whole data tree as JSON
    pub fn to_json(&self) -> serde_json::Value {
        self.inner.data.to_json()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("collections", &self.collection_names())
            .field("silent", &self.is_silent())
            .field("generation", &self.generation())
            .finish()
    }
}
