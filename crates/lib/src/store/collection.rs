//! Collections: named groups of documents.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    fmt,
    rc::Rc,
};

use crate::{
    WeakStore,
    doc::{DocContext, DocFactory, Document},
    tree::{Node, Value},
};

/// A named group of documents with its own slice of the data tree.
///
/// While the collection is live, [`data`](Self::data) is the same [`Node`] as
/// `tree[name]`: a write through either handle shows up in the other.
///
/// `size` tracks how many documents were created through
/// [`get_or_create_doc`](Self::get_or_create_doc) minus those removed through
/// [`remove`](Self::remove). Calling [`add`](Self::add) directly does not
/// update it.
///
/// # Validity
///
/// Once [`destroy`](Self::destroy) has run (directly, through removing the
/// last document, or through a store-level destroy), this handle is stale:
/// [`is_destroyed`](Self::is_destroyed) returns `true`, the store no longer
/// knows about it, and its `data` node is detached from the tree. A later
/// `get_or_create_collection` with the same name builds a fresh collection.
pub struct Collection {
    name: String,
    store: WeakStore,
    factory: Rc<dyn DocFactory>,
    size: Cell<usize>,
    docs: RefCell<HashMap<String, Rc<dyn Document>>>,
    data: Node,
    destroyed: Cell<bool>,
}

impl Collection {
    /// Builds a collection and installs a fresh data node at `root[name]`.
    ///
    /// Whatever was stored under `root[name]` before is replaced.
    pub(crate) fn new(
        store: WeakStore,
        root: &Node,
        name: impl Into<String>,
        factory: Rc<dyn DocFactory>,
    ) -> Self {
        let name = name.into();
        let data = Node::new();
        root.insert(name.clone(), data.clone());
        Self {
            name,
            store,
            factory,
            size: Cell::new(0),
            docs: RefCell::new(HashMap::new()),
            data,
            destroyed: Cell::new(false),
        }
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live document count
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Handle to this collection's data node
    pub fn data(&self) -> Node {
        self.data.clone()
    }

    /// Kind of the factory documents are built with
    pub fn kind(&self) -> &'static str {
        self.factory.kind()
    }

    /// Returns true once this collection has been destroyed
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// The document registered under `id`
    pub fn get_doc(&self, id: &str) -> Option<Rc<dyn Document>> {
        self.docs.borrow().get(id).cloned()
    }

    /// Check if a document is registered under `id`
    pub fn contains_doc(&self, id: &str) -> bool {
        self.docs.borrow().contains_key(id)
    }

    /// Sorted ids of the registered documents
    pub fn doc_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.docs.borrow().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Builds a document through the factory and registers it under `id`.
    ///
    /// This does not touch `size`; callers that own the size invariant must
    /// adjust it themselves. An existing document under `id` is replaced.
    pub fn add(&self, id: &str, data: Option<Value>) -> Rc<dyn Document> {
        let doc = self.factory.create(DocContext {
            store: self.store.clone(),
            collection: self,
            id,
            data,
        });
        self.docs.borrow_mut().insert(id.to_string(), doc.clone());
        doc
    }

    /// Returns the document under `id`, creating it from `data` if needed.
    ///
    /// An existing document is returned as is and `data` is ignored.
    pub fn get_or_create_doc(&self, id: &str, data: Option<Value>) -> Rc<dyn Document> {
        if let Some(doc) = self.get_doc(id) {
            return doc;
        }
        self.size.set(self.size.get() + 1);
        tracing::debug!(collection = %self.name, id, size = self.size.get(), "Creating document");
        self.add(id, data)
    }

    /// Removes the document under `id`. Does nothing if there is none.
    ///
    /// If other documents remain, only this document and its `data[id]`
    /// entry go away. Removing the last document destroys the whole
    /// collection instead.
    pub fn remove(&self, id: &str) {
        if !self.contains_doc(id) {
            return;
        }
        let size = self.size.get().saturating_sub(1);
        self.size.set(size);
        if size > 0 {
            tracing::debug!(collection = %self.name, id, size, "Removing document");
            let removed = self.docs.borrow_mut().remove(id);
            self.data.remove(id);
            drop(removed);
        } else {
            tracing::debug!(collection = %self.name, id, "Removed last document");
            self.destroy();
        }
    }

    /// Unregisters this collection and deletes `tree[name]`.
    ///
    /// Only that one key leaves the tree; the root node keeps its identity.
    /// Both removals go by name.
    pub fn destroy(&self) {
        self.mark_destroyed();
        let Some(internal) = self.store.internal() else {
            return;
        };
        tracing::debug!(collection = %self.name, "Destroying collection");
        let unregistered = internal.collections.borrow_mut().remove(&self.name);
        internal.data.remove(&self.name);
        drop(unregistered);
    }

    pub(crate) fn mark_destroyed(&self) {
        self.destroyed.set(true);
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("size", &self.size.get())
            .field("docs", &self.doc_ids())
            .field("destroyed", &self.destroyed.get())
            .finish()
    }
}
