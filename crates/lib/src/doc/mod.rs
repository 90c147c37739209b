//! Documents and the strategies that build them.
//!
//! A [`Document`] is the unit a [`Collection`] keeps per id. The store does
//! not look inside documents; it only builds them through a [`DocFactory`]
//! and hands them back to callers.
//!
//! Which factory a collection uses is decided once, when the collection is
//! created, from the store's [`StoreConfig`]. [`LocalDocs`] is the default and
//! keeps everything in the local data tree.
//!
//! [`Collection`]: crate::store::Collection
//! [`StoreConfig`]: crate::store::StoreConfig

use std::{any::Any, fmt::Debug, rc::Rc};

use crate::{
    WeakStore,
    store::Collection,
    tree::Value,
};

pub mod local;

pub use local::{LocalDoc, LocalDocs};

/// A document owned by one collection.
pub trait Document: Debug {
    /// Name of the owning collection
    fn collection_name(&self) -> &str;

    /// Document id, unique within the collection
    fn id(&self) -> &str;

    /// Type id of the factory that built this document
    fn kind(&self) -> &'static str;

    /// Value at `segments` inside the document, as a live alias.
    ///
    /// An empty segment list returns the whole document value.
    fn get(&self, segments: &[String]) -> Option<Value>;

    /// Allows downcasting to the concrete document type
    fn as_any(&self) -> &dyn Any;
}

/// Everything a factory receives to build one document.
pub struct DocContext<'a> {
    /// Handle to the store that owns the collection
    pub store: WeakStore,
    /// Collection the document will belong to
    pub collection: &'a Collection,
    /// Document id
    pub id: &'a str,
    /// Initial data, if the caller supplied any
    pub data: Option<Value>,
}

/// Builds documents for a collection.
///
/// Each factory has a stable `kind` (for example `"local:v0"`) so the
/// configured strategy can be inspected and logged.
pub trait DocFactory: Debug {
    /// Stable identifier for this strategy
    fn kind(&self) -> &'static str;

    /// Builds the document described by `ctx`
    fn create(&self, ctx: DocContext<'_>) -> Rc<dyn Document>;
}
