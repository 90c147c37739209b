//!
//! Arbor: an in-memory, path-addressable store of collections and documents.
//! This library provides the data tree, the store that organizes it into
//! collections, and the teardown contract with an external reactive layer.
//!
//! ## Core Concepts
//!
//! * **Data tree (`tree::Node`, `tree::Value`)**: Nested maps and lists of shared handles.
//!   The first level holds one entry per collection, the second one entry per document.
//! * **Store (`store::Store`)**: Owns the tree and the registry of live collections, resolves
//!   dotted paths, and hands out live, shallow-copied or deep-copied values.
//! * **Collections (`store::Collection`)**: Named groups of documents, each with its own data
//!   node in the tree and a document factory chosen by `store::StoreConfig`.
//! * **Documents (`doc::Document`)**: Built by a `doc::DocFactory`; `doc::LocalDocs` keeps
//!   them in the local tree.
//! * **Reactive teardown (`reactive::ReactiveLayer`)**: Listeners, references, subscriptions
//!   and filters are disconnected in a fixed order, in silent mode, before data is destroyed.

pub mod constants;
pub mod doc;
pub mod reactive;
pub mod store;
pub mod tree;

/// Re-export the main store types for easier access.
pub use store::{Collection, Store, StoreConfig, WeakStore};
pub use tree::{Node, Value};

/// Result type used throughout the Arbor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Arbor library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured data tree errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Teardown errors reported by reactive layers
    #[error(transparent)]
    Reactive(reactive::ReactiveError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Store(_) => "store",
            Error::Reactive(_) => "reactive",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error came from a reactive teardown step.
    pub fn is_teardown_error(&self) -> bool {
        matches!(self, Error::Reactive(_))
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
