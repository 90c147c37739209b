//! Error types for store operations.
//!
//! The core store operations are soft: misses return `None` and removals of
//! absent things are no-ops. These errors come from the strict helpers
//! ([`Store::collection`](crate::Store::collection),
//! [`Store::doc`](crate::Store::doc)) and from seeding.

use thiserror::Error;

/// Structured error types for store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No collection is registered under this name
    #[error("Collection not found: {name}")]
    CollectionNotFound { name: String },

    /// The collection exists but has no document with this id
    #[error("Document '{id}' not found in collection '{collection}'")]
    DocumentNotFound { collection: String, id: String },

    /// Seed data did not have the `collection -> id -> data` shape
    #[error("Invalid seed data at '{path}': {reason}")]
    InvalidSeed { path: String, reason: String },
}

impl StoreError {
    /// Check if this error indicates a resource was not found
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::CollectionNotFound { .. } | StoreError::DocumentNotFound { .. }
        )
    }

    /// Check if this error is related to seed input
    pub fn is_seed_error(&self) -> bool {
        matches!(self, StoreError::InvalidSeed { .. })
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
