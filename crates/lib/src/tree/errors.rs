//! Error types for data tree operations.
//!
//! Reads through the tree are soft: a missing path is `None`, not an error.
//! These errors are only produced by the strict helpers that promise a
//! particular shape, such as [`Node::try_get`](super::Node::try_get) or
//! [`List::set`](super::List::set).

use thiserror::Error;

/// Structured error types for data tree operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// A value had a different shape than the caller required
    #[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A list index was past the end of the list
    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A key was required but absent
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },
}

impl TreeError {
    /// Check if this error indicates a missing key or index
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TreeError::KeyNotFound { .. } | TreeError::IndexOutOfBounds { .. }
        )
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
