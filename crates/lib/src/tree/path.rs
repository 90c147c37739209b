//! Path tokenization for data tree access.
//!
//! A path string such as `"users.alice.address"` is split into an ordered
//! list of segments (`["users", "alice", "address"]`). The store walks those
//! segments one level at a time. The empty path refers to the whole store.
//!
//! Tokenization is pluggable through [`PathSplitter`]; [`DotPath`] is the
//! default used by [`StoreConfig`](crate::store::StoreConfig).
//!
//! ```rust
//! use arbor::tree::path::{DotPath, PathSplitter, split_path};
//!
//! assert_eq!(split_path("users.alice"), vec!["users", "alice"]);
//! assert!(split_path("").is_empty());
//! assert_eq!(DotPath.split("a..b."), vec!["a", "b"]);
//! ```

use std::fmt::Debug;

/// The separator used by [`DotPath`].
pub const SEPARATOR: char = '.';

/// Splits a dotted path into owned segments, dropping empty components.
pub fn split_path(input: &str) -> Vec<String> {
    input
        .split(SEPARATOR)
        .filter(|component| !component.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins segments back into a dotted path, mainly for logs and errors.
pub fn join_segments(segments: &[String]) -> String {
    segments.join(".")
}

/// Tokenizes a path string into segments.
///
/// Implementations must be deterministic, and must map the empty string to an
/// empty segment list.
pub trait PathSplitter: Debug {
    /// Split `path` into ordered segments.
    fn split(&self, path: &str) -> Vec<String>;
}

/// Dot-separated path tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotPath;

impl PathSplitter for DotPath {
    fn split(&self, path: &str) -> Vec<String> {
        split_path(path)
    }
}
