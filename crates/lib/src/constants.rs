//! Constants used throughout the Arbor library.
//!
//! This module provides central definitions for reserved names and prefixes.

/// Collection-name prefix for data private to one store ("_session", "_page").
pub const PRIVATE_PREFIX: char = '_';

/// Collection-name prefix for data computed locally ("$queries", "$connection").
pub const COMPUTED_PREFIX: char = '$';

/// Returns true for collections that must always hold local documents.
///
/// Private (`_`) and computed (`$`) collections never use a shared document
/// factory, whatever the store configuration says for shared collections.
pub fn is_local_collection(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX) || name.starts_with(COMPUTED_PREFIX)
}
