pub mod collections;
pub mod destroy;
pub mod get;
