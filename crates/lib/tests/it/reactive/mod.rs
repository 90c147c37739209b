//! Reactive teardown integration tests
//!
//! Checks the order, scope and silent-mode guarantees of the teardown that
//! `Store::destroy` runs before removing data.

mod teardown;
