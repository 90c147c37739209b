//! Teardown contract with the reactive layer.
//!
//! Listeners, references, subscriptions and filters are implemented outside
//! this crate. The store only needs to disconnect them before it deletes the
//! data they observe. It does so by calling every registered
//! [`ReactiveLayer`] through a fixed sequence of [`TeardownStep`]s, all inside
//! silent mode so the teardown itself cannot fire notifications.

use std::{fmt, ops::Deref, rc::Rc};

use crate::{Result, Store};

pub mod errors;

pub use errors::ReactiveError;

/// One step of the teardown sequence, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeardownStep {
    /// Detach every listener under the path
    Listeners,
    /// Remove every reference rooted under the path
    Refs,
    /// Stop every subscription under the path
    Subscriptions,
    /// Remove every filter under the path
    Filters,
    /// Remove listeners tied to the current event context and drop it
    ContextListeners,
}

impl TeardownStep {
    /// All steps in execution order
    pub const ORDER: [TeardownStep; 5] = [
        TeardownStep::Listeners,
        TeardownStep::Refs,
        TeardownStep::Subscriptions,
        TeardownStep::Filters,
        TeardownStep::ContextListeners,
    ];

    /// Short name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            TeardownStep::Listeners => "listeners",
            TeardownStep::Refs => "refs",
            TeardownStep::Subscriptions => "subscriptions",
            TeardownStep::Filters => "filters",
            TeardownStep::ContextListeners => "context_listeners",
        }
    }
}

impl fmt::Display for TeardownStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// RAII guard that keeps a store in silent mode.
///
/// While any `Silent` guard is alive, [`Store::is_silent`] reports `true`.
/// Guards nest; the store leaves silent mode when the last one is dropped.
/// The guard derefs to the store, so operations can be issued through it.
///
/// ```
/// # use arbor::Store;
/// let store = Store::new();
/// {
///     let silent = store.silent();
///     assert!(silent.is_silent());
/// }
/// assert!(!store.is_silent());
/// ```
pub struct Silent<'a> {
    store: &'a Store,
}

impl<'a> Silent<'a> {
    pub(crate) fn enter(store: &'a Store) -> Self {
        store.enter_silent();
        Self { store }
    }

    /// The store this guard silences
    pub fn store(&self) -> &'a Store {
        self.store
    }
}

impl Deref for Silent<'_> {
    type Target = Store;

    fn deref(&self) -> &Store {
        self.store
    }
}

impl Drop for Silent<'_> {
    fn drop(&mut self) {
        self.store.exit_silent();
    }
}

/// The part of the tree a teardown applies to.
///
/// A scope can only be built from a [`Silent`] guard, so holding one proves
/// the store is in silent mode.
pub struct TeardownScope<'a> {
    silent: &'a Silent<'a>,
    segments: &'a [String],
}

impl<'a> TeardownScope<'a> {
    pub(crate) fn new(silent: &'a Silent<'a>, segments: &'a [String]) -> Self {
        Self { silent, segments }
    }

    /// Segments of the scope root; empty means the whole store
    pub fn segments(&self) -> &[String] {
        self.segments
    }

    /// The scope root as a dotted path
    pub fn path(&self) -> String {
        crate::tree::path::join_segments(self.segments)
    }

    /// The store being torn down, in silent mode
    pub fn store(&self) -> &Store {
        self.silent.store()
    }

    /// Returns true if `path` is the scope root or lies beneath it
    pub fn covers(&self, path: &[String]) -> bool {
        path.starts_with(self.segments)
    }
}

/// The reactive machinery a store must disconnect before deleting data.
///
/// Every method is scoped to everything at or under `scope`. An error aborts
/// the rest of the teardown and the data removal; the store does not retry or
/// roll back.
///
/// All methods default to doing nothing, so a layer only implements the
/// steps it owns.
pub trait ReactiveLayer {
    /// Detach every registered listener under the scope
    fn remove_all_listeners(&self, _scope: &TeardownScope<'_>) -> Result<()> {
        Ok(())
    }

    /// Remove every structural reference rooted under the scope
    fn remove_all_refs(&self, _scope: &TeardownScope<'_>) -> Result<()> {
        Ok(())
    }

    /// Stop every active subscription under the scope
    fn stop_all(&self, _scope: &TeardownScope<'_>) -> Result<()> {
        Ok(())
    }

    /// Remove every filter under the scope
    fn remove_all_filters(&self, _scope: &TeardownScope<'_>) -> Result<()> {
        Ok(())
    }

    /// Remove listeners tied to the caller's event context
    fn remove_context_listeners(
        &self,
        _context: Option<&str>,
        _scope: &TeardownScope<'_>,
    ) -> Result<()> {
        Ok(())
    }
}

/// The reactive layers registered with a store.
///
/// Layers run in registration order within each step.
#[derive(Default, Clone)]
pub struct ReactiveLayers {
    layers: Vec<Rc<dyn ReactiveLayer>>,
}

impl ReactiveLayers {
    /// Create a new empty layer set.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a layer to the set.
    pub fn add_layer(&mut self, layer: Rc<dyn ReactiveLayer>) {
        self.layers.push(layer);
    }

    /// Check if there are any layers registered.
    pub fn has_layers(&self) -> bool {
        !self.layers.is_empty()
    }

    /// Get the number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Runs one teardown step on every layer, stopping at the first error.
    pub fn run_step(
        &self,
        step: TeardownStep,
        scope: &TeardownScope<'_>,
        context: Option<&str>,
    ) -> Result<()> {
        for layer in &self.layers {
            let result = match step {
                TeardownStep::Listeners => layer.remove_all_listeners(scope),
                TeardownStep::Refs => layer.remove_all_refs(scope),
                TeardownStep::Subscriptions => layer.stop_all(scope),
                TeardownStep::Filters => layer.remove_all_filters(scope),
                TeardownStep::ContextListeners => layer.remove_context_listeners(context, scope),
            };
            if let Err(e) = result {
                tracing::warn!(step = step.name(), path = %scope.path(), "Teardown step failed: {e}");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Runs the full teardown sequence in [`TeardownStep::ORDER`].
    pub fn teardown(&self, scope: &TeardownScope<'_>, context: Option<&str>) -> Result<()> {
        for step in TeardownStep::ORDER {
            self.run_step(step, scope, context)?;
        }
        Ok(())
    }
}
