//! Path deletion with reactive teardown.

use crate::{
    Result,
    reactive::TeardownScope,
    tree::{path::join_segments, remove_at},
};

use super::Store;

impl Store {
    /// Deletes everything at `subpath`.
    ///
    /// Every registered reactive layer is first told to drop its listeners,
    /// references, subscriptions, filters and context listeners under the
    /// path, in that order, with the store in silent mode. Then, by path
    /// depth:
    ///
    /// - empty path: every collection is destroyed and the root is drained in
    ///   place (the root node keeps its identity; the generation increments);
    /// - one segment: the collection of that name is destroyed, if it exists;
    /// - deeper: exactly the value at the path is removed, if it exists.
    ///   Inside a list the slot is set to null so later indices keep their
    ///   position.
    ///
    /// # Errors
    ///
    /// The first error a reactive layer returns is passed back unchanged.
    /// The remaining steps and the data removal are skipped, leaving any
    /// steps that already ran in effect.
    pub fn destroy(&self, subpath: &str) -> Result<()> {
        self.destroy_at(&self.split_path(subpath))
    }

    /// [`destroy`](Self::destroy) for an already tokenized path
    pub fn destroy_at(&self, segments: &[String]) -> Result<()> {
        let silent = self.silent();
        let scope = TeardownScope::new(&silent, segments);

        // Layers may call back into the store while tearing down.
        let layers = self.inner.layers.borrow().clone();
        let context = self.event_context();
        layers.teardown(&scope, context.as_deref())?;
        // Completes the context-listener step, once every layer has seen it.
        self.clear_event_context();

        match segments {
            [] => self.wipe(),
            [name] => {
                if let Some(collection) = self.get_collection(name) {
                    collection.destroy();
                }
            }
            _ => {
                let removed = remove_at(segments, &self.inner.data);
                tracing::debug!(
                    path = %join_segments(segments),
                    removed = removed.is_some(),
                    "Destroyed path"
                );
            }
        }
        Ok(())
    }

    fn wipe(&self) {
        let old = std::mem::take(&mut *self.inner.collections.borrow_mut());
        for collection in old.collections() {
            collection.mark_destroyed();
        }
        self.inner.data.clear();
        self.inner.generation.set(self.inner.generation.get() + 1);
        tracing::debug!(
            collections = old.len(),
            generation = self.generation(),
            "Wiped store"
        );
    }
}
