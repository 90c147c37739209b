//! Documents that live only in the local data tree.

use std::{any::Any, rc::Rc};

use crate::tree::{Node, Value};

use super::{DocContext, DocFactory, Document};

/// A document whose value is stored directly in its collection's data.
///
/// Creating a `LocalDoc` with initial data writes that data to
/// `collection_data[id]`. Reads go straight to the collection data, so they
/// always reflect the current tree.
#[derive(Debug)]
pub struct LocalDoc {
    collection_name: String,
    id: String,
    collection_data: Node,
}

impl LocalDoc {
    /// Creates the document and mirrors `data` into `collection_data`.
    ///
    /// With no initial data nothing is written, and the document reads as
    /// absent until something sets its value.
    pub fn new(
        collection_name: impl Into<String>,
        id: impl Into<String>,
        data: Option<Value>,
        collection_data: Node,
    ) -> Self {
        let id = id.into();
        if let Some(data) = data {
            collection_data.insert(id.clone(), data);
        }
        Self {
            collection_name: collection_name.into(),
            id,
            collection_data,
        }
    }

    /// The document's whole value, as a live alias
    pub fn snapshot(&self) -> Option<Value> {
        self.collection_data.get(&self.id)
    }
}

impl Document for LocalDoc {
    fn collection_name(&self) -> &str {
        &self.collection_name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> &'static str {
        LocalDocs::TYPE_ID
    }

    fn get(&self, segments: &[String]) -> Option<Value> {
        let mut current = self.snapshot()?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory for [`LocalDoc`]s; the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDocs;

impl LocalDocs {
    /// Type id reported by this factory and its documents
    pub const TYPE_ID: &'static str = "local:v0";
}

impl DocFactory for LocalDocs {
    fn kind(&self) -> &'static str {
        Self::TYPE_ID
    }

    fn create(&self, ctx: DocContext<'_>) -> Rc<dyn Document> {
        Rc::new(LocalDoc::new(
            ctx.collection.name(),
            ctx.id,
            ctx.data,
            ctx.collection.data(),
        ))
    }
}
