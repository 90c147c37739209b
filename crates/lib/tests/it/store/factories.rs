use std::{any::Any, cell::Cell, rc::Rc};

use arbor::{
    Store, StoreConfig, Value,
    doc::{DocContext, DocFactory, Document, LocalDocs},
    tree::path::{PathSplitter, split_path},
};

/// A document that keeps its data to itself instead of writing the tree.
#[derive(Debug)]
struct DetachedDoc {
    collection: String,
    id: String,
    data: Option<Value>,
}

impl Document for DetachedDoc {
    fn collection_name(&self) -> &str {
        &self.collection
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> &'static str {
        "detached:v0"
    }

    fn get(&self, segments: &[String]) -> Option<Value> {
        let mut current = self.data.clone()?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default)]
struct DetachedDocs {
    built: Cell<usize>,
}

impl DocFactory for DetachedDocs {
    fn kind(&self) -> &'static str {
        "detached:v0"
    }

    fn create(&self, ctx: DocContext<'_>) -> Rc<dyn Document> {
        assert!(ctx.store.is_alive());
        self.built.set(self.built.get() + 1);
        Rc::new(DetachedDoc {
            collection: ctx.collection.name().to_string(),
            id: ctx.id.to_string(),
            data: ctx.data,
        })
    }
}

#[test]
fn test_shared_factory_used_for_shared_collections_only() {
    let shared = Rc::new(DetachedDocs::default());
    let store = Store::with_config(StoreConfig::new().with_shared_factory(shared.clone()));

    let post = store.get_or_create_doc("posts", "p1", Some(Value::from("remote")));
    let session = store.get_or_create_doc("_session", "me", Some(Value::from("local")));
    let query = store.get_or_create_doc("$queries", "q1", None);

    assert_eq!(post.kind(), "detached:v0");
    assert_eq!(session.kind(), LocalDocs::TYPE_ID);
    assert_eq!(query.kind(), LocalDocs::TYPE_ID);
    assert_eq!(shared.built.get(), 1);

    assert_eq!(post.get(&[]).unwrap(), "remote");
    assert!(store.get("posts.p1").is_none());
    assert_eq!(store.get("_session.me").unwrap(), "local");
    assert_eq!(store.get_collection("posts").unwrap().kind(), "detached:v0");
}

#[test]
fn test_factory_fixed_at_collection_creation() {
    let store = Store::with_config(
        StoreConfig::new().with_factory("audit", Rc::new(DetachedDocs::default())),
    );

    let audit = store.get_or_create_collection("audit");
    audit.get_or_create_doc("a1", None);
    audit.get_or_create_doc("a2", None);

    assert_eq!(audit.kind(), "detached:v0");
    assert_eq!(audit.size(), 2);
    assert!(audit.data().is_empty());
    assert_eq!(store.config().factory_for("users").kind(), LocalDocs::TYPE_ID);
    assert_eq!(store.get_or_create_collection("users").kind(), LocalDocs::TYPE_ID);
}

#[test]
fn test_factory_can_reach_store() {
    #[derive(Debug)]
    struct CountingDocs;

    impl DocFactory for CountingDocs {
        fn kind(&self) -> &'static str {
            "counting:v0"
        }

        fn create(&self, ctx: DocContext<'_>) -> Rc<dyn Document> {
            let names = ctx.store.with(|store| store.collection_names()).unwrap_or_default();
            let data = Value::from(names.len() as u32);
            LocalDocs.create(DocContext {
                data: Some(data),
                ..ctx
            })
        }
    }

    let store = Store::with_config(StoreConfig::new().with_default_factory(Rc::new(CountingDocs)));
    store.get_or_create_doc("users", "alice", None);

    assert_eq!(store.get("users.alice").unwrap(), 1);
}

#[test]
fn test_custom_path_splitter() {
    #[derive(Debug)]
    struct SlashPath;

    impl PathSplitter for SlashPath {
        fn split(&self, path: &str) -> Vec<String> {
            path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()
        }
    }

    let store = Store::with_config(StoreConfig::new().with_path_splitter(Rc::new(SlashPath)));
    store.get_or_create_doc("users", "a.b", Some(Value::from(1)));

    assert_eq!(store.get("users/a.b").unwrap(), 1);
    assert!(store.get_at(&split_path("users.a.b")).is_none());
    store.destroy("users/a.b").unwrap();
    assert!(store.get("users/a.b").is_none());
}
