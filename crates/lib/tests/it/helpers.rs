use std::{cell::RefCell, rc::Rc};

use arbor::{
    Result, Store,
    reactive::{ReactiveError, ReactiveLayer, TeardownScope, TeardownStep},
};
use serde_json::json;

// ==========================
// STORE FACTORIES
// ==========================

/// A store with two users, one post and a private session
pub fn seeded_store() -> Store {
    let store = Store::new();
    store
        .seed(&json!({
            "users": {
                "alice": {"age": 30, "address": {"city": "Oslo", "geo": {"lat": 59}}},
                "bob": {"age": 25, "tags": ["admin", "ops"]}
            },
            "posts": {"p1": {"title": "Hello"}},
            "_session": {"me": "alice"}
        }))
        .unwrap();
    store
}

// ==========================
// REACTIVE LAYER
// ==========================

/// One teardown call as seen by a [`RecordingLayer`]
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub step: TeardownStep,
    pub path: String,
    pub silent: bool,
    pub context: Option<String>,
    /// Whether the scope root still resolved when the step ran
    pub data_present: bool,
}

/// A reactive layer that records every teardown call it receives.
///
/// Optionally fails on one step to exercise the abort path.
pub struct RecordingLayer {
    calls: RefCell<Vec<Call>>,
    fail_on: Option<TeardownStep>,
}

impl RecordingLayer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        })
    }

    pub fn failing_on(step: TeardownStep) -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(step),
        })
    }

    /// Registers a new recording layer with `store` and returns it
    pub fn install(store: &Store) -> Rc<Self> {
        let layer = Self::new();
        store.add_reactive_layer(layer.clone());
        layer
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn steps(&self) -> Vec<TeardownStep> {
        self.calls.borrow().iter().map(|call| call.step).collect()
    }

    fn record(
        &self,
        step: TeardownStep,
        scope: &TeardownScope<'_>,
        context: Option<&str>,
    ) -> Result<()> {
        let store = scope.store();
        self.calls.borrow_mut().push(Call {
            step,
            path: scope.path(),
            silent: store.is_silent(),
            context: context.map(str::to_string),
            data_present: store.get_at(scope.segments()).is_some(),
        });
        if self.fail_on == Some(step) {
            return Err(ReactiveError::StepFailed {
                step,
                path: scope.path(),
                reason: "recording layer told to fail".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl ReactiveLayer for RecordingLayer {
    fn remove_all_listeners(&self, scope: &TeardownScope<'_>) -> Result<()> {
        self.record(TeardownStep::Listeners, scope, None)
    }

    fn remove_all_refs(&self, scope: &TeardownScope<'_>) -> Result<()> {
        self.record(TeardownStep::Refs, scope, None)
    }

    fn stop_all(&self, scope: &TeardownScope<'_>) -> Result<()> {
        self.record(TeardownStep::Subscriptions, scope, None)
    }

    fn remove_all_filters(&self, scope: &TeardownScope<'_>) -> Result<()> {
        self.record(TeardownStep::Filters, scope, None)
    }

    fn remove_context_listeners(
        &self,
        context: Option<&str>,
        scope: &TeardownScope<'_>,
    ) -> Result<()> {
        self.record(TeardownStep::ContextListeners, scope, context)
    }
}
