use arbor::{Error, reactive::TeardownStep};

use crate::helpers::*;

#[test]
fn test_steps_run_in_order_before_removal() {
    let store = seeded_store();
    let layer = RecordingLayer::install(&store);

    store.destroy("users.alice").unwrap();

    assert_eq!(layer.steps(), TeardownStep::ORDER.to_vec());
    for call in layer.calls() {
        assert_eq!(call.path, "users.alice");
        assert!(call.silent);
        assert!(call.data_present, "{} ran after removal", call.step);
    }
    assert!(store.get("users.alice").is_none());
    assert!(!store.is_silent());
}

#[test]
fn test_root_teardown_precedes_wipe() {
    let store = seeded_store();
    let layer = RecordingLayer::install(&store);

    store.destroy("").unwrap();

    let calls = layer.calls();
    assert_eq!(calls.len(), 5);
    assert!(calls.iter().all(|call| call.path.is_empty() && call.data_present));
    assert!(store.data().is_empty());
}

#[test]
fn test_teardown_runs_for_missing_paths() {
    let store = seeded_store();
    let layer = RecordingLayer::install(&store);

    store.destroy("nothing.here").unwrap();

    let calls = layer.calls();
    assert_eq!(calls.len(), 5);
    assert!(calls.iter().all(|call| !call.data_present));
}

#[test]
fn test_failure_aborts_remaining_steps_and_removal() {
    let store = seeded_store();
    let failing = RecordingLayer::failing_on(TeardownStep::Subscriptions);
    store.add_reactive_layer(failing.clone());
    let after = RecordingLayer::install(&store);

    let err = store.destroy("users").unwrap_err();

    assert!(err.is_teardown_error());
    match &err {
        Error::Reactive(reactive_err) => {
            assert_eq!(reactive_err.step(), TeardownStep::Subscriptions)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        failing.steps(),
        vec![
            TeardownStep::Listeners,
            TeardownStep::Refs,
            TeardownStep::Subscriptions
        ]
    );
    assert_eq!(after.steps(), vec![TeardownStep::Listeners, TeardownStep::Refs]);
    assert!(store.get_collection("users").is_some());
    assert_eq!(store.get("users.alice.age").unwrap(), 30);
    assert!(!store.is_silent());
}

#[test]
fn test_event_context_passed_then_cleared() {
    let store = seeded_store();
    let layer = RecordingLayer::install(&store);
    store.set_event_context("click:42");

    store.destroy("posts").unwrap();

    let context_call = layer.calls().pop().unwrap();
    assert_eq!(context_call.step, TeardownStep::ContextListeners);
    assert_eq!(context_call.context.as_deref(), Some("click:42"));
    assert!(store.event_context().is_none());

    store.destroy("_session").unwrap();
    assert_eq!(layer.calls().pop().unwrap().context, None);
}

#[test]
fn test_event_context_survives_failed_teardown() {
    let store = seeded_store();
    store.add_reactive_layer(RecordingLayer::failing_on(TeardownStep::ContextListeners));
    store.set_event_context("submit");

    assert!(store.destroy("posts").is_err());
    assert_eq!(store.event_context().as_deref(), Some("submit"));
    assert!(store.get_collection("posts").is_some());
}

#[test]
fn test_silent_mode_nests_with_destroy() {
    let store = seeded_store();
    let layer = RecordingLayer::install(&store);

    {
        let silent = store.silent();
        silent.destroy("users.bob").unwrap();
        assert!(store.is_silent());
    }

    assert!(!store.is_silent());
    assert!(layer.calls().iter().all(|call| call.silent));
}
