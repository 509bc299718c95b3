//! Tests for removal: `remove_listener` in both forms, the `off` alias,
//! and `remove_all_listeners`.

use std::sync::{Arc, Mutex};

use evreg::{handler, EventRegistry, EventToken, Handler};

/// Helper: create a shared call-log that handlers append to.
fn make_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Helper: a handler that appends `"{tag}:{payload}"` to `log` on every call.
fn tagged(log: &Arc<Mutex<Vec<String>>>, tag: &str) -> Handler<i32> {
    let log = Arc::clone(log);
    let tag = tag.to_string();
    handler(move |v: &i32| log.lock().unwrap().push(format!("{tag}:{v}")))
}

// ============================================================================
// remove_listener with a handler
// ============================================================================

#[test]
fn remove_listener_removes_only_the_given_handler() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let a = tagged(&log, "a");

    registry.on("save", a.clone());
    registry.on("save", tagged(&log, "b"));

    assert!(registry.remove_listener("save", Some(&a)));
    assert_eq!(registry.listener_count("save"), 1);

    registry.emit("save", &1);
    assert_eq!(*log.lock().unwrap(), vec!["b:1"]);
}

#[test]
fn remove_listener_returns_false_for_an_unregistered_handler() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let registered = tagged(&log, "a");
    let never_registered = tagged(&log, "x");

    registry.on("save", registered);

    assert!(!registry.remove_listener("save", Some(&never_registered)));
    assert_eq!(
        registry.listener_count("save"),
        1,
        "other handlers must be left untouched"
    );
}

#[test]
fn remove_listener_returns_false_for_an_unknown_event() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let h = tagged(&log, "a");

    assert!(!registry.remove_listener("no-such-event", Some(&h)));
}

#[test]
fn removing_the_last_handler_leaves_an_inert_event() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let h = tagged(&log, "a");

    registry.on("save", h.clone());
    assert!(registry.remove_listener("save", Some(&h)));

    // The emptied record behaves exactly like an absent one.
    assert_eq!(registry.listener_count("save"), 0);
    assert!(!registry.has_listener("save", None));
    registry.emit("save", &1);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn removal_does_not_invoke_the_handler() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let h = tagged(&log, "a");

    registry.on("save", h.clone());
    registry.remove_listener("save", Some(&h));
    registry.remove_listener("load", None);
    registry.remove_all_listeners();

    assert!(log.lock().unwrap().is_empty(), "removal never calls handlers");
}

// ============================================================================
// remove_listener without a handler — whole-record deletion
// ============================================================================

#[test]
fn remove_listener_without_handler_deletes_the_whole_record() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();

    registry.on("save", tagged(&log, "a"));
    registry.on("save", tagged(&log, "b"));

    assert!(registry.remove_listener("save", None));

    assert_eq!(registry.listener_count("save"), 0);
    registry.emit("save", &1);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn remove_listener_without_handler_reports_whether_a_record_existed() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();

    registry.on("save", tagged(&log, "a"));

    assert!(registry.remove_listener("save", None));
    assert!(
        !registry.remove_listener("save", None),
        "the record is gone after the first deletion"
    );
    assert!(!registry.remove_listener("never-registered", None));
}

// ============================================================================
// off — alias
// ============================================================================

#[test]
fn off_is_an_alias_for_remove_listener() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let h = tagged(&log, "a");

    registry.on("save", h.clone());

    assert!(registry.off("save", Some(&h)));
    assert!(!registry.off("save", Some(&h)), "second removal is a no-op");

    registry.on("save", tagged(&log, "b"));
    assert!(registry.off("save", None));
    assert_eq!(registry.listener_count("save"), 0);
}

// ============================================================================
// remove_all_listeners
// ============================================================================

#[test]
fn remove_all_listeners_clears_every_event() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();
    let token = EventToken::new();

    registry.on("save", tagged(&log, "a"));
    registry.on("load", tagged(&log, "b"));
    registry.on(token, tagged(&log, "c"));

    registry.remove_all_listeners();

    assert_eq!(registry.listener_count("save"), 0);
    assert_eq!(registry.listener_count("load"), 0);
    assert_eq!(registry.listener_count(token), 0);

    registry.emit("save", &1);
    registry.emit("load", &1);
    registry.emit(token, &1);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn registry_is_reusable_after_remove_all_listeners() {
    let registry: EventRegistry<i32> = EventRegistry::new();
    let log = make_log();

    registry.on("save", tagged(&log, "before"));
    registry.remove_all_listeners();

    registry.on("save", tagged(&log, "after"));
    registry.emit("save", &1);

    assert_eq!(*log.lock().unwrap(), vec!["after:1"]);
}
