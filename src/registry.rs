//! EventRegistry<T> — named events mapped to ordered handler lists, with
//! synchronous dispatch.
//!
//! Handlers are stored per [`EventName`] as `Arc<dyn Fn(&T)>` slots paired
//! inline with their subscription options, in invocation order. Emission
//! uses snapshot semantics:
//!   - A handler removed *during* an emission is still called in that pass.
//!   - A handler added *during* an emission is NOT called until the next one.
//!   - `once` flags are resolved from the snapshot taken when the pass began.
//!
//! Panics inside a handler propagate to the caller of [`EventRegistry::emit`]
//! and abort delivery to the rest of the pass — there is no error isolation
//! at this level. Callers that need isolation wrap their handlers in
//! `catch_unwind` themselves.
//!
//! All methods take `&self` (interior mutability via `parking_lot::Mutex`),
//! and the lock is never held while a handler runs, so handlers can freely
//! re-enter the registry — register, remove, even emit — without
//! deadlocking. The registry is `Send + Sync` and is typically shared
//! behind an `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::name::EventName;
use crate::types::{EventEntry, Handler, SubscribeOptions};

/// One registered handler and its options, in invocation order.
///
/// Options live inline in the slot rather than in a separate handler-keyed
/// table, so the two can never disagree; removing the slot removes both.
struct HandlerSlot<T> {
    handler: Handler<T>,
    options: SubscribeOptions,
}

/// Registry of named events and their ordered handler lists.
///
/// `T` is the emission payload type; handlers receive `&T` and their return
/// value is ignored. Callers that want heterogeneous arguments pick a
/// structured payload such as `serde_json::Value` or a tuple.
pub struct EventRegistry<T> {
    events: Mutex<HashMap<EventName, Vec<HandlerSlot<T>>>>,
}

impl<T> EventRegistry<T> {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register `handler` under `name` with explicit options.
    ///
    /// Creates the event record on first registration. A handler already
    /// registered for this event (same `Arc`, see [`Handler`]) keeps its
    /// position; only its stored options are refreshed. New handlers are
    /// appended at the tail, so they run last.
    pub fn add_listener(
        &self,
        name: impl Into<EventName>,
        handler: Handler<T>,
        options: SubscribeOptions,
    ) {
        self.register(name.into(), handler, options, false);
    }

    /// Register a batch of entries, in the order given.
    ///
    /// Equivalent to calling [`add_listener`](Self::add_listener) once per
    /// entry; there is no atomicity across the batch.
    pub fn add_listeners(&self, entries: impl IntoIterator<Item = EventEntry<T>>) {
        for entry in entries {
            self.add_listener(
                entry.name,
                entry.handler,
                SubscribeOptions { once: entry.once },
            );
        }
    }

    /// Like [`add_listener`](Self::add_listener), but the handler lands at
    /// the head of the list, so it runs first.
    ///
    /// A handler already registered elsewhere in the list is relocated to
    /// the head, with its options refreshed.
    pub fn prepend_listener(
        &self,
        name: impl Into<EventName>,
        handler: Handler<T>,
        options: SubscribeOptions,
    ) {
        self.register(name.into(), handler, options, true);
    }

    /// [`prepend_listener`](Self::prepend_listener) with `once: true`.
    pub fn prepend_once_listener(&self, name: impl Into<EventName>, handler: Handler<T>) {
        self.prepend_listener(name, handler, SubscribeOptions { once: true });
    }

    /// Register `handler` under `name` with default options.
    pub fn on(&self, name: impl Into<EventName>, handler: Handler<T>) {
        self.add_listener(name, handler, SubscribeOptions::default());
    }

    /// Register a one-shot handler: it is removed from the registry
    /// immediately before its first invocation.
    pub fn once(&self, name: impl Into<EventName>, handler: Handler<T>) {
        self.add_listener(name, handler, SubscribeOptions { once: true });
    }

    fn register(
        &self,
        name: EventName,
        handler: Handler<T>,
        options: SubscribeOptions,
        prepend: bool,
    ) {
        tracing::trace!(event = %name, once = options.once, prepend, "listener registered");
        let mut events = self.events.lock();
        let slots = events.entry(name).or_default();
        if prepend {
            // Relocation: the list is rebuilt as [handler, rest-without-handler].
            slots.retain(|slot| !Arc::ptr_eq(&slot.handler, &handler));
            slots.insert(0, HandlerSlot { handler, options });
        } else if let Some(slot) = slots
            .iter_mut()
            .find(|slot| Arc::ptr_eq(&slot.handler, &handler))
        {
            // Re-registration refreshes options without moving the slot.
            slot.options = options;
        } else {
            slots.push(HandlerSlot { handler, options });
        }
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Remove a handler, or the whole event record.
    ///
    /// With `Some(handler)`, removes that handler (by `Arc` identity) from
    /// `name`'s list and returns whether it was present. The event record
    /// itself is kept, possibly empty — an empty record behaves exactly like
    /// an absent one.
    ///
    /// With `None`, deletes the entire record for `name` and returns whether
    /// one existed.
    ///
    /// No handler is invoked by removal.
    pub fn remove_listener(
        &self,
        name: impl Into<EventName>,
        handler: Option<&Handler<T>>,
    ) -> bool {
        let name = name.into();
        let mut events = self.events.lock();
        match handler {
            None => events.remove(&name).is_some(),
            Some(handler) => match events.get_mut(&name) {
                None => false,
                Some(slots) => {
                    let before = slots.len();
                    slots.retain(|slot| !Arc::ptr_eq(&slot.handler, handler));
                    slots.len() < before
                }
            },
        }
    }

    /// Alias for [`remove_listener`](Self::remove_listener).
    pub fn off(&self, name: impl Into<EventName>, handler: Option<&Handler<T>>) -> bool {
        self.remove_listener(name, handler)
    }

    /// Clear every event record. No handler is invoked; the registry is
    /// immediately reusable.
    pub fn remove_all_listeners(&self) {
        let count = {
            let mut events = self.events.lock();
            let count = events.len();
            events.clear();
            count
        };
        tracing::debug!(events = count, "registry cleared");
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Whether `name` has any handler (`None`), or a specific one (`Some`).
    ///
    /// A `name` that was never registered yields `false` in both forms, so
    /// the handler-membership query is always safe to ask.
    pub fn has_listener(&self, name: impl Into<EventName>, handler: Option<&Handler<T>>) -> bool {
        let name = name.into();
        let events = self.events.lock();
        match handler {
            None => events.get(&name).is_some_and(|slots| !slots.is_empty()),
            Some(handler) => events.get(&name).is_some_and(|slots| {
                slots
                    .iter()
                    .any(|slot| Arc::ptr_eq(&slot.handler, handler))
            }),
        }
    }

    /// Number of distinct handlers currently registered for `name`
    /// (`0` when the event is unknown).
    pub fn listener_count(&self, name: impl Into<EventName>) -> usize {
        let name = name.into();
        self.events.lock().get(&name).map_or(0, Vec::len)
    }

    // -----------------------------------------------------------------------
    // Emission
    // -----------------------------------------------------------------------

    /// Emit `payload` to every handler of `name`, synchronously and in
    /// list order. Emitting an event with zero subscribers is a no-op.
    ///
    /// The handler list is snapshotted before the first call (cheap: `Arc`
    /// refcount bumps) and the lock released, so handlers may mutate the
    /// registry mid-pass without affecting the current pass. A one-shot
    /// handler is removed from the registry *before* it runs, so even a
    /// reentrant emission of the same event from inside the handler cannot
    /// call it a second time. A panicking handler aborts the rest of the
    /// pass and the panic reaches the caller unchanged.
    pub fn emit(&self, name: impl Into<EventName>, payload: &T) {
        let name = name.into();
        let snapshot: Vec<(Handler<T>, bool)> = {
            let events = self.events.lock();
            match events.get(&name) {
                None => return,
                Some(slots) => slots
                    .iter()
                    .map(|slot| (Arc::clone(&slot.handler), slot.options.once))
                    .collect(),
            }
        };
        tracing::trace!(event = %name, handlers = snapshot.len(), "emit");
        for (handler, once) in snapshot {
            if once {
                self.remove_listener(name.clone(), Some(&handler));
            }
            handler(payload);
        }
    }

    /// Alias for [`emit`](Self::emit).
    pub fn trigger(&self, name: impl Into<EventName>, payload: &T) {
        self.emit(name, payload);
    }
}

impl<T> Default for EventRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
