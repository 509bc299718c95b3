//! Plain data types of the subscription surface: handler aliases, the
//! per-subscription options record, and batch-registration entries.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::name::EventName;

/// Closure type for event handlers.
pub type HandlerFn<T> = dyn Fn(&T) + Send + Sync;

/// A shared, identity-carrying handle to a handler closure.
///
/// The registry compares handlers by `Arc` pointer identity: clones of one
/// `Handler` are the same handler, while two separately built `Handler`s are
/// different handlers even when their closures are textually identical. Keep
/// a clone if you need to remove or query the handler later.
pub type Handler<T> = Arc<HandlerFn<T>>;

/// Wrap a closure as a [`Handler`].
pub fn handler<T>(f: impl Fn(&T) + Send + Sync + 'static) -> Handler<T> {
    Arc::new(f)
}

/// Per-subscription options.
///
/// Deserializes leniently: missing fields fall back to their defaults, so
/// `{}` and `{"once": true}` are both complete records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeOptions {
    /// Remove the handler from the registry immediately before its first
    /// invocation.
    pub once: bool,
}

/// One row of a batch registration (see `EventRegistry::add_listeners`).
pub struct EventEntry<T> {
    /// Event the handler subscribes to.
    pub name: EventName,
    /// Handler called when the event is emitted.
    pub handler: Handler<T>,
    /// One-shot flag, default `false`.
    pub once: bool,
}

impl<T> EventEntry<T> {
    /// Entry with default options.
    pub fn new(name: impl Into<EventName>, handler: Handler<T>) -> Self {
        Self {
            name: name.into(),
            handler,
            once: false,
        }
    }

    /// Set the one-shot flag.
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }
}

// Derived Clone would demand `T: Clone`; the entry only holds an `Arc`.
impl<T> Clone for EventEntry<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            handler: Arc::clone(&self.handler),
            once: self.once,
        }
    }
}

impl<T> fmt::Debug for EventEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEntry")
            .field("name", &self.name)
            .field("handler", &"<fn>")
            .field("once", &self.once)
            .finish()
    }
}
