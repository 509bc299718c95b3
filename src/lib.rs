//! evreg — a minimal synchronous in-process event registry.
//!
//! # Overview
//!
//! [`EventRegistry<T>`] maps event names — text strings or unique
//! [`EventToken`]s — to ordered lists of handlers. Registration, removal,
//! inspection and emission are all synchronous: [`EventRegistry::emit`]
//! calls each handler in order on the calling thread and returns when the
//! last one has. One-shot subscriptions (`once`) and prepend-to-front
//! registration are supported.
//!
//! The registry is a building block for larger applications (view-layer
//! state propagation and the like) and knows nothing about its consumers:
//! no deferred dispatch, no cross-process delivery, no pattern matching on
//! names, and no isolation between handlers — a panicking handler
//! propagates to the caller of the emission.
//!
//! # Modules
//!
//! - [`name`] — [`EventName`] / [`EventToken`] key types.
//! - [`types`] — [`Handler`] aliases, [`SubscribeOptions`], [`EventEntry`].
//! - [`registry`] — [`EventRegistry<T>`].

pub mod name;
pub mod registry;
pub mod types;

pub use name::{EventName, EventToken};
pub use registry::EventRegistry;
pub use types::{handler, EventEntry, Handler, HandlerFn, SubscribeOptions};
