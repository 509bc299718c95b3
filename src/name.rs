//! EventName — the key type events are registered under.
//!
//! Mirrors the string-or-symbol union of dynamic event systems as a sum
//! type: [`EventName::Named`] compares by text content, [`EventName::Token`]
//! by identity. Tokens are minted from a process-wide counter, so two
//! identifiers are equal only if they carry the same text or are copies of
//! the same token.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of token identities.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// An opaque event key compared by identity rather than by content.
///
/// Every call to [`EventToken::new`] yields a token distinct from all
/// previously minted ones, so a token can never collide with another token
/// or with any named event. `EventToken` is `Copy`: copies address the same
/// event, which is the intended way to hand the key to both the subscribing
/// and the emitting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventToken(u64);

impl EventToken {
    /// Mint a fresh token, distinct from every token minted before it.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EventToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The key under which handlers are grouped: a text name or an opaque
/// [`EventToken`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Text identifier — equal when the string contents are equal.
    Named(String),
    /// Unique token — equal only to copies of itself.
    Token(EventToken),
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<EventToken> for EventName {
    fn from(token: EventToken) -> Self {
        Self::Token(token)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}
