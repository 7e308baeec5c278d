//! Session state for the signed-in dashboard user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is created in `App` and provided through
//! context. Auth pages write the access token after a successful login or
//! registration; authenticated requests and the layout shells read it.
//! The token is mirrored to `localStorage` by `util::auth`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "bookdesk_session";

/// Access token plus restore status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    token: Option<String>,
    /// True until the stored session has been read back in the browser.
    /// Route guards stay inert while restoring.
    #[serde(skip)]
    pub restoring: bool,
}

impl SessionState {
    /// Initial state before browser storage has been consulted.
    pub fn restoring() -> Self {
        Self { token: None, restoring: true }
    }

    /// Restored state from a stored session, if one was found.
    pub fn restored(stored: Option<Self>) -> Self {
        Self { token: stored.and_then(|s| s.token), restoring: false }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a freshly issued token. An empty token signs the user out.
    pub fn set_token(&mut self, token: String) {
        self.token = if token.is_empty() { None } else { Some(token) };
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}
