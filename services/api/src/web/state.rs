//! services/api/src/web/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use alumni_connect_core::navigation::Navigator;
use alumni_connect_core::ports::{ContentStore, MessageDraftService};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

//=========================================================================================
// AppState (Shared Across All Connections)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub drafts: Arc<dyn MessageDraftService>,
    pub config: Arc<Config>,
}

//=========================================================================================
// SessionState (Specific to One WebSocket Connection)
//=========================================================================================

/// The state for a single, active WebSocket connection: the navigation
/// controller owning the session, plus the token guarding the one in-flight
/// assistant request this connection may have.
pub struct SessionState {
    pub navigator: Navigator,
    /// Cancels the current assistant task. Replaced for every new request;
    /// cancelled when the session navigates away from the assistant view so
    /// a stale result is never delivered.
    pub assistant_token: CancellationToken,
}

impl SessionState {
    /// Creates the state for a fresh connection: a logged-out guest session
    /// on the landing view.
    pub fn new() -> Self {
        Self {
            navigator: Navigator::new(),
            assistant_token: CancellationToken::new(),
        }
    }

    /// Cancels any in-flight assistant task and installs a fresh token for
    /// the next one.
    pub fn reset_assistant_token(&mut self) -> CancellationToken {
        self.assistant_token.cancel();
        self.assistant_token = CancellationToken::new();
        self.assistant_token.clone()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
