//! services/api/src/adapters/disabled.rs
//!
//! The adapter wired in place of the real text-generation collaborator when
//! no API credential is configured. Every call completes locally with the
//! configured offline message; no outbound network call is ever attempted.

use alumni_connect_core::domain::{AlumniProfile, Profile};
use alumni_connect_core::ports::{MessageDraftService, PortResult};
use async_trait::async_trait;

/// An adapter that implements `MessageDraftService` without a collaborator.
#[derive(Clone)]
pub struct DisabledDraftAdapter {
    offline_message: String,
}

impl DisabledDraftAdapter {
    /// Creates a new `DisabledDraftAdapter` with the configured message.
    pub fn new(offline_message: String) -> Self {
        Self { offline_message }
    }
}

#[async_trait]
impl MessageDraftService for DisabledDraftAdapter {
    async fn draft_message(
        &self,
        _recipient: &AlumniProfile,
        _sender: &Profile,
        _notes: &str,
    ) -> PortResult<String> {
        Ok(self.offline_message.clone())
    }

    /// The offline message is not a JSON array, so callers degrade through
    /// their normal parse fallback.
    async fn suggest_topics(&self, _recipient: &AlumniProfile) -> PortResult<String> {
        Ok(self.offline_message.clone())
    }
}
