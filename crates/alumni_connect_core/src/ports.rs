//! crates/alumni_connect_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like content stores or
//! text-generation APIs.

use crate::domain::{
    AlumniProfile, DonationCause, EventItem, GalleryItem, MembershipTier, Profile, Story,
    VolunteerRole,
};
use async_trait::async_trait;
use uuid::Uuid;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The content behind the presentational panels. All of it is transient
/// process state; the simulated community actions mutate only this store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    // --- Directory ---
    async fn list_alumni(&self) -> PortResult<Vec<AlumniProfile>>;
    async fn get_alumni(&self, alumni_id: Uuid) -> PortResult<AlumniProfile>;
    /// Marks a connect request as sent. Idempotent.
    async fn request_connection(&self, alumni_id: Uuid) -> PortResult<AlumniProfile>;

    // --- Events ---
    async fn list_events(&self) -> PortResult<Vec<EventItem>>;

    // --- Gallery ---
    async fn list_gallery(&self) -> PortResult<Vec<GalleryItem>>;

    // --- Stories ---
    async fn list_stories(&self) -> PortResult<Vec<Story>>;
    async fn like_story(&self, story_id: Uuid) -> PortResult<Story>;
    async fn comment_on_story(&self, story_id: Uuid, author: &str, text: &str)
        -> PortResult<Story>;

    // --- Static program rows ---
    async fn membership_tiers(&self) -> PortResult<Vec<MembershipTier>>;
    async fn donation_causes(&self) -> PortResult<Vec<DonationCause>>;
    async fn volunteer_roles(&self) -> PortResult<Vec<VolunteerRole>>;
}

/// The generative-text collaborator, consumed through this narrow seam.
/// Callers treat every response as best-effort prose; the topics method
/// asks the model for a JSON array and the caller owns the parse fallback.
#[async_trait]
pub trait MessageDraftService: Send + Sync {
    /// Drafts a reconnection message from `sender` to `recipient`,
    /// optionally steered by free-form notes.
    async fn draft_message(
        &self,
        recipient: &AlumniProfile,
        sender: &Profile,
        notes: &str,
    ) -> PortResult<String>;

    /// Asks for conversation-starter topics as raw model output. The
    /// response is expected to be a JSON array of strings but is not
    /// guaranteed to be one.
    async fn suggest_topics(&self, recipient: &AlumniProfile) -> PortResult<String>;
}
