//! services/api/src/web/assistant.rs
//!
//! Caller-side wrapper around the `MessageDraftService` port. Every function
//! here is infallible from the UI's point of view: collaborator failures are
//! logged and replaced with fixed fallback values.

use alumni_connect_core::domain::{AlumniProfile, Profile};
use alumni_connect_core::ports::MessageDraftService;
use regex::Regex;
use tracing::{error, warn};

/// The fixed draft returned whenever the collaborator fails or produces an
/// empty response.
pub const DRAFT_FALLBACK: &str =
    "Hi! It's been far too long since our school days. I came across your profile in the \
     alumni directory and would love to catch up sometime. Hope life is treating you well!";

/// The fixed suggestions substituted when the topics response cannot be
/// parsed as a JSON array.
pub const TOPIC_FALLBACK: &[&str] = &[
    "Favorite memories from school days",
    "How your career path unfolded",
    "Old teachers and classmates you're still in touch with",
    "Plans for the next reunion",
    "How the campus has changed since graduation",
];

/// Drafts a reconnection message, never failing. An adapter error or an
/// empty completion degrades to [`DRAFT_FALLBACK`].
pub async fn draft_with_fallback(
    drafts: &dyn MessageDraftService,
    recipient: &AlumniProfile,
    sender: &Profile,
    notes: &str,
) -> String {
    match drafts.draft_message(recipient, sender, notes).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Draft collaborator returned an empty message; using fallback.");
            DRAFT_FALLBACK.to_string()
        }
        Err(e) => {
            error!("Draft collaborator failed: {:?}. Using fallback.", e);
            DRAFT_FALLBACK.to_string()
        }
    }
}

/// Fetches conversation-starter topics, never failing. Any adapter error or
/// unparsable response substitutes the hard-coded [`TOPIC_FALLBACK`] list.
pub async fn topics_with_fallback(
    drafts: &dyn MessageDraftService,
    recipient: &AlumniProfile,
) -> Vec<String> {
    let raw = match drafts.suggest_topics(recipient).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Topics collaborator failed: {:?}. Using fallback list.", e);
            return default_topics();
        }
    };

    match parse_topics(&raw) {
        Some(topics) => topics,
        None => {
            warn!("Topics response was not a JSON array; using fallback list.");
            default_topics()
        }
    }
}

fn default_topics() -> Vec<String> {
    TOPIC_FALLBACK.iter().map(|t| t.to_string()).collect()
}

/// Parses the model output as a JSON array of strings. Models often wrap
/// JSON in a markdown code fence, so fences are stripped first.
fn parse_topics(raw: &str) -> Option<Vec<String>> {
    let fence = Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").ok()?;
    let stripped = match fence.captures(raw) {
        Some(caps) => caps.get(1).map_or(raw, |m| m.as_str()),
        None => raw,
    };

    let topics: Vec<String> = serde_json::from_str(stripped.trim()).ok()?;
    let topics: Vec<String> = topics
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if topics.is_empty() {
        None
    } else {
        Some(topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumni_connect_core::ports::{PortError, PortResult};
    use async_trait::async_trait;
    use uuid::Uuid;

    /// A scriptable stand-in for the collaborator.
    struct ScriptedDrafts {
        draft: PortResult<String>,
        topics: PortResult<String>,
    }

    #[async_trait]
    impl MessageDraftService for ScriptedDrafts {
        async fn draft_message(
            &self,
            _recipient: &AlumniProfile,
            _sender: &Profile,
            _notes: &str,
        ) -> PortResult<String> {
            clone_result(&self.draft)
        }

        async fn suggest_topics(&self, _recipient: &AlumniProfile) -> PortResult<String> {
            clone_result(&self.topics)
        }
    }

    fn clone_result(r: &PortResult<String>) -> PortResult<String> {
        match r {
            Ok(s) => Ok(s.clone()),
            Err(PortError::NotFound(s)) => Err(PortError::NotFound(s.clone())),
            Err(PortError::Unexpected(s)) => Err(PortError::Unexpected(s.clone())),
        }
    }

    fn recipient() -> AlumniProfile {
        AlumniProfile {
            id: Uuid::new_v4(),
            name: "Rahul Menon".to_string(),
            batch_year: 2011,
            location: "Singapore".to_string(),
            profession: "Product Manager".to_string(),
            avatar_url: String::new(),
            connected: false,
        }
    }

    #[tokio::test]
    async fn a_successful_draft_passes_through() {
        let drafts = ScriptedDrafts {
            draft: Ok("Hey Rahul, long time!".to_string()),
            topics: Ok("[]".to_string()),
        };
        let text =
            draft_with_fallback(&drafts, &recipient(), &Profile::guest(), "reunion").await;
        assert_eq!(text, "Hey Rahul, long time!");
    }

    #[tokio::test]
    async fn a_failed_draft_returns_the_fixed_fallback() {
        let drafts = ScriptedDrafts {
            draft: Err(PortError::Unexpected("network down".to_string())),
            topics: Ok("[]".to_string()),
        };
        let text = draft_with_fallback(&drafts, &recipient(), &Profile::guest(), "").await;
        assert_eq!(text, DRAFT_FALLBACK);
        assert!(!text.is_empty());
    }

    #[tokio::test]
    async fn an_empty_draft_returns_the_fixed_fallback() {
        let drafts = ScriptedDrafts {
            draft: Ok("   ".to_string()),
            topics: Ok("[]".to_string()),
        };
        let text = draft_with_fallback(&drafts, &recipient(), &Profile::guest(), "").await;
        assert_eq!(text, DRAFT_FALLBACK);
    }

    #[tokio::test]
    async fn topics_parse_a_plain_json_array() {
        let drafts = ScriptedDrafts {
            draft: Ok(String::new()),
            topics: Ok(r#"["Cricket finals", "Careers"]"#.to_string()),
        };
        let topics = topics_with_fallback(&drafts, &recipient()).await;
        assert_eq!(topics, vec!["Cricket finals", "Careers"]);
    }

    #[tokio::test]
    async fn topics_strip_markdown_code_fences() {
        let drafts = ScriptedDrafts {
            draft: Ok(String::new()),
            topics: Ok("```json\n[\"Reunion plans\"]\n```".to_string()),
        };
        let topics = topics_with_fallback(&drafts, &recipient()).await;
        assert_eq!(topics, vec!["Reunion plans"]);
    }

    #[tokio::test]
    async fn unparsable_topics_substitute_the_hard_coded_list() {
        for bad in [
            "Sorry, I can't help with that.",
            "{\"topics\": []}",
            "[]",
        ] {
            let drafts = ScriptedDrafts {
                draft: Ok(String::new()),
                topics: Ok(bad.to_string()),
            };
            let topics = topics_with_fallback(&drafts, &recipient()).await;
            assert_eq!(topics.len(), TOPIC_FALLBACK.len());
            assert_eq!(topics[0], TOPIC_FALLBACK[0]);
        }
    }

    #[tokio::test]
    async fn failed_topics_substitute_the_hard_coded_list() {
        let drafts = ScriptedDrafts {
            draft: Ok(String::new()),
            topics: Err(PortError::Unexpected("rate limited".to_string())),
        };
        let topics = topics_with_fallback(&drafts, &recipient()).await;
        assert_eq!(topics.len(), TOPIC_FALLBACK.len());
    }

    #[tokio::test]
    async fn the_disabled_adapter_surfaces_the_configured_message() {
        use crate::adapters::DisabledDraftAdapter;
        let drafts = DisabledDraftAdapter::new("Assistant not configured.".to_string());
        let text = draft_with_fallback(&drafts, &recipient(), &Profile::guest(), "").await;
        assert_eq!(text, "Assistant not configured.");

        // The offline message is not a JSON array, so topics degrade to the
        // hard-coded list.
        let topics = topics_with_fallback(&drafts, &recipient()).await;
        assert_eq!(topics.len(), TOPIC_FALLBACK.len());
    }
}
