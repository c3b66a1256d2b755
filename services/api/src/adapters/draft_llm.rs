//! services/api/src/adapters/draft_llm.rs
//!
//! This module contains the adapter for the reconnection-message LLM.
//! It implements the `MessageDraftService` port from the `core` crate.

const DRAFT_SYSTEM_INSTRUCTIONS: &str = r#"You are a warm, concise writing assistant for a school alumni association.

Your job is to draft a short reconnection message from one alum to another.

Style for all drafts:
- Sound like a real person writing to an old schoolmate, not a form letter.
- Use a friendly, casual tone with contractions (it's, I've, don't).
- Reference the shared school connection naturally, without overdoing the nostalgia.
- Keep it to one short paragraph, 3-5 sentences.
- End with a light, low-pressure invitation to catch up.
- Do NOT invent specific shared memories that were not provided in the notes.
- Respond with ONLY the message text, no subject line, no quotes, no explanation."#;

const DRAFT_USER_TEMPLATE: &str = r#"Draft a reconnection message.

FROM (the sender):
Name: {sender_name}
Batch year: {sender_batch}

TO (the recipient):
Name: {recipient_name}
Batch year: {recipient_batch}
Location: {recipient_location}
Profession: {recipient_profession}

SENDER'S NOTES (may be empty):
{notes}

Use the recipient's profession or location as a natural hook when the notes
don't give you one."#;

const TOPICS_SYSTEM_INSTRUCTIONS: &str = r#"You suggest conversation starters for alumni reconnecting after years apart.

Respond with ONLY a JSON array of exactly 5 short strings, each a single
conversation-starter topic. No markdown, no commentary, no object wrapper."#;

const TOPICS_USER_TEMPLATE: &str = r#"Suggest conversation starters for reconnecting with this alum:

Name: {recipient_name}
Batch year: {recipient_batch}
Location: {recipient_location}
Profession: {recipient_profession}"#;

use alumni_connect_core::domain::{AlumniProfile, Profile};
use alumni_connect_core::ports::{MessageDraftService, PortError, PortResult};
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `MessageDraftService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiDraftAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiDraftAdapter {
    /// Creates a new `OpenAiDraftAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn complete(&self, system: &str, user_input: String) -> PortResult<String> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_input)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(400u32)
            .temperature(0.8)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        // Extract the text content from the first choice in the response.
        if let Some(choice) = response.choices.into_iter().next() {
            if let Some(content) = choice.message.content {
                Ok(content.trim().to_string())
            } else {
                Err(PortError::Unexpected(
                    "Draft LLM response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Unexpected(
                "Draft LLM returned no choices in its response.".to_string(),
            ))
        }
    }
}

//=========================================================================================
// `MessageDraftService` Trait Implementation
//=========================================================================================

#[async_trait]
impl MessageDraftService for OpenAiDraftAdapter {
    /// Drafts a short reconnection message from `sender` to `recipient`.
    async fn draft_message(
        &self,
        recipient: &AlumniProfile,
        sender: &Profile,
        notes: &str,
    ) -> PortResult<String> {
        let user_input = DRAFT_USER_TEMPLATE
            .replace("{sender_name}", &sender.name)
            .replace("{sender_batch}", &sender.batch_year.to_string())
            .replace("{recipient_name}", &recipient.name)
            .replace("{recipient_batch}", &recipient.batch_year.to_string())
            .replace("{recipient_location}", &recipient.location)
            .replace("{recipient_profession}", &recipient.profession)
            .replace("{notes}", notes);

        self.complete(DRAFT_SYSTEM_INSTRUCTIONS, user_input).await
    }

    /// Asks for conversation-starter topics as a JSON array. The caller
    /// owns the parse and its fallback.
    async fn suggest_topics(&self, recipient: &AlumniProfile) -> PortResult<String> {
        let user_input = TOPICS_USER_TEMPLATE
            .replace("{recipient_name}", &recipient.name)
            .replace("{recipient_batch}", &recipient.batch_year.to_string())
            .replace("{recipient_location}", &recipient.location)
            .replace("{recipient_profession}", &recipient.profession);

        self.complete(TOPICS_SYSTEM_INSTRUCTIONS, user_input).await
    }
}
