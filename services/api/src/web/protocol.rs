//! services/api/src/web/protocol.rs
//!
//! Defines the WebSocket message protocol between the browser client and the API server
//! for the alumni community application.

use crate::web::panels::PanelPayload;
use alumni_connect_core::domain::{Profile, Session, View};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Messages Sent FROM the Client (Browser) TO the Server
//=========================================================================================

/// Represents the structured text messages a client can send to the server.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Requests a view change. `target` is a view slug, or the
    /// distinguished `admin_login` action. Unknown slugs mount the
    /// overview panel.
    Navigate { target: String },

    /// Member login; lands on the dashboard home view.
    Login,

    /// Admin login; lands on the admin view.
    AdminLogin,

    /// Ends the session and returns to the landing view.
    Logout,

    /// Replaces the session's profile wholesale.
    UpdateProfile { profile: Profile },

    /// Sends a (simulated) connect request to a fellow alum.
    Connect { alumni_id: Uuid },

    /// Likes a story.
    LikeStory { story_id: Uuid },

    /// Comments on a story.
    CommentStory { story_id: Uuid, text: String },

    /// Shares a story. Purely simulated; nothing is mutated.
    ShareStory { story_id: Uuid },

    /// Asks the assistant to draft a reconnection message.
    DraftMessage { alumni_id: Uuid, notes: String },

    /// Asks the assistant for conversation-starter topics.
    SuggestTopics { alumni_id: Uuid },
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client (Browser)
//=========================================================================================

/// Represents the structured text messages the server can send to the client.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The current view changed; carries the panel payload to mount.
    ViewChanged { view: View, panel: PanelPayload },

    /// The session's login/role/profile state changed.
    SessionUpdated { session: Session },

    /// Local acknowledgment of a simulated community action.
    Ack { message: String },

    /// The assistant accepted a request and is working on it.
    AssistantPending,

    /// The drafted reconnection message is ready.
    DraftReady { text: String },

    /// Conversation-starter suggestions are ready.
    Topics { suggestions: Vec<String> },

    /// Reports an error to the client, which should display an error message.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_deserialize_from_tagged_json() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"navigate","target":"directory"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Navigate { target } if target == "directory"));

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"login"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Login));

        let id = Uuid::new_v4();
        let json = format!(r#"{{"type":"draft_message","alumni_id":"{id}","notes":"reunion"}}"#);
        let msg: ClientMessage = serde_json::from_str(&json).unwrap();
        assert!(
            matches!(msg, ClientMessage::DraftMessage { alumni_id, notes }
                if alumni_id == id && notes == "reunion")
        );
    }

    #[test]
    fn server_messages_serialize_with_a_type_tag() {
        let json = serde_json::to_string(&ServerMessage::Ack {
            message: "Connect request sent".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""type":"ack""#));

        let json = serde_json::to_string(&ServerMessage::Topics {
            suggestions: vec!["Reunion plans".to_string()],
        })
        .unwrap();
        assert!(json.contains(r#""type":"topics""#));
    }
}
