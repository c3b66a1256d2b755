//! services/api/src/web/draft_task.rs
//!
//! This module contains the asynchronous "worker" functions for the
//! assistant. Each one runs a single collaborator call off the connection's
//! message loop and is designed to be gracefully cancelled via a
//! `CancellationToken` when the session moves on before the result arrives.

use crate::web::{assistant, protocol::ServerMessage, state::AppState};
use alumni_connect_core::domain::{AlumniProfile, Profile};
use alumni_connect_core::ports::{PortError, PortResult};
use axum::extract::ws::{Message, WebSocket};
use futures::{stream::SplitSink, SinkExt};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Drafts a reconnection message and sends it to the client, unless the
/// request was cancelled in the meantime. A cancelled task drops its result
/// silently; the client never sees a stale draft.
pub async fn draft_process(
    app_state: Arc<AppState>,
    ws_sender: Arc<Mutex<SplitSink<WebSocket, Message>>>,
    cancellation_token: CancellationToken,
    recipient: AlumniProfile,
    sender_profile: Profile,
    notes: String,
) -> PortResult<()> {
    info!("Draft process started for recipient {}.", recipient.id);

    let text = tokio::select! {
        _ = cancellation_token.cancelled() => {
            info!("Draft process cancelled before completion.");
            return Ok(());
        }
        text = assistant::draft_with_fallback(
            app_state.drafts.as_ref(),
            &recipient,
            &sender_profile,
            &notes,
        ) => text,
    };

    if cancellation_token.is_cancelled() {
        info!("Draft completed after cancellation; dropping stale result.");
        return Ok(());
    }

    send_message(&ws_sender, &ServerMessage::DraftReady { text }).await
}

/// Fetches conversation-starter topics and sends them to the client, with
/// the same cancellation contract as `draft_process`.
pub async fn topics_process(
    app_state: Arc<AppState>,
    ws_sender: Arc<Mutex<SplitSink<WebSocket, Message>>>,
    cancellation_token: CancellationToken,
    recipient: AlumniProfile,
) -> PortResult<()> {
    info!("Topics process started for recipient {}.", recipient.id);

    let suggestions = tokio::select! {
        _ = cancellation_token.cancelled() => {
            info!("Topics process cancelled before completion.");
            return Ok(());
        }
        suggestions = assistant::topics_with_fallback(
            app_state.drafts.as_ref(),
            &recipient,
        ) => suggestions,
    };

    if cancellation_token.is_cancelled() {
        info!("Topics completed after cancellation; dropping stale result.");
        return Ok(());
    }

    send_message(&ws_sender, &ServerMessage::Topics { suggestions }).await
}

async fn send_message(
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
    msg: &ServerMessage,
) -> PortResult<()> {
    let json = serde_json::to_string(msg)
        .map_err(|e| PortError::Unexpected(format!("Failed to serialize message: {e}")))?;
    ws_sender
        .lock()
        .await
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| PortError::Unexpected("Failed to send assistant result.".to_string()))
}
