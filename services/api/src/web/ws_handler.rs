//! services/api/src/web/ws_handler.rs
//!
//! This is the main entry point and control loop for a WebSocket connection.
//! It owns the connection's session state and routes every client message
//! through the navigation controller or the simulated community actions.

use crate::web::{
    draft_task::{draft_process, topics_process},
    panels::build_panel,
    protocol::{ClientMessage, ServerMessage},
    state::{AppState, SessionState},
};
use alumni_connect_core::domain::{NavTarget, View};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{
    stream::{SplitSink, StreamExt},
    SinkExt,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

/// The handler for upgrading HTTP requests to WebSocket connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    info!("New WebSocket connection established.");

    // The sender is wrapped in an Arc<Mutex<>> to allow for shared mutable access across tasks.
    let (sender, mut receiver) = socket.split();
    let ws_sender = Arc::new(Mutex::new(sender));

    // Every connection starts as a logged-out guest on the landing view.
    let session_state_lock = Arc::new(Mutex::new(SessionState::new()));

    // --- 1. Initial View ---
    {
        let session = session_state_lock.lock().await;
        let snapshot = session.navigator.session().clone();
        send(&ws_sender, &ServerMessage::SessionUpdated { session: snapshot.clone() }).await;
        match build_panel(&app_state, &snapshot, snapshot.current_view).await {
            Ok(panel) => {
                send(
                    &ws_sender,
                    &ServerMessage::ViewChanged {
                        view: snapshot.current_view,
                        panel,
                    },
                )
                .await;
            }
            Err(e) => {
                error!("Failed to build the landing panel: {:?}", e);
                return;
            }
        }
    }

    // --- 2. Main Message Loop ---
    loop {
        if let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    handle_text_message(
                        text.to_string(),
                        &app_state,
                        &session_state_lock,
                        &ws_sender,
                    )
                    .await;
                }
                Message::Close(_) => {
                    info!("Client sent close message.");
                    break;
                }
                _ => {}
            }
        } else {
            info!("Client disconnected.");
            break;
        }
    }

    // --- 3. Cleanup ---
    session_state_lock.lock().await.assistant_token.cancel();
    info!("WebSocket connection closed.");
}

/// Helper function to handle the logic for different `ClientMessage` variants.
async fn handle_text_message(
    text: String,
    app_state: &Arc<AppState>,
    session_state_lock: &Arc<Mutex<SessionState>>,
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
) {
    let client_msg = match serde_json::from_str::<ClientMessage>(&text) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Failed to deserialize client message: {}", e);
            return;
        }
    };

    match client_msg {
        ClientMessage::Navigate { target } => {
            let target = match NavTarget::from_slug(&target) {
                Some(target) => target,
                None => {
                    // Unknown slugs mount the overview panel rather than failing.
                    warn!("Unknown navigation target '{}'; falling back to home.", target);
                    NavTarget::View(View::DashboardHome)
                }
            };
            let mut session = session_state_lock.lock().await;
            session.navigator.navigate(target);
            if session.navigator.session().current_view != View::Assistant {
                session.assistant_token.cancel();
            }
            push_view(app_state, &*session, ws_sender).await;
        }
        ClientMessage::Login => {
            let mut session = session_state_lock.lock().await;
            session.navigator.login();
            push_view(app_state, &*session, ws_sender).await;
        }
        ClientMessage::AdminLogin => {
            let mut session = session_state_lock.lock().await;
            session.navigator.admin_login();
            push_view(app_state, &*session, ws_sender).await;
        }
        ClientMessage::Logout => {
            let mut session = session_state_lock.lock().await;
            session.assistant_token.cancel();
            session.navigator.logout();
            push_view(app_state, &*session, ws_sender).await;
        }
        ClientMessage::UpdateProfile { profile } => {
            let mut session = session_state_lock.lock().await;
            match session.navigator.update_profile(profile) {
                Ok(()) => {
                    let snapshot = session.navigator.session().clone();
                    send(ws_sender, &ServerMessage::SessionUpdated { session: snapshot }).await;
                    send(
                        ws_sender,
                        &ServerMessage::Ack {
                            message: "Profile updated.".to_string(),
                        },
                    )
                    .await;
                }
                Err(e) => {
                    send(
                        ws_sender,
                        &ServerMessage::Error {
                            message: e.to_string(),
                        },
                    )
                    .await;
                }
            }
        }
        ClientMessage::Connect { alumni_id } => {
            match app_state.content.request_connection(alumni_id).await {
                Ok(alum) => {
                    send(
                        ws_sender,
                        &ServerMessage::Ack {
                            message: format!("Connect request sent to {}.", alum.name),
                        },
                    )
                    .await;
                    refresh_if_current(app_state, session_state_lock, ws_sender, View::Directory)
                        .await;
                }
                Err(e) => send_port_error(ws_sender, e).await,
            }
        }
        ClientMessage::LikeStory { story_id } => {
            match app_state.content.like_story(story_id).await {
                Ok(story) => {
                    send(
                        ws_sender,
                        &ServerMessage::Ack {
                            message: format!("You liked \"{}\".", story.title),
                        },
                    )
                    .await;
                    refresh_if_current(app_state, session_state_lock, ws_sender, View::Stories)
                        .await;
                }
                Err(e) => send_port_error(ws_sender, e).await,
            }
        }
        ClientMessage::CommentStory { story_id, text } => {
            let author = {
                let session = session_state_lock.lock().await;
                session.navigator.session().current_user.name.clone()
            };
            match app_state
                .content
                .comment_on_story(story_id, &author, &text)
                .await
            {
                Ok(story) => {
                    send(
                        ws_sender,
                        &ServerMessage::Ack {
                            message: format!("Comment posted on \"{}\".", story.title),
                        },
                    )
                    .await;
                    refresh_if_current(app_state, session_state_lock, ws_sender, View::Stories)
                        .await;
                }
                Err(e) => send_port_error(ws_sender, e).await,
            }
        }
        ClientMessage::ShareStory { story_id } => {
            // Purely simulated: acknowledge locally, mutate nothing.
            info!("Simulated share for story {}.", story_id);
            send(
                ws_sender,
                &ServerMessage::Ack {
                    message: "Share link copied to clipboard.".to_string(),
                },
            )
            .await;
        }
        ClientMessage::DraftMessage { alumni_id, notes } => {
            spawn_assistant(app_state, session_state_lock, ws_sender, alumni_id, Some(notes))
                .await;
        }
        ClientMessage::SuggestTopics { alumni_id } => {
            spawn_assistant(app_state, session_state_lock, ws_sender, alumni_id, None).await;
        }
    }
}

/// Sends the updated session plus the panel payload for its current view.
async fn push_view(
    app_state: &Arc<AppState>,
    session: &SessionState,
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
) {
    let snapshot = session.navigator.session().clone();
    send(ws_sender, &ServerMessage::SessionUpdated { session: snapshot.clone() }).await;
    match build_panel(app_state, &snapshot, snapshot.current_view).await {
        Ok(panel) => {
            send(
                ws_sender,
                &ServerMessage::ViewChanged {
                    view: snapshot.current_view,
                    panel,
                },
            )
            .await;
        }
        Err(e) => {
            error!("Failed to build panel: {:?}", e);
            send(
                ws_sender,
                &ServerMessage::Error {
                    message: "Failed to load the requested view.".to_string(),
                },
            )
            .await;
        }
    }
}

/// Re-sends the panel for `view` if it is what the session is looking at,
/// so simulated actions are reflected immediately.
async fn refresh_if_current(
    app_state: &Arc<AppState>,
    session_state_lock: &Arc<Mutex<SessionState>>,
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
    view: View,
) {
    let session = session_state_lock.lock().await;
    if session.navigator.session().current_view == view {
        push_view(app_state, &*session, ws_sender).await;
    }
}

/// Resolves the recipient, replaces the assistant token, and spawns the
/// draft or topics worker. A newer request cancels the previous one.
async fn spawn_assistant(
    app_state: &Arc<AppState>,
    session_state_lock: &Arc<Mutex<SessionState>>,
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
    alumni_id: Uuid,
    notes: Option<String>,
) {
    let recipient = match app_state.content.get_alumni(alumni_id).await {
        Ok(alum) => alum,
        Err(e) => {
            send_port_error(ws_sender, e).await;
            return;
        }
    };

    let (token, sender_profile) = {
        let mut session = session_state_lock.lock().await;
        let token = session.reset_assistant_token();
        (token, session.navigator.session().current_user.clone())
    };

    send(ws_sender, &ServerMessage::AssistantPending).await;

    let app_state = app_state.clone();
    let ws_sender = ws_sender.clone();
    tokio::spawn(async move {
        let result = match notes {
            Some(notes) => {
                draft_process(app_state, ws_sender, token, recipient, sender_profile, notes).await
            }
            None => topics_process(app_state, ws_sender, token, recipient).await,
        };
        if let Err(e) = result {
            error!("Assistant process failed: {:?}", e);
        }
    });
}

async fn send_port_error(
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
    e: alumni_connect_core::ports::PortError,
) {
    warn!("Community action failed: {:?}", e);
    send(
        ws_sender,
        &ServerMessage::Error {
            message: e.to_string(),
        },
    )
    .await;
}

async fn send(ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>, msg: &ServerMessage) {
    let json = serde_json::to_string(msg).unwrap();
    if ws_sender
        .lock()
        .await
        .send(Message::Text(json.into()))
        .await
        .is_err()
    {
        warn!("Failed to send message to client.");
    }
}
