//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::{assistant, panels::build_for_panel, state::AppState};
use alumni_connect_core::dispatch::panel_for_slug;
use alumni_connect_core::domain::Session;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(health_handler, panel_handler, draft_handler),
    components(schemas(HealthResponse, DraftRequest, DraftResponse)),
    tags(
        (name = "Alumni Connect API", description = "API endpoints for the alumni community platform.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
}

/// The request payload for drafting a reconnection message.
#[derive(Deserialize, ToSchema)]
pub struct DraftRequest {
    /// The directory entry of the alum to reconnect with.
    pub alumni_id: Uuid,
    /// Free-form notes steering the draft. May be empty.
    #[serde(default)]
    pub notes: String,
}

/// The response payload carrying the drafted message. Always present:
/// collaborator failures degrade to a fixed fallback, never an error.
#[derive(Serialize, ToSchema)]
pub struct DraftResponse {
    pub text: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Returns the panel payload for a view slug.
///
/// Slugs outside the view registry resolve to the overview panel rather
/// than failing.
#[utoipa::path(
    get,
    path = "/panels/{view}",
    responses(
        (status = 200, description = "The panel payload for the view"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("view" = String, Path, description = "The view slug, e.g. `directory`.")
    )
)]
pub async fn panel_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let panel = panel_for_slug(&view);
    let payload = build_for_panel(&app_state, &Session::guest(), panel)
        .await
        .map_err(|e| {
            error!("Failed to build panel for '{}': {:?}", view, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to build panel".to_string(),
            )
        })?;
    Ok(Json(payload))
}

/// Drafts a reconnection message for a directory entry.
///
/// Mirrors the WebSocket assistant flow, with the same guarantees: the
/// response text is never empty, and collaborator failures or a missing
/// credential degrade to fixed fallback prose.
#[utoipa::path(
    post,
    path = "/assistant/draft",
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Draft created", body = DraftResponse),
        (status = 404, description = "Unknown alumni id")
    )
)]
pub async fn draft_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<DraftRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let recipient = app_state
        .content
        .get_alumni(req.alumni_id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let sender = Session::guest().current_user;
    let text = assistant::draft_with_fallback(
        app_state.drafts.as_ref(),
        &recipient,
        &sender,
        &req.notes,
    )
    .await;

    Ok(Json(DraftResponse { text }))
}
