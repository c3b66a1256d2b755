//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{DisabledDraftAdapter, InMemoryContentStore, OpenAiDraftAdapter},
    config::Config,
    error::ApiError,
    web::{draft_handler, health_handler, panel_handler, rest::ApiDoc, state::AppState, ws_handler},
};
use alumni_connect_core::ports::MessageDraftService;
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Seed the Content Store ---
    let content = Arc::new(InMemoryContentStore::seeded());
    info!("In-memory content store seeded.");

    // --- 3. Initialize the Assistant Adapter ---
    // With no credential configured the disabled adapter is wired instead,
    // and no outbound call is ever attempted.
    let drafts: Arc<dyn MessageDraftService> = match &config.openai_api_key {
        Some(api_key) => {
            let openai_config = OpenAIConfig::new().with_api_key(api_key);
            let openai_client = Client::with_config(openai_config);
            info!("Assistant enabled with model '{}'.", config.draft_model);
            Arc::new(OpenAiDraftAdapter::new(
                openai_client,
                config.draft_model.clone(),
            ))
        }
        None => {
            warn!("OPENAI_API_KEY not set; the assistant will run in offline mode.");
            Arc::new(DisabledDraftAdapter::new(config.offline_message.clone()))
        }
    };

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        content,
        drafts,
        config: config.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // --- 5. Create the Web Router ---
    let api_router = Router::new()
        .route("/health", get(health_handler))
        .route("/panels/{view}", get(panel_handler))
        .route("/assistant/draft", post(draft_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
