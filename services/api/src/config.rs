//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;

/// The message returned for every assistant call when no API credential is
/// configured. Overridable via `ASSISTANT_OFFLINE_MESSAGE`.
const DEFAULT_OFFLINE_MESSAGE: &str =
    "The reconnection assistant is not configured on this server yet. \
     You can still write your message by hand!";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Absent means the assistant runs in offline mode; no outbound calls
    /// are ever attempted in that case.
    pub openai_api_key: Option<String>,
    pub draft_model: String,
    pub offline_message: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Server Settings ---
        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load API Key (as optional) ---
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();

        // --- Load Assistant Settings ---
        let draft_model =
            std::env::var("DRAFT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let offline_message = std::env::var("ASSISTANT_OFFLINE_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_OFFLINE_MESSAGE.to_string());

        Ok(Self {
            bind_address,
            log_level,
            openai_api_key,
            draft_model,
            offline_message,
        })
    }
}
