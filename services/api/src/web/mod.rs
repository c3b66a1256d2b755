pub mod assistant;
pub mod draft_task;
pub mod panels;
pub mod protocol;
pub mod rest;
pub mod state;
pub mod ws_handler;

// Re-export the main WebSocket handler to make it easily accessible
// to the binary that will build the web server router.
pub use rest::{draft_handler, health_handler, panel_handler};
pub use ws_handler::ws_handler;
