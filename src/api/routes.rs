//! Bridge route configuration.

use crate::api::handlers::message_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Bridge API routes.
///
/// # Endpoints
///
/// - `POST /message` - Dispatch a typed message to the client core
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/message", post(message_handler))
}
