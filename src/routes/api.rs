//! JSON API handlers.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use portal::config::PortalConfig;

use crate::state::AppState;

/// `GET /api/config`: identity provider and game host settings for clients
/// that are not served by the portal shell (e.g. the game client).
pub async fn portal_config(State(state): State<AppState>) -> Json<PortalConfig> {
    Json(state.portal().clone())
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
