use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / - plain-text liveness string (also the front-end ping target)
pub async fn liveness() -> Response {
    (
        StatusCode::OK,
        concat!("relay-server v", env!("CARGO_PKG_VERSION"), " running"),
    )
        .into_response()
}

/// GET /health - store counts and component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "identities": state.identities.identity_count().await,
        "seed_links": state.identities.seed_count(),
        "reminders": {
            "total": state.reminders.len().await,
            "pending": state.reminders.pending_count().await,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
