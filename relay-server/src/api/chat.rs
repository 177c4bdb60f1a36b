//! Generative-language relay handler
//!
//! Verbatim pass-through: whatever JSON the front-end sends goes upstream
//! unchanged, and the upstream body comes back unchanged. Upstream errors
//! surface as 500 with the upstream error payload under "error".

use crate::api::error::Result as ApiResult;
use crate::state::AppState;

use axum::{Json, extract::State};
use serde_json::Value;

/// POST /api/chat
pub async fn relay_chat(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Value>> {
    let body = state.generative.generate(&payload).await?;

    Ok(Json(body))
}
