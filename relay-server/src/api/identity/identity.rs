//! Identity link handlers
//!
//! The webhook keeps the store current, the link endpoint attaches an email
//! to the most-recently-seen unlinked identity, and the lookup endpoint
//! resolves email -> platform user id (live store first, seed file second).

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::identity::line_user_query::LineUserQuery;
use crate::api::identity::line_user_response::LineUserResponse;
use crate::api::identity::link_email_request::LinkEmailRequest;
use crate::api::identity::link_email_response::LinkEmailResponse;
use crate::api::identity::webhook_event::WebhookPayload;
use crate::state::AppState;

use relay_core::LinkOutcome;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use log::{debug, info};

/// GET /api/line-user?email=
pub async fn lookup_line_user(
    State(state): State<AppState>,
    Query(query): Query<LineUserQuery>,
) -> Json<LineUserResponse> {
    let line_user_id = match query.email.as_deref() {
        Some(email) if !email.is_empty() => state.identities.lookup_by_email(email).await,
        _ => None,
    };

    Json(LineUserResponse { line_user_id })
}

/// POST /api/line-webhook
///
/// Records every event that carries a source user id; always answers 200
/// so the platform does not retry or disable the webhook.
pub async fn receive_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> StatusCode {
    for event in payload.events {
        let Some(user_id) = event.source.and_then(|source| source.user_id) else {
            debug!(
                "Webhook event without source user (type: {})",
                event.event_type.as_deref().unwrap_or("unknown")
            );
            continue;
        };

        state.identities.record_inbound_event(&user_id).await;
    }

    StatusCode::OK
}

/// POST /api/link-line-email
///
/// Soft failure: no unlinked identity is `{ok: false}` with 200, not an
/// error status.
pub async fn link_line_email(
    State(state): State<AppState>,
    Json(request): Json<LinkEmailRequest>,
) -> ApiResult<Json<LinkEmailResponse>> {
    let email = match request.email.as_deref() {
        Some(email) if !email.trim().is_empty() => email.trim(),
        _ => return Err(ApiError::validation("email is required", Some("email"))),
    };

    match state.identities.link_by_email(email).await {
        LinkOutcome::Linked { line_user_id } => {
            info!("Linked {} to platform user {}", email, line_user_id);
            Ok(Json(LinkEmailResponse {
                ok: true,
                message: None,
            }))
        }
        LinkOutcome::NoUnlinkedIdentity => Ok(Json(LinkEmailResponse {
            ok: false,
            message: Some(String::from(
                "No unlinked platform user found; open the bot chat first",
            )),
        })),
    }
}
