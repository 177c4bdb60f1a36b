//! Reminder submission and check handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::reminders::check_reminders_response::CheckRemindersResponse;
use crate::api::reminders::create_reminder_request::CreateReminderRequest;
use crate::api::reminders::reminder_ack::ReminderAck;
use crate::checker;
use crate::state::AppState;

use relay_core::Reminder;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use log::info;

/// POST /api/reminder
///
/// Validates required fields before anything is appended; a rejected
/// request leaves the queue untouched.
pub async fn submit_reminder(
    State(state): State<AppState>,
    Json(request): Json<CreateReminderRequest>,
) -> ApiResult<Json<ReminderAck>> {
    let email = require_field(request.email, "email")?;
    let text = require_field(request.text, "text")?;
    let time_iso = require_field(request.time_iso, "timeISO")?;

    let due_at = DateTime::parse_from_rfc3339(&time_iso)
        .map_err(|e| {
            ApiError::validation(format!("timeISO must be RFC 3339: {}", e), Some("timeISO"))
        })?
        .with_timezone(&Utc);

    let line_user_id = request.line_user_id.filter(|id| !id.trim().is_empty());

    let reminder = Reminder::new(email, line_user_id, text, due_at);
    let id = state.reminders.submit(reminder).await;

    info!("Reminder {} queued, due {}", id, due_at);

    Ok(Json(ReminderAck { ok: true }))
}

/// GET /api/check-reminders
///
/// External trigger for the checker; the server never schedules itself.
pub async fn check_reminders(State(state): State<AppState>) -> Json<CheckRemindersResponse> {
    let outcome = checker::run_check(&state, Utc::now()).await;

    Json(CheckRemindersResponse {
        ok: true,
        attempted: outcome.attempted,
        delivered: outcome.delivered,
    })
}

fn require_field(value: Option<String>, name: &str) -> ApiResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::validation(
            format!("{} is required", name),
            Some(name),
        )),
    }
}
