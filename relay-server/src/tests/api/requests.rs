//! Deserialization tests for the wire shapes the front-end and the
//! messaging platform actually send.

use crate::api::identity::webhook_event::WebhookPayload;
use crate::api::reminders::create_reminder_request::CreateReminderRequest;

#[test]
fn webhook_batch_parses_platform_shape() {
    let payload: WebhookPayload = serde_json::from_str(
        r#"{
            "destination": "Uxxx",
            "events": [
                {
                    "type": "message",
                    "timestamp": 1700000000000,
                    "source": { "type": "user", "userId": "U1" },
                    "message": { "type": "text", "text": "hi" }
                },
                { "type": "unfollow", "source": { "type": "user" } }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(payload.events.len(), 2);
    assert_eq!(
        payload.events[0]
            .source
            .as_ref()
            .and_then(|s| s.user_id.as_deref()),
        Some("U1")
    );
    assert_eq!(
        payload.events[1]
            .source
            .as_ref()
            .and_then(|s| s.user_id.as_deref()),
        None
    );
}

#[test]
fn empty_webhook_body_parses_to_no_events() {
    let payload: WebhookPayload = serde_json::from_str("{}").unwrap();

    assert!(payload.events.is_empty());
}

#[test]
fn reminder_request_accepts_camel_case_fields() {
    let request: CreateReminderRequest = serde_json::from_str(
        r#"{
            "email": "a@x.com",
            "lineUserId": "U1",
            "text": "call mom",
            "timeISO": "2020-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(request.email.as_deref(), Some("a@x.com"));
    assert_eq!(request.line_user_id.as_deref(), Some("U1"));
    assert_eq!(request.time_iso.as_deref(), Some("2020-01-01T00:00:00Z"));
}

#[test]
fn reminder_request_tolerates_missing_fields() {
    // Presence is enforced by the handler, not the deserializer, so the
    // response can name the missing field
    let request: CreateReminderRequest =
        serde_json::from_str(r#"{ "email": "a@x.com" }"#).unwrap();

    assert!(request.text.is_none());
    assert!(request.time_iso.is_none());
}
