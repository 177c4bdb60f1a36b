use serde::Deserialize;

/// Inbound platform event batch. Every field is optional so unknown event
/// shapes deserialize to events without a source user and get skipped; the
/// platform expects 200 for every delivery it makes.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub source: Option<EventSource>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventSource {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}
