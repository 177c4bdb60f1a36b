use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    /// Contact email (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Direct push recipient; resolved from the email at delivery time
    /// when absent
    #[serde(rename = "lineUserId", default)]
    pub line_user_id: Option<String>,

    /// Message to deliver (required)
    #[serde(default)]
    pub text: Option<String>,

    /// Due timestamp, RFC 3339 (required)
    #[serde(rename = "timeISO", default)]
    pub time_iso: Option<String>,
}
