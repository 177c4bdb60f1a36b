use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LineUserResponse {
    /// null when no identity matches the email
    #[serde(rename = "lineUserId")]
    pub line_user_id: Option<String>,
}
