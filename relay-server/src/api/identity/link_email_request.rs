use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LinkEmailRequest {
    /// Email to attach to the most-recently-seen unlinked identity (required)
    #[serde(default)]
    pub email: Option<String>,
}
