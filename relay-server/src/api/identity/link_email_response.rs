use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LinkEmailResponse {
    pub ok: bool,

    /// Present only on the soft not-found outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
