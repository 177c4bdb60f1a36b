use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LineUserQuery {
    /// Email to resolve; absent or empty resolves to no user
    #[serde(default)]
    pub email: Option<String>,
}
