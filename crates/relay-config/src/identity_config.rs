use serde::Deserialize;

/// Settings for the identity link store
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct IdentityConfig {
    /// Optional flat JSON file mapping email -> platform user id.
    /// Loaded read-only at startup as a lookup fallback; never written.
    pub seed_file: Option<String>,
}
