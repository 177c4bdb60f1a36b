use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GENERATIVE_BASE_URL, DEFAULT_GENERATIVE_MODEL,
    DEFAULT_GENERATIVE_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Settings for the generative-language upstream (the /api/chat relay target)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerativeConfig {
    pub base_url: String,
    pub model: String,
    /// API key passed as a query-string parameter on each request.
    /// Missing key is logged at startup; requests fail until one is set.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_GENERATIVE_BASE_URL),
            model: String::from(DEFAULT_GENERATIVE_MODEL),
            api_key: None,
            timeout_secs: DEFAULT_GENERATIVE_TIMEOUT_SECS,
        }
    }
}

impl GenerativeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::upstream("generative.base_url must not be empty"));
        }

        if self.model.is_empty() {
            return Err(ConfigError::upstream("generative.model must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::upstream(
                "generative.timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
