use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MESSAGING_BASE_URL, DEFAULT_MESSAGING_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Settings for the messaging-platform push upstream (reminder delivery)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    pub base_url: String,
    /// Channel access token sent as a bearer header on push requests
    pub channel_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_MESSAGING_BASE_URL),
            channel_token: None,
            timeout_secs: DEFAULT_MESSAGING_TIMEOUT_SECS,
        }
    }
}

impl MessagingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::upstream("messaging.base_url must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::upstream(
                "messaging.timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
