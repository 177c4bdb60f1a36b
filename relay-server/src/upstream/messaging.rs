//! Client for the messaging-platform push API (reminder delivery).

use crate::error::{Result as ServerErrorResult, ServerError};
use crate::upstream::error::UpstreamError;

use std::time::Duration;

use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde_json::{Value, json};

const SERVICE: &str = "messaging push API";

#[derive(Clone)]
pub struct MessagingClient {
    http: ReqwestClient,
    base_url: String,
    channel_token: Option<String>,
}

impl MessagingClient {
    pub fn new(
        base_url: &str,
        channel_token: Option<String>,
        timeout: Duration,
    ) -> ServerErrorResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::HttpClient { source: e })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            channel_token,
        })
    }

    pub fn from_config(config: &relay_config::MessagingConfig) -> ServerErrorResult<Self> {
        Self::new(
            &config.base_url,
            config.channel_token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Push a text message to one recipient.
    ///
    /// Success and failure both surface in the return value so the checker
    /// can mark a reminder sent only after the push was accepted.
    pub async fn push_text(&self, to: &str, text: &str) -> Result<(), UpstreamError> {
        let token = self
            .channel_token
            .as_deref()
            .ok_or(UpstreamError::MissingCredential {
                service: SERVICE,
                env_hint: "RELAY_MESSAGING_CHANNEL_TOKEN",
            })?;

        let url = format!("{}/v2/bot/message/push", self.base_url);
        let body = json!({
            "to": to,
            "messages": [{ "type": "text", "text": text }],
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                service: SERVICE,
                source: e,
            })?;

        let status = response.status();

        if status.is_success() {
            info!("Push to {} accepted ({})", to, status);
            return Ok(());
        }

        let error_body = response
            .json::<Value>()
            .await
            .unwrap_or(Value::Null);
        warn!("Push to {} rejected ({}): {}", to, status, error_body);

        Err(UpstreamError::Status {
            service: SERVICE,
            status,
            body: error_body,
        })
    }
}
