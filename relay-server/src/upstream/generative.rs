//! Client for the generative-language API behind POST /api/chat.
//!
//! Pure pass-through: the inbound JSON goes upstream verbatim and the
//! upstream body comes back verbatim, success or not.

use crate::error::{Result as ServerErrorResult, ServerError};
use crate::upstream::error::UpstreamError;

use std::time::Duration;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

const SERVICE: &str = "generative API";

#[derive(Clone)]
pub struct GenerativeClient {
    http: ReqwestClient,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GenerativeClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> ServerErrorResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::HttpClient { source: e })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &relay_config::GenerativeConfig) -> ServerErrorResult<Self> {
        Self::new(
            &config.base_url,
            &config.model,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Forward a generation request and return the upstream body verbatim.
    pub async fn generate(&self, payload: &Value) -> Result<Value, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential {
                service: SERVICE,
                env_hint: "RELAY_GENERATIVE_API_KEY",
            })?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                service: SERVICE,
                source: e,
            })?;

        let status = response.status();
        debug!("{} responded {}", SERVICE, status);

        // The upstream error body is JSON too and callers want it verbatim
        let body: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::Transport {
                service: SERVICE,
                source: e,
            })?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: SERVICE,
                status,
                body,
            });
        }

        Ok(body)
    }
}
