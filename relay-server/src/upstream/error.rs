//! Errors from the external relay targets.
//!
//! Both clients return these explicitly so callers (the chat handler, the
//! reminder checker) can decide what to do with a failure instead of it
//! disappearing into a log line.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status; body kept verbatim
    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: Value,
    },

    /// Request never produced a usable response (connect, timeout, decode)
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Credential was never configured; the request is not attempted
    #[error("{service} credential missing (set {env_hint})")]
    MissingCredential {
        service: &'static str,
        env_hint: &'static str,
    },
}
