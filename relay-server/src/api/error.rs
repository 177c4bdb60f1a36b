//! REST API error types
//!
//! Error responses are flat JSON bodies of the form `{"error": ...}` -
//! a message string for local failures, or the upstream error payload
//! verbatim when a relay target rejected the request.

use crate::upstream::error::UpstreamError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Relay target failed; payload carried through verbatim (500)
    #[error("Upstream error: {payload} {location}")]
    Upstream {
        payload: Value,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, error) = match self {
            ApiError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, Value::String(message))
            }
            ApiError::Upstream { payload, .. } => (StatusCode::INTERNAL_SERVER_ERROR, payload),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::String(message),
            ),
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Convert upstream client errors to API errors.
///
/// A status error carries the upstream `error` field when present (the
/// whole body otherwise); transport and credential failures become plain
/// message strings.
impl From<UpstreamError> for ApiError {
    #[track_caller]
    fn from(e: UpstreamError) -> Self {
        let payload = match e {
            UpstreamError::Status { body, .. } => match body.get("error") {
                Some(error) => error.clone(),
                None => body,
            },
            other => Value::String(other.to_string()),
        };

        ApiError::Upstream {
            payload,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
