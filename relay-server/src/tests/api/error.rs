use crate::api::error::ApiError;
use crate::upstream::error::UpstreamError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

#[tokio::test]
async fn test_validation_error_returns_400_with_message() {
    let error = ApiError::validation("timeISO is required", Some("timeISO"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "timeISO is required");
}

#[tokio::test]
async fn test_upstream_error_returns_500_with_payload_verbatim() {
    let error = ApiError::Upstream {
        payload: json!({ "message": "quota exceeded", "code": 429 }),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["message"], "quota exceeded");
    assert_eq!(json["error"]["code"], 429);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::internal("something broke");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "something broke");
}

#[test]
fn test_upstream_status_error_extracts_error_field() {
    let upstream = UpstreamError::Status {
        service: "generative API",
        status: reqwest::StatusCode::BAD_REQUEST,
        body: json!({ "error": { "message": "invalid model" } }),
    };

    let api_err: ApiError = upstream.into();

    match api_err {
        ApiError::Upstream { payload, .. } => {
            assert_eq!(payload["message"], "invalid model");
        }
        _ => panic!("Expected Upstream error"),
    }
}

#[test]
fn test_upstream_status_error_without_error_field_keeps_body() {
    let upstream = UpstreamError::Status {
        service: "generative API",
        status: reqwest::StatusCode::BAD_GATEWAY,
        body: json!("upstream fell over"),
    };

    let api_err: ApiError = upstream.into();

    match api_err {
        ApiError::Upstream { payload, .. } => {
            assert_eq!(payload, json!("upstream fell over"));
        }
        _ => panic!("Expected Upstream error"),
    }
}

#[test]
fn test_missing_credential_becomes_message_string() {
    let upstream = UpstreamError::MissingCredential {
        service: "generative API",
        env_hint: "RELAY_GENERATIVE_API_KEY",
    };

    let api_err: ApiError = upstream.into();

    match api_err {
        ApiError::Upstream { payload, .. } => {
            let message = payload.as_str().unwrap();
            assert!(message.contains("RELAY_GENERATIVE_API_KEY"));
        }
        _ => panic!("Expected Upstream error"),
    }
}
