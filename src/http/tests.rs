//! Tests for the HTTP layer

use super::*;
use crate::error::Error;
use reqwest::Method;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_api_client_config_default() {
    let config = ApiClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert!(config.user_agent.starts_with("airbyte-cloud-provider/"));
}

#[test]
fn test_api_client_config_builder() {
    let config = ApiClientConfig::builder()
        .timeout(Duration::from_secs(3))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_fixed_headers_and_normalized_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sources/src_1"))
        .and(header("Accept", "*/*"))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "Bearer raw-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sourceId": "src_1"})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), "raw-token").unwrap();
    let response = client
        .request(Method::GET, "/v1/sources/src_1", None)
        .await
        .unwrap();

    assert!(response.is_success());
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["sourceId"], "src_1");
}

#[tokio::test]
async fn test_prefixed_credential_sent_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sources/src_1"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), "Bearer tok").unwrap();
    let response = client
        .request(Method::GET, "/v1/sources/src_1", None)
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_no_authorization_header_when_credential_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), "").unwrap();
    let response = client.request(Method::GET, "/v1/health", None).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_caller_headers_override_fixed_ones() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sources"))
        .and(header("Content-Type", "application/vnd.custom+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), "tok").unwrap();
    let mut extra = HashMap::new();
    extra.insert(
        "Content-Type".to_string(),
        "application/vnd.custom+json".to_string(),
    );

    let response = client
        .request_with_headers(Method::POST, "/v1/sources", Some(b"{}".to_vec()), &extra)
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_non_2xx_is_returned_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sources/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), "tok").unwrap();
    let response = client
        .request(Method::GET, "/v1/sources/missing", None)
        .await
        .unwrap();

    // Status branching belongs to the caller; the wrapper only buffers.
    assert_eq!(response.status.as_u16(), 404);
    assert_eq!(decode_api_error(&response.body).unwrap(), "not found");
}

#[tokio::test]
async fn test_transport_failure_is_http_error() {
    // Nothing listens here.
    let client = ApiClient::new("http://127.0.0.1:1", "tok").unwrap();
    let result = client.request(Method::GET, "/v1/sources", None).await;

    match result {
        Err(err) => assert!(err.is_transport(), "expected transport error, got {err}"),
        Ok(_) => panic!("expected a connection failure"),
    }
}

// ============================================================================
// Error envelope
// ============================================================================

#[test]
fn test_envelope_truncates_at_stack_marker() {
    let body = br#"{"message":"Bad value at [Source: foo.json]","exceptionClassName":"X"}"#;
    assert_eq!(decode_api_error(body).unwrap(), "Bad value");
}

#[test]
fn test_envelope_trims_whitespace() {
    let body = br#"{"message":"  spaced out  "}"#;
    assert_eq!(decode_api_error(body).unwrap(), "spaced out");
}

#[test]
fn test_envelope_without_marker_passes_through() {
    let body = br#"{"message":"quota exceeded","exceptionStack":["a","b"]}"#;
    assert_eq!(decode_api_error(body).unwrap(), "quota exceeded");
}

#[test]
fn test_envelope_with_validation_errors() {
    let body = br#"{
        "message": "The request body could not be fully parsed",
        "validationErrors": [
            {"propertyPath": "configuration.start_date", "invalidValue": "yesterday", "message": "must be a date"}
        ]
    }"#;
    let envelope: ApiErrorBody = serde_json::from_slice(body).unwrap();
    assert_eq!(envelope.validation_errors.len(), 1);
    assert_eq!(
        envelope.validation_errors[0].property_path,
        "configuration.start_date"
    );
}

#[test]
fn test_non_json_body_yields_fallback() {
    let err = decode_api_error(b"<html>502 Bad Gateway</html>").unwrap_err();
    match err {
        Error::Decode { message } => assert_eq!(message, FALLBACK_MESSAGE),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn test_api_error_preserves_status() {
    let err = api_error(409, br#"{"message":"already exists"}"#);
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "already exists");
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}
