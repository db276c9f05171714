//! Tests for the framework boundary

use super::schema::{Attribute, Schema};
use super::*;
use crate::error::Result;
use pretty_assertions::assert_eq;

// ============================================================================
// Codec
// ============================================================================

#[test]
fn test_codec_round_trip() {
    let creds = crate::auth::Credentials::new("https://api.airbyte.com", "tok");
    let packed = codec::pack(&creds).unwrap();
    assert!(!packed.contains('{'), "payload must be opaque");
    let back: crate::auth::Credentials = codec::unpack(&packed).unwrap();
    assert_eq!(back, creds);
}

#[test]
fn test_codec_rejects_garbage() {
    let err = codec::unpack::<crate::auth::Credentials>("!!not-base64!!").unwrap_err();
    assert!(err.to_string().contains("invalid payload encoding"));
}

// ============================================================================
// Schema
// ============================================================================

#[test]
fn test_schema_serialization_shape() {
    let schema = Schema::new("Test resource")
        .attribute("name", Attribute::string("Name").required())
        .attribute("source_id", Attribute::string("Source ID").computed())
        .attribute(
            "configuration",
            Attribute::map("Connection configuration")
                .required()
                .attribute("api_key", Attribute::string("API Key").required().sensitive())
                .attribute("port", Attribute::int("Port").optional()),
        );

    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(value["attributes"]["name"]["type"], "string");
    assert_eq!(value["attributes"]["name"]["required"], true);
    // Unset flags are omitted from the wire form entirely.
    assert!(value["attributes"]["name"].get("computed").is_none());
    assert_eq!(
        value["attributes"]["configuration"]["attributes"]["api_key"]["sensitive"],
        true
    );
    assert_eq!(
        value["attributes"]["configuration"]["attributes"]["port"]["type"],
        "int"
    );

    let back: Schema = serde_json::from_value(value).unwrap();
    assert_eq!(back, schema);
}

// ============================================================================
// Envelopes
// ============================================================================

#[test]
fn test_service_response_omits_empty_fields() {
    let response = ServiceResponse::type_name("airbyte");
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"type_name":"airbyte"}"#);
}

#[test]
fn test_service_response_from_error() {
    let response = ServiceResponse::from_error("boom");
    assert_eq!(response.error.as_deref(), Some("boom"));
    assert!(response.state_contents.is_empty());
}

// ============================================================================
// Registry dispatch
// ============================================================================

struct FakeProvider;

impl ProviderService for FakeProvider {
    fn metadata(&self) -> Result<ServiceResponse> {
        Ok(ServiceResponse::type_name("fake"))
    }

    fn schema(&self) -> Result<ServiceResponse> {
        Ok(ServiceResponse {
            schema_contents: codec::pack(&Schema::new("fake provider"))?,
            ..ServiceResponse::default()
        })
    }

    fn configure(&mut self, _req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse::default())
    }
}

struct EchoResource;

#[async_trait::async_trait]
impl ResourceService for EchoResource {
    fn metadata(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse::type_name(format!("{}_echo", req.type_name)))
    }

    fn schema(&self) -> Result<ServiceResponse> {
        Ok(ServiceResponse::default())
    }

    fn configure(&mut self, _req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse::default())
    }

    async fn create(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse {
            state_contents: req.plan_contents.clone(),
            ..ServiceResponse::default()
        })
    }

    async fn read(&self, _req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse::default())
    }

    async fn update(&self, _req: &ServiceRequest) -> Result<ServiceResponse> {
        Err(crate::error::Error::UpdateUnsupported { kind: "echo" })
    }

    async fn delete(&self, _req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse::default())
    }
}

#[tokio::test]
async fn test_registry_routes_by_type_name() {
    let mut registry = Registry::new(FakeProvider).unwrap();
    registry.register(EchoResource).unwrap();
    assert_eq!(registry.resource_type_names(), vec!["fake_echo"]);

    let req = ServiceRequest {
        plan_contents: "cGxhbg==".to_string(),
        ..ServiceRequest::default()
    };
    let response = registry.dispatch("fake_echo", Operation::Create, &req).await;
    assert_eq!(response.state_contents, "cGxhbg==");
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_registry_folds_errors_into_envelope() {
    let mut registry = Registry::new(FakeProvider).unwrap();
    registry.register(EchoResource).unwrap();

    let response = registry
        .dispatch("fake_echo", Operation::Update, &ServiceRequest::default())
        .await;
    assert_eq!(
        response.error.as_deref(),
        Some("update resource is not supported for echo")
    );
}

#[tokio::test]
async fn test_registry_rejects_unknown_service() {
    let mut registry = Registry::new(FakeProvider).unwrap();
    let response = registry
        .dispatch("nope", Operation::Read, &ServiceRequest::default())
        .await;
    assert!(response.error.unwrap().contains("unknown service"));
}

#[tokio::test]
async fn test_registry_rejects_duplicate_registration() {
    let mut registry = Registry::new(FakeProvider).unwrap();
    registry.register(EchoResource).unwrap();
    let err = registry.register(EchoResource).unwrap_err();
    assert!(err.to_string().contains("registered twice"));
}

#[tokio::test]
async fn test_provider_rejects_resource_operations() {
    let mut registry = Registry::new(FakeProvider).unwrap();
    let response = registry
        .dispatch("provider", Operation::Create, &ServiceRequest::default())
        .await;
    assert!(response.error.unwrap().contains("not valid for the provider"));
}
