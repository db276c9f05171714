//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow the host framework drives: provider Configure →
//! resource Configure → Create/Read/Update/Delete, with payloads crossing
//! the codec boundary exactly as they would in production.

use airbyte_cloud_provider::auth::Credentials;
use airbyte_cloud_provider::framework::{
    codec, Operation, ProviderService, Registry, ResourceService, ServiceRequest,
};
use airbyte_cloud_provider::kinds::amplitude::SourceAmplitudeModel;
use airbyte_cloud_provider::kinds::hubspot::SourceHubspotModel;
use airbyte_cloud_provider::kinds::stripe::{
    SourceStripeConfigModel, SourceStripeModel,
};
use airbyte_cloud_provider::provider::{AirbyteProvider, ResourceAdapter};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_config(host: &str) -> ServiceRequest {
    ServiceRequest {
        config_contents: codec::pack(&json!({
            "host": host,
            "authorization": "tok",
        }))
        .unwrap(),
        ..ServiceRequest::default()
    }
}

/// Run the provider Configure and hand its republished credentials to a
/// fresh adapter, the way the host wires resources up.
fn adapter_via_provider<M>(host: &str) -> ResourceAdapter<M>
where
    M: airbyte_cloud_provider::provider::ResourceModel + 'static,
{
    let mut provider = AirbyteProvider::new();
    let response = provider.configure(&provider_config(host)).unwrap();

    let mut adapter = ResourceAdapter::<M>::new();
    adapter
        .configure(&ServiceRequest {
            resource_data: response.resource_data,
            ..ServiceRequest::default()
        })
        .unwrap();
    adapter
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_stripe_create_merges_server_assigned_id_into_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sources"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_partial_json(json!({
            "name": "s1",
            "workspaceId": "w1",
            "configuration": {
                "sourceType": "stripe",
                "start_date": "2024-01-01",
                "client_secret": "sk",
                "account_id": "acct_1"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceId": "src_123",
            "name": "s1",
            "workspaceId": "w1",
            "sourceType": "stripe"
        })))
        .mount(&server)
        .await;

    let adapter = adapter_via_provider::<SourceStripeModel>(&server.uri());

    let plan = SourceStripeModel {
        name: "s1".into(),
        source_id: String::new(),
        workspace_id: "w1".into(),
        configuration: SourceStripeConfigModel {
            source_type: "stripe".into(),
            start_date: "2024-01-01".into(),
            lookback_window_days: None,
            slice_range: None,
            client_secret: "sk".into(),
            account_id: "acct_1".into(),
        },
    };

    let response = adapter
        .create(&ServiceRequest {
            plan_contents: codec::pack(&plan).unwrap(),
            ..ServiceRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(response.state_id, "src_123");
    assert!(!response.state_last_updated.is_empty());

    let state: SourceStripeModel = codec::unpack(&response.state_contents).unwrap();
    assert_eq!(state.source_id, "src_123");
    // Every submitted field survives unchanged.
    assert_eq!(state.name, "s1");
    assert_eq!(state.workspace_id, "w1");
    assert_eq!(state.configuration, plan.configuration);
}

#[tokio::test]
async fn test_create_surfaces_decoded_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sources"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid start date at [Source: (body)]",
            "exceptionClassName": "ValueInstantiationException"
        })))
        .mount(&server)
        .await;

    let adapter = adapter_via_provider::<SourceStripeModel>(&server.uri());
    let err = adapter
        .create(&ServiceRequest {
            plan_contents: codec::pack(&SourceStripeModel::default()).unwrap(),
            ..ServiceRequest::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid start date");
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_read_refreshes_top_level_fields_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sources/src_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceId": "src_123",
            "name": "renamed upstream",
            "workspaceId": "w1"
        })))
        .mount(&server)
        .await;

    let adapter = adapter_via_provider::<SourceStripeModel>(&server.uri());

    let prior = SourceStripeModel {
        name: "s1".into(),
        source_id: "src_123".into(),
        workspace_id: "w1".into(),
        configuration: SourceStripeConfigModel {
            client_secret: "sk".into(),
            ..SourceStripeConfigModel::default()
        },
    };

    let response = adapter
        .read(&ServiceRequest {
            state_id: "src_123".into(),
            state_contents: codec::pack(&prior).unwrap(),
            ..ServiceRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(response.state_id, "src_123");
    let state: SourceStripeModel = codec::unpack(&response.state_contents).unwrap();
    assert_eq!(state.name, "renamed upstream");
    // Reads return no configuration; the prior block is retained.
    assert_eq!(state.configuration.client_secret, "sk");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_amplitude_update_puts_then_rereads() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/sources/src_9"))
        .and(body_partial_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceId": "src_9",
            "name": "renamed",
            "workspaceId": "w1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/sources/src_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceId": "src_9",
            "name": "renamed",
            "workspaceId": "w1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_via_provider::<SourceAmplitudeModel>(&server.uri());

    let plan = SourceAmplitudeModel {
        name: "renamed".into(),
        source_id: "src_9".into(),
        workspace_id: "w1".into(),
        ..SourceAmplitudeModel::default()
    };

    let response = adapter
        .update(&ServiceRequest {
            plan_id: "src_9".into(),
            plan_contents: codec::pack(&plan).unwrap(),
            ..ServiceRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(response.state_id, "src_9");
    assert!(!response.state_last_updated.is_empty());
    let state: SourceAmplitudeModel = codec::unpack(&response.state_contents).unwrap();
    assert_eq!(state.name, "renamed");
}

#[tokio::test]
async fn test_hubspot_update_refreshes_without_writing() {
    let server = MockServer::start().await;

    // The capability-checked update GETs once, the adapter re-read GETs
    // again; no PUT ever goes out.
    Mock::given(method("GET"))
        .and(path("/v1/sources/src_7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceId": "src_7",
            "name": "remote name",
            "workspaceId": "w1"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let adapter = adapter_via_provider::<SourceHubspotModel>(&server.uri());

    let plan = SourceHubspotModel {
        name: "local rename".into(),
        source_id: "src_7".into(),
        workspace_id: "w1".into(),
        ..SourceHubspotModel::default()
    };

    let response = adapter
        .update(&ServiceRequest {
            plan_id: "src_7".into(),
            plan_contents: codec::pack(&plan).unwrap(),
            ..ServiceRequest::default()
        })
        .await
        .unwrap();

    let state: SourceHubspotModel = codec::unpack(&response.state_contents).unwrap();
    assert_eq!(state.name, "remote name");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_not_found_surfaces_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/sources/src_gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let adapter = adapter_via_provider::<SourceStripeModel>(&server.uri());
    let err = adapter
        .delete(&ServiceRequest {
            state_id: "src_gone".into(),
            ..ServiceRequest::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "not found");
}

// ============================================================================
// Registry dispatch
// ============================================================================

#[tokio::test]
async fn test_registry_drives_full_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sourceId": "src_123",
            "name": "s1",
            "workspaceId": "w1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/sources/src_123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut registry = Registry::new(AirbyteProvider::new()).unwrap();
    registry
        .register(ResourceAdapter::<SourceStripeModel>::new())
        .unwrap();
    assert_eq!(registry.resource_type_names(), vec!["airbyte_source_stripe"]);

    // Provider Configure republishes credentials.
    let configured = registry
        .dispatch("provider", Operation::Configure, &provider_config(&server.uri()))
        .await;
    assert!(configured.error.is_none());
    let creds: Credentials = codec::unpack(&configured.resource_data).unwrap();
    assert_eq!(creds.authorization, "tok");

    // Resource Configure with the republished payload.
    let response = registry
        .dispatch(
            "airbyte_source_stripe",
            Operation::Configure,
            &ServiceRequest {
                resource_data: configured.resource_data,
                ..ServiceRequest::default()
            },
        )
        .await;
    assert!(response.error.is_none());

    // Create.
    let plan = SourceStripeModel {
        name: "s1".into(),
        workspace_id: "w1".into(),
        ..SourceStripeModel::default()
    };
    let created = registry
        .dispatch(
            "airbyte_source_stripe",
            Operation::Create,
            &ServiceRequest {
                plan_contents: codec::pack(&plan).unwrap(),
                ..ServiceRequest::default()
            },
        )
        .await;
    assert!(created.error.is_none());
    assert_eq!(created.state_id, "src_123");

    // Delete; the host then drops its state record.
    let deleted = registry
        .dispatch(
            "airbyte_source_stripe",
            Operation::Delete,
            &ServiceRequest {
                state_id: created.state_id,
                ..ServiceRequest::default()
            },
        )
        .await;
    assert!(deleted.error.is_none());
}
