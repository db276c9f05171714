//! Tests for the generic CRUD client

use super::*;
use crate::http::FALLBACK_MESSAGE;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Minimal probe kind exercising each capability variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Widget {
    name: String,
    #[serde(rename = "widgetId", default, skip_serializing_if = "Option::is_none")]
    widget_id: Option<String>,
}

impl ResourceKind for Widget {
    const ENDPOINT: &'static str = "/v1/widgets";
    const ID_FIELD: &'static str = "widgetId";
    const NAME: &'static str = "widget";
    const UPDATE: UpdateSupport = UpdateSupport::Put;

    fn id(&self) -> Option<&str> {
        self.widget_id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct FrozenWidget {
    name: String,
    #[serde(rename = "widgetId", default, skip_serializing_if = "Option::is_none")]
    widget_id: Option<String>,
}

impl ResourceKind for FrozenWidget {
    const ENDPOINT: &'static str = "/v1/widgets";
    const ID_FIELD: &'static str = "widgetId";
    const NAME: &'static str = "frozen_widget";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.widget_id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ReadOnlyWidget {
    name: String,
    #[serde(rename = "widgetId", default, skip_serializing_if = "Option::is_none")]
    widget_id: Option<String>,
}

impl ResourceKind for ReadOnlyWidget {
    const ENDPOINT: &'static str = "/v1/widgets";
    const ID_FIELD: &'static str = "widgetId";
    const NAME: &'static str = "readonly_widget";
    const UPDATE: UpdateSupport = UpdateSupport::RefreshOnly;

    fn id(&self) -> Option<&str> {
        self.widget_id.as_deref()
    }
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), "tok").unwrap()
}

#[tokio::test]
async fn test_create_returns_decoded_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/widgets"))
        .and(body_json(json!({"name": "w1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "w1", "widgetId": "wid_1"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create(&Widget {
            name: "w1".into(),
            widget_id: None,
        })
        .await
        .unwrap();

    assert_eq!(
        created,
        Widget {
            name: "w1".into(),
            widget_id: Some("wid_1".into()),
        }
    );
}

#[tokio::test]
async fn test_create_surfaces_envelope_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/widgets"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Bad value at [Source: foo.json]",
            "exceptionClassName": "X"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .create(&Widget::default())
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Bad value");
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_with_unparseable_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/widgets"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.create(&Widget::default()).await.unwrap_err();
    assert!(err.to_string().contains(FALLBACK_MESSAGE));
}

#[tokio::test]
async fn test_read_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets/wid_9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "w9", "widgetId": "wid_9"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let widget: Widget = client.read("wid_9").await.unwrap();
    assert_eq!(widget.widget_id.as_deref(), Some("wid_9"));
}

#[tokio::test]
async fn test_update_put_hits_item_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/widgets/wid_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "renamed", "widgetId": "wid_1"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .update(&Widget {
            name: "renamed".into(),
            widget_id: Some("wid_1".into()),
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "renamed");
}

#[tokio::test]
async fn test_update_without_id_fails() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .update(&Widget {
            name: "w".into(),
            widget_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingResourceId { kind: "widget" }));
}

#[tokio::test]
async fn test_update_refresh_only_issues_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets/wid_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "remote", "widgetId": "wid_1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let refreshed = client
        .update(&ReadOnlyWidget {
            name: "local-change".into(),
            widget_id: Some("wid_1".into()),
        })
        .await
        .unwrap();

    // The payload is not applied; remote state wins.
    assert_eq!(refreshed.name, "remote");
}

#[tokio::test]
async fn test_update_unsupported_errors_without_any_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail differently.
    let client = client_for(&server);

    let err = client
        .update(&FrozenWidget {
            name: "w".into(),
            widget_id: Some("wid_1".into()),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UpdateUnsupported {
            kind: "frozen_widget"
        }
    ));
}

#[tokio::test]
async fn test_delete_sends_id_payload() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/widgets/wid_1"))
        .and(body_json(json!({"widgetId": "wid_1"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete::<Widget>("wid_1").await.unwrap();
}

#[tokio::test]
async fn test_delete_decodes_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/widgets/wid_1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete::<Widget>("wid_1").await.unwrap_err();
    assert_eq!(err.to_string(), "not found");
}
