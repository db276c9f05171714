//! Google Analytics (Universal Analytics) source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Google Analytics source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleAnalytics {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceGoogleAnalyticsConfig,
}

/// Google Analytics connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleAnalyticsConfig {
    /// Connector discriminator, always `google-analytics-v4`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Analytics view id
    #[serde(skip_serializing_if = "String::is_empty")]
    pub view_id: String,
    /// Custom reports definition (JSON string)
    pub custom_reports: String,
    /// Days per request window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_in_days: Option<i64>,
    /// Service account credentials block
    pub credentials: SourceGoogleAnalyticsCredentials,
}

/// Google Analytics credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleAnalyticsCredentials {
    /// Credential strategy, always `Service`
    pub auth_type: String,
    /// Service account key (JSON string)
    pub credentials_json: String,
}

impl ResourceKind for SourceGoogleAnalytics {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_google_analytics_v4";
    const UPDATE: UpdateSupport = UpdateSupport::Put;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_google_analytics_v4`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleAnalyticsModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceGoogleAnalyticsConfigModel,
}

/// Host-facing Google Analytics configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleAnalyticsConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Analytics view id
    pub view_id: String,
    /// Custom reports definition (JSON string)
    pub custom_reports: String,
    /// Days per request window
    pub window_in_days: Option<i64>,
    /// Service account credentials block
    pub credentials: SourceGoogleAnalyticsCredentialsModel,
}

/// Host-facing Google Analytics credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleAnalyticsCredentialsModel {
    /// Credential strategy
    pub auth_type: String,
    /// Service account key (JSON string)
    pub credentials_json: String,
}

impl From<SourceGoogleAnalyticsModel> for SourceGoogleAnalytics {
    fn from(model: SourceGoogleAnalyticsModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceGoogleAnalyticsConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                view_id: model.configuration.view_id,
                custom_reports: model.configuration.custom_reports,
                window_in_days: model.configuration.window_in_days,
                credentials: SourceGoogleAnalyticsCredentials {
                    auth_type: model.configuration.credentials.auth_type,
                    credentials_json: model.configuration.credentials.credentials_json,
                },
            },
        }
    }
}

impl ResourceModel for SourceGoogleAnalyticsModel {
    type Api = SourceGoogleAnalytics;

    const TYPE_SUFFIX: &'static str = "source_google_analytics_v4";

    fn schema() -> Schema {
        Schema::new("Source google analytics resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute("view_id", Attribute::string("View ID").optional())
                    .attribute(
                        "custom_reports",
                        Attribute::string("Custom Reports").required(),
                    )
                    .attribute("window_in_days", Attribute::int("Window In Days").optional())
                    .attribute(
                        "credentials",
                        Attribute::map("Credentials")
                            .required()
                            .attribute("auth_type", Attribute::string("Auth Type").required())
                            .attribute(
                                "credentials_json",
                                Attribute::string("Credentials JSON")
                                    .required()
                                    .sensitive(),
                            ),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceGoogleAnalytics) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
