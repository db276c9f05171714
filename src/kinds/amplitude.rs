//! Amplitude source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for an Amplitude source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAmplitude {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceAmplitudeConfig,
}

/// Amplitude connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAmplitudeConfig {
    /// Connector discriminator, always `amplitude`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Amplitude data region
    pub data_region: String,
    /// Hours of data requested per window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_time_range: Option<i64>,
    /// Amplitude API key
    pub api_key: String,
    /// Amplitude secret key
    pub secret_key: String,
}

impl ResourceKind for SourceAmplitude {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_amplitude";
    const UPDATE: UpdateSupport = UpdateSupport::Put;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_amplitude`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAmplitudeModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceAmplitudeConfigModel,
}

/// Host-facing Amplitude configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAmplitudeConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Amplitude data region
    pub data_region: String,
    /// Hours of data requested per window
    pub request_time_range: Option<i64>,
    /// Amplitude API key
    pub api_key: String,
    /// Amplitude secret key
    pub secret_key: String,
}

impl From<SourceAmplitudeModel> for SourceAmplitude {
    fn from(model: SourceAmplitudeModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceAmplitudeConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                data_region: model.configuration.data_region,
                request_time_range: model.configuration.request_time_range,
                api_key: model.configuration.api_key,
                secret_key: model.configuration.secret_key,
            },
        }
    }
}

impl ResourceModel for SourceAmplitudeModel {
    type Api = SourceAmplitude;

    const TYPE_SUFFIX: &'static str = "source_amplitude";

    fn schema() -> Schema {
        Schema::new("Source amplitude resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute("data_region", Attribute::string("Data Region").required())
                    .attribute(
                        "request_time_range",
                        Attribute::int("Request Time Range").optional(),
                    )
                    .attribute(
                        "api_key",
                        Attribute::string("API Key").required().sensitive(),
                    )
                    .attribute(
                        "secret_key",
                        Attribute::string("Secret Key").required().sensitive(),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceAmplitude) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
