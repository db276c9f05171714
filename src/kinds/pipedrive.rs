//! Pipedrive source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Pipedrive source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePipedrive {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId", skip_serializing_if = "String::is_empty")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourcePipedriveConfig,
}

/// Pipedrive connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePipedriveConfig {
    /// Connector discriminator, always `pipedrive`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub replication_start_date: String,
    /// API token authorization block
    pub authorization: SourcePipedriveAuth,
}

/// Pipedrive authorization block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePipedriveAuth {
    /// Authorization strategy, always `Token`
    pub auth_type: String,
    /// Pipedrive API token
    pub api_token: String,
}

impl ResourceKind for SourcePipedrive {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_pipedrive";
    const UPDATE: UpdateSupport = UpdateSupport::Put;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_pipedrive`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePipedriveModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourcePipedriveConfigModel,
}

/// Host-facing Pipedrive configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePipedriveConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub replication_start_date: String,
    /// API token authorization block
    pub authorization: SourcePipedriveAuthModel,
}

/// Host-facing Pipedrive authorization block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePipedriveAuthModel {
    /// Authorization strategy
    pub auth_type: String,
    /// Pipedrive API token
    pub api_token: String,
}

impl From<SourcePipedriveModel> for SourcePipedrive {
    fn from(model: SourcePipedriveModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourcePipedriveConfig {
                source_type: model.configuration.source_type,
                replication_start_date: model.configuration.replication_start_date,
                authorization: SourcePipedriveAuth {
                    auth_type: model.configuration.authorization.auth_type,
                    api_token: model.configuration.authorization.api_token,
                },
            },
        }
    }
}

impl ResourceModel for SourcePipedriveModel {
    type Api = SourcePipedrive;

    const TYPE_SUFFIX: &'static str = "source_pipedrive";

    fn schema() -> Schema {
        Schema::new("Source pipedrive resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute(
                        "replication_start_date",
                        Attribute::string("Replication Start Date").required(),
                    )
                    .attribute(
                        "authorization",
                        Attribute::map("Authorization")
                            .required()
                            .attribute("auth_type", Attribute::string("Auth Type").required())
                            .attribute(
                                "api_token",
                                Attribute::string("API Token").required().sensitive(),
                            ),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourcePipedrive) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
