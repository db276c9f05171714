//! HubSpot source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a HubSpot source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHubspot {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceHubspotConfig,
}

/// HubSpot connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHubspotConfig {
    /// Connector discriminator, always `hubspot`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Private app credentials block
    pub credentials: SourceHubspotCredentials,
}

/// HubSpot credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHubspotCredentials {
    /// Credential strategy, e.g. `Private App Credentials`
    pub credentials_title: String,
    /// Private app access token
    pub access_token: String,
}

impl ResourceKind for SourceHubspot {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_hubspot";
    const UPDATE: UpdateSupport = UpdateSupport::RefreshOnly;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_hubspot`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHubspotModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceHubspotConfigModel,
}

/// Host-facing HubSpot configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHubspotConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Private app credentials block
    pub credentials: SourceHubspotCredentialsModel,
}

/// Host-facing HubSpot credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHubspotCredentialsModel {
    /// Credential strategy
    pub credentials_title: String,
    /// Private app access token
    pub access_token: String,
}

impl From<SourceHubspotModel> for SourceHubspot {
    fn from(model: SourceHubspotModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceHubspotConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                credentials: SourceHubspotCredentials {
                    credentials_title: model.configuration.credentials.credentials_title,
                    access_token: model.configuration.credentials.access_token,
                },
            },
        }
    }
}

impl ResourceModel for SourceHubspotModel {
    type Api = SourceHubspot;

    const TYPE_SUFFIX: &'static str = "source_hubspot";

    fn schema() -> Schema {
        Schema::new("Source hubspot resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute(
                        "credentials",
                        Attribute::map("Credentials")
                            .required()
                            .attribute(
                                "credentials_title",
                                Attribute::string("Credentials Title").required(),
                            )
                            .attribute(
                                "access_token",
                                Attribute::string("Access Token").required().sensitive(),
                            ),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceHubspot) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
