//! Freshdesk source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Freshdesk source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFreshdesk {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceFreshdeskConfig,
}

/// Freshdesk connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFreshdeskConfig {
    /// Connector discriminator, always `freshdesk`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Freshdesk domain, e.g. `myaccount.freshdesk.com`
    pub domain: String,
    /// Freshdesk API key
    pub api_key: String,
    /// Upstream rate limit ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<i64>,
}

impl ResourceKind for SourceFreshdesk {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_freshdesk";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_freshdesk`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFreshdeskModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceFreshdeskConfigModel,
}

/// Host-facing Freshdesk configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFreshdeskConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Freshdesk domain
    pub domain: String,
    /// Freshdesk API key
    pub api_key: String,
    /// Upstream rate limit ceiling
    pub requests_per_minute: Option<i64>,
}

impl From<SourceFreshdeskModel> for SourceFreshdesk {
    fn from(model: SourceFreshdeskModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceFreshdeskConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                domain: model.configuration.domain,
                api_key: model.configuration.api_key,
                requests_per_minute: model.configuration.requests_per_minute,
            },
        }
    }
}

impl ResourceModel for SourceFreshdeskModel {
    type Api = SourceFreshdesk;

    const TYPE_SUFFIX: &'static str = "source_freshdesk";

    fn schema() -> Schema {
        Schema::new("Source freshdesk resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute("domain", Attribute::string("Domain").required())
                    .attribute(
                        "api_key",
                        Attribute::string("API Key").required().sensitive(),
                    )
                    .attribute(
                        "requests_per_minute",
                        Attribute::int("Requests Per Minute").optional(),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceFreshdesk) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
