//! Zendesk Support source

use super::{is_false, opt};
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Zendesk Support source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceZendeskSupport {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceZendeskSupportConfig,
}

/// Zendesk Support connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceZendeskSupportConfig {
    /// Connector discriminator, always `zendesk-support`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Fetch without cursor pagination (testing aid)
    #[serde(skip_serializing_if = "is_false")]
    pub ignore_pagination: bool,
    /// Zendesk subdomain
    pub subdomain: String,
    /// API token credentials block
    pub credentials: SourceZendeskSupportCredentials,
}

/// Zendesk Support credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceZendeskSupportCredentials {
    /// Credential strategy, always `api_token`
    pub credentials: String,
    /// Agent email the token belongs to
    pub email: String,
    /// Zendesk API token
    pub api_token: String,
}

impl ResourceKind for SourceZendeskSupport {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_zendesk_support";
    const UPDATE: UpdateSupport = UpdateSupport::RefreshOnly;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_zendesk_support`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceZendeskSupportModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceZendeskSupportConfigModel,
}

/// Host-facing Zendesk Support configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceZendeskSupportConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Fetch without cursor pagination
    pub ignore_pagination: bool,
    /// Zendesk subdomain
    pub subdomain: String,
    /// API token credentials block
    pub credentials: SourceZendeskSupportCredentialsModel,
}

/// Host-facing Zendesk Support credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceZendeskSupportCredentialsModel {
    /// Credential strategy
    pub credentials: String,
    /// Agent email the token belongs to
    pub email: String,
    /// Zendesk API token
    pub api_token: String,
}

impl From<SourceZendeskSupportModel> for SourceZendeskSupport {
    fn from(model: SourceZendeskSupportModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceZendeskSupportConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                ignore_pagination: model.configuration.ignore_pagination,
                subdomain: model.configuration.subdomain,
                credentials: SourceZendeskSupportCredentials {
                    credentials: model.configuration.credentials.credentials,
                    email: model.configuration.credentials.email,
                    api_token: model.configuration.credentials.api_token,
                },
            },
        }
    }
}

impl ResourceModel for SourceZendeskSupportModel {
    type Api = SourceZendeskSupport;

    const TYPE_SUFFIX: &'static str = "source_zendesk_support";

    fn schema() -> Schema {
        Schema::new("Source zendesk support resource for Airbyte")
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
                        "ignore_pagination",
                        Attribute::bool("Ignore Pagination").optional(),
                    )
                    .attribute("subdomain", Attribute::string("Subdomain").required())
                    .attribute(
                        "credentials",
                        Attribute::map("Credentials")
                            .required()
                            .attribute(
                                "credentials",
                                Attribute::string("Credentials").required(),
                            )
                            .attribute("email", Attribute::string("Email").required())
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

    fn refresh(&mut self, api: &SourceZendeskSupport) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
