//! Shopify source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Shopify source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShopify {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceShopifyConfig,
}

/// Shopify connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShopifyConfig {
    /// Connector discriminator, always `shopify`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Shop subdomain, e.g. `my-store` of `my-store.myshopify.com`
    pub shop: String,
    /// API password credentials block
    pub credentials: SourceShopifyCredentials,
}

/// Shopify credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShopifyCredentials {
    /// Credential strategy, always `api_password`
    pub auth_method: String,
    /// Private app API password
    pub api_password: String,
}

impl ResourceKind for SourceShopify {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_shopify";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_shopify`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShopifyModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceShopifyConfigModel,
}

/// Host-facing Shopify configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShopifyConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Shop subdomain
    pub shop: String,
    /// API password credentials block
    pub credentials: SourceShopifyCredentialsModel,
}

/// Host-facing Shopify credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceShopifyCredentialsModel {
    /// Credential strategy
    pub auth_method: String,
    /// Private app API password
    pub api_password: String,
}

impl From<SourceShopifyModel> for SourceShopify {
    fn from(model: SourceShopifyModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceShopifyConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                shop: model.configuration.shop,
                credentials: SourceShopifyCredentials {
                    auth_method: model.configuration.credentials.auth_method,
                    api_password: model.configuration.credentials.api_password,
                },
            },
        }
    }
}

impl ResourceModel for SourceShopifyModel {
    type Api = SourceShopify;

    const TYPE_SUFFIX: &'static str = "source_shopify";

    fn schema() -> Schema {
        Schema::new("Source shopify resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute("shop", Attribute::string("Shop").required())
                    .attribute(
                        "credentials",
                        Attribute::map("Credentials")
                            .required()
                            .attribute(
                                "auth_method",
                                Attribute::string("Auth Method").required(),
                            )
                            .attribute(
                                "api_password",
                                Attribute::string("API Password").required().sensitive(),
                            ),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceShopify) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
