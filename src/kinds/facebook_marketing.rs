//! Facebook Marketing source

use super::{is_false, opt};
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Facebook Marketing source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFacebookMarketing {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceFacebookMarketingConfig,
}

/// Facebook Marketing connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFacebookMarketingConfig {
    /// Connector discriminator, always `facebook-marketing`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Ad account id
    pub account_id: String,
    /// Replication start date
    pub start_date: String,
    /// Marketing API access token
    pub access_token: String,
    /// Replication end date
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    /// Include deleted campaigns, ads and ad sets
    #[serde(skip_serializing_if = "is_false")]
    pub include_deleted: bool,
    /// Fetch thumbnail images for ad creatives
    #[serde(skip_serializing_if = "is_false")]
    pub fetch_thumbnail_images: bool,
    /// Page size for paginated requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    /// Attribution lookback window for insights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights_lookback_window: Option<i64>,
    /// Maximum batch size for batched requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<i64>,
    /// Allow empty action breakdowns
    #[serde(skip_serializing_if = "is_false")]
    pub action_breakdowns_allow_empty: bool,
}

impl ResourceKind for SourceFacebookMarketing {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_facebook_marketing";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_facebook_marketing`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFacebookMarketingModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceFacebookMarketingConfigModel,
}

/// Host-facing Facebook Marketing configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFacebookMarketingConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Ad account id
    pub account_id: String,
    /// Replication start date
    pub start_date: String,
    /// Marketing API access token
    pub access_token: String,
    /// Replication end date
    pub end_date: String,
    /// Include deleted campaigns, ads and ad sets
    pub include_deleted: bool,
    /// Fetch thumbnail images for ad creatives
    pub fetch_thumbnail_images: bool,
    /// Page size for paginated requests
    pub page_size: Option<i64>,
    /// Attribution lookback window for insights
    pub insights_lookback_window: Option<i64>,
    /// Maximum batch size for batched requests
    pub max_batch_size: Option<i64>,
    /// Allow empty action breakdowns
    pub action_breakdowns_allow_empty: bool,
}

impl From<SourceFacebookMarketingModel> for SourceFacebookMarketing {
    fn from(model: SourceFacebookMarketingModel) -> Self {
        let c = model.configuration;
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceFacebookMarketingConfig {
                source_type: c.source_type,
                account_id: c.account_id,
                start_date: c.start_date,
                access_token: c.access_token,
                end_date: c.end_date,
                include_deleted: c.include_deleted,
                fetch_thumbnail_images: c.fetch_thumbnail_images,
                page_size: c.page_size,
                insights_lookback_window: c.insights_lookback_window,
                max_batch_size: c.max_batch_size,
                action_breakdowns_allow_empty: c.action_breakdowns_allow_empty,
            },
        }
    }
}

impl ResourceModel for SourceFacebookMarketingModel {
    type Api = SourceFacebookMarketing;

    const TYPE_SUFFIX: &'static str = "source_facebook_marketing";

    fn schema() -> Schema {
        Schema::new("Source facebook marketing resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("account_id", Attribute::string("Account ID").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute(
                        "access_token",
                        Attribute::string("Access Token").required().sensitive(),
                    )
                    .attribute("end_date", Attribute::string("End Date").optional())
                    .attribute(
                        "include_deleted",
                        Attribute::bool("Include Deleted").optional(),
                    )
                    .attribute(
                        "fetch_thumbnail_images",
                        Attribute::bool("Fetch Thumbnail Images").optional(),
                    )
                    .attribute("page_size", Attribute::int("Page Size").optional())
                    .attribute(
                        "insights_lookback_window",
                        Attribute::int("Insights Lookback Window").optional(),
                    )
                    .attribute(
                        "max_batch_size",
                        Attribute::int("Max Batch Size").optional(),
                    )
                    .attribute(
                        "action_breakdowns_allow_empty",
                        Attribute::bool("Action Breakdowns Allow Empty").optional(),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceFacebookMarketing) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
