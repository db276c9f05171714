//! Stripe source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Stripe source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStripe {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceStripeConfig,
}

/// Stripe connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStripeConfig {
    /// Connector discriminator, always `stripe`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Replication start date (UTC date)
    pub start_date: String,
    /// Days of data re-fetched on each sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookback_window_days: Option<i64>,
    /// Days per slice when fetching historical data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_range: Option<i64>,
    /// Stripe secret key
    pub client_secret: String,
    /// Stripe account id
    pub account_id: String,
}

impl ResourceKind for SourceStripe {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_stripe";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_stripe`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStripeModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceStripeConfigModel,
}

/// Host-facing Stripe configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStripeConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Replication start date
    pub start_date: String,
    /// Days of data re-fetched on each sync
    pub lookback_window_days: Option<i64>,
    /// Days per slice when fetching historical data
    pub slice_range: Option<i64>,
    /// Stripe secret key
    pub client_secret: String,
    /// Stripe account id
    pub account_id: String,
}

impl From<SourceStripeModel> for SourceStripe {
    fn from(model: SourceStripeModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceStripeConfig {
                source_type: model.configuration.source_type,
                start_date: model.configuration.start_date,
                lookback_window_days: model.configuration.lookback_window_days,
                slice_range: model.configuration.slice_range,
                client_secret: model.configuration.client_secret,
                account_id: model.configuration.account_id,
            },
        }
    }
}

impl ResourceModel for SourceStripeModel {
    type Api = SourceStripe;

    const TYPE_SUFFIX: &'static str = "source_stripe";

    fn schema() -> Schema {
        Schema::new("Source stripe resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute("start_date", Attribute::string("Start Date").required())
                    .attribute("slice_range", Attribute::int("Slice Range").optional())
                    .attribute(
                        "lookback_window_days",
                        Attribute::int("Lookback window days").optional(),
                    )
                    .attribute(
                        "client_secret",
                        Attribute::string("Client Secret").required().sensitive(),
                    )
                    .attribute("account_id", Attribute::string("Account Id").required()),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    // Reads return only the id-bearing fields; configuration survives
    // from the plan because the upstream redacts secrets on echo.
    fn refresh(&mut self, api: &SourceStripe) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
