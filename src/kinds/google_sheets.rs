//! Google Sheets source

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Google Sheets source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleSheets {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceGoogleSheetsConfig,
}

/// Google Sheets connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleSheetsConfig {
    /// Connector discriminator, always `google-sheets`
    #[serde(rename = "sourceType")]
    pub source_type: String,
    /// Rows fetched per batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_batch_size: Option<i64>,
    /// Spreadsheet id or full URL
    pub spreadsheet_id: String,
    /// Service account credentials block
    pub credentials: SourceGoogleSheetsCredentials,
}

/// Google Sheets credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleSheetsCredentials {
    /// Credential strategy, always `Service`
    pub auth_type: String,
    /// Service account key (JSON string)
    pub service_account_info: String,
}

impl ResourceKind for SourceGoogleSheets {
    const ENDPOINT: &'static str = "/v1/sources";
    const ID_FIELD: &'static str = "sourceId";
    const NAME: &'static str = "source_google_sheets";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Host-facing state for `airbyte_source_google_sheets`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleSheetsModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub source_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: SourceGoogleSheetsConfigModel,
}

/// Host-facing Google Sheets configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleSheetsConfigModel {
    /// Connector discriminator
    pub source_type: String,
    /// Rows fetched per batch
    pub row_batch_size: Option<i64>,
    /// Spreadsheet id or full URL
    pub spreadsheet_id: String,
    /// Service account credentials block
    pub credentials: SourceGoogleSheetsCredentialsModel,
}

/// Host-facing Google Sheets credentials block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceGoogleSheetsCredentialsModel {
    /// Credential strategy
    pub auth_type: String,
    /// Service account key (JSON string)
    pub service_account_info: String,
}

impl From<SourceGoogleSheetsModel> for SourceGoogleSheets {
    fn from(model: SourceGoogleSheetsModel) -> Self {
        Self {
            name: model.name,
            source_id: opt(model.source_id),
            workspace_id: model.workspace_id,
            configuration: SourceGoogleSheetsConfig {
                source_type: model.configuration.source_type,
                row_batch_size: model.configuration.row_batch_size,
                spreadsheet_id: model.configuration.spreadsheet_id,
                credentials: SourceGoogleSheetsCredentials {
                    auth_type: model.configuration.credentials.auth_type,
                    service_account_info: model.configuration.credentials.service_account_info,
                },
            },
        }
    }
}

impl ResourceModel for SourceGoogleSheetsModel {
    type Api = SourceGoogleSheets;

    const TYPE_SUFFIX: &'static str = "source_google_sheets";

    fn schema() -> Schema {
        Schema::new("Source google sheets resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").computed())
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute("source_type", Attribute::string("Source Type").required())
                    .attribute(
                        "row_batch_size",
                        Attribute::int("Row Batch Size").optional(),
                    )
                    .attribute(
                        "spreadsheet_id",
                        Attribute::string("Spreadsheet ID").required(),
                    )
                    .attribute(
                        "credentials",
                        Attribute::map("Credentials")
                            .required()
                            .attribute("auth_type", Attribute::string("Auth Type").required())
                            .attribute(
                                "service_account_info",
                                Attribute::string("Service Account Info")
                                    .required()
                                    .sensitive(),
                            ),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.source_id
    }

    fn refresh(&mut self, api: &SourceGoogleSheets) {
        self.name = api.name.clone();
        self.source_id = api.source_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
