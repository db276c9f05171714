//! MySQL destination

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a MySQL destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationMysql {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "destinationId", skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: DestinationMysqlConfig,
}

/// MySQL connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationMysqlConfig {
    /// Connector discriminator, always `mysql`
    #[serde(rename = "destinationType")]
    pub destination_type: String,
    /// Database host
    pub host: String,
    /// Database user
    pub username: String,
    /// Database password
    pub password: String,
    /// Database name
    pub database: String,
    /// Database port
    pub port: i64,
}

impl ResourceKind for DestinationMysql {
    const ENDPOINT: &'static str = "/v1/destinations";
    const ID_FIELD: &'static str = "destinationId";
    const NAME: &'static str = "destination_mysql";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.destination_id.as_deref()
    }
}

/// Host-facing state for `airbyte_destination_mysql`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationMysqlModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub destination_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: DestinationMysqlConfigModel,
}

/// Host-facing MySQL configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationMysqlConfigModel {
    /// Connector discriminator
    pub destination_type: String,
    /// Database host
    pub host: String,
    /// Database user
    pub username: String,
    /// Database password
    pub password: String,
    /// Database name
    pub database: String,
    /// Database port
    pub port: i64,
}

impl From<DestinationMysqlModel> for DestinationMysql {
    fn from(model: DestinationMysqlModel) -> Self {
        Self {
            name: model.name,
            destination_id: opt(model.destination_id),
            workspace_id: model.workspace_id,
            configuration: DestinationMysqlConfig {
                destination_type: model.configuration.destination_type,
                host: model.configuration.host,
                username: model.configuration.username,
                password: model.configuration.password,
                database: model.configuration.database,
                port: model.configuration.port,
            },
        }
    }
}

impl ResourceModel for DestinationMysqlModel {
    type Api = DestinationMysql;

    const TYPE_SUFFIX: &'static str = "destination_mysql";

    fn schema() -> Schema {
        Schema::new("Destination mysql resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute(
                "destination_id",
                Attribute::string("Destination ID").computed(),
            )
            .attribute("workspace_id", Attribute::string("Workspace ID").required())
            .attribute(
                "configuration",
                Attribute::map("Connection configuration")
                    .required()
                    .attribute(
                        "destination_type",
                        Attribute::string("Destination Type").required(),
                    )
                    .attribute("host", Attribute::string("Host").required())
                    .attribute("username", Attribute::string("Username").required())
                    .attribute(
                        "password",
                        Attribute::string("Password").required().sensitive(),
                    )
                    .attribute("database", Attribute::string("Database").required())
                    .attribute("port", Attribute::int("Port").required()),
            )
    }

    fn id(&self) -> &str {
        &self.destination_id
    }

    fn refresh(&mut self, api: &DestinationMysql) {
        self.name = api.name.clone();
        self.destination_id = api.destination_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
