//! Postgres destination

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a Postgres destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgres {
    /// Display name
    pub name: String,
    /// Upstream-assigned id
    #[serde(rename = "destinationId", skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    /// Owning workspace
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: DestinationPostgresConfig,
}

/// Postgres connector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresConfig {
    /// Connector discriminator, always `postgres`
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
    /// Target schema
    pub schema: String,
    /// SSL mode block
    pub ssl_mode: DestinationPostgresSslMode,
    /// SSH tunnel block
    pub tunnel_method: DestinationPostgresTunnelMethod,
}

/// Postgres SSL mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresSslMode {
    /// Mode, e.g. `require` or `disable`
    pub mode: String,
}

/// Postgres SSH tunnel method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresTunnelMethod {
    /// Tunnel method, e.g. `NO_TUNNEL`
    pub tunnel_method: String,
}

impl ResourceKind for DestinationPostgres {
    const ENDPOINT: &'static str = "/v1/destinations";
    const ID_FIELD: &'static str = "destinationId";
    const NAME: &'static str = "destination_postgres";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.destination_id.as_deref()
    }
}

/// Host-facing state for `airbyte_destination_postgres`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresModel {
    /// Display name
    pub name: String,
    /// Upstream-assigned id, empty until created
    pub destination_id: String,
    /// Owning workspace
    pub workspace_id: String,
    /// Connector configuration
    pub configuration: DestinationPostgresConfigModel,
}

/// Host-facing Postgres configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresConfigModel {
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
    /// Target schema
    pub schema: String,
    /// SSL mode block
    pub ssl_mode: DestinationPostgresSslModeModel,
    /// SSH tunnel block
    pub tunnel_method: DestinationPostgresTunnelMethodModel,
}

/// Host-facing SSL mode block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresSslModeModel {
    /// Mode
    pub mode: String,
}

/// Host-facing SSH tunnel block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPostgresTunnelMethodModel {
    /// Tunnel method
    pub tunnel_method: String,
}

impl From<DestinationPostgresModel> for DestinationPostgres {
    fn from(model: DestinationPostgresModel) -> Self {
        let c = model.configuration;
        Self {
            name: model.name,
            destination_id: opt(model.destination_id),
            workspace_id: model.workspace_id,
            configuration: DestinationPostgresConfig {
                destination_type: c.destination_type,
                host: c.host,
                username: c.username,
                password: c.password,
                database: c.database,
                port: c.port,
                schema: c.schema,
                ssl_mode: DestinationPostgresSslMode {
                    mode: c.ssl_mode.mode,
                },
                tunnel_method: DestinationPostgresTunnelMethod {
                    tunnel_method: c.tunnel_method.tunnel_method,
                },
            },
        }
    }
}

impl ResourceModel for DestinationPostgresModel {
    type Api = DestinationPostgres;

    const TYPE_SUFFIX: &'static str = "destination_postgres";

    fn schema() -> Schema {
        Schema::new("Destination postgres resource for Airbyte")
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
                    .attribute("port", Attribute::int("Port").required())
                    .attribute("schema", Attribute::string("Schema").required())
                    .attribute(
                        "ssl_mode",
                        Attribute::map("SSL Mode")
                            .required()
                            .attribute("mode", Attribute::string("Mode").required()),
                    )
                    .attribute(
                        "tunnel_method",
                        Attribute::map("Tunnel Method").required().attribute(
                            "tunnel_method",
                            Attribute::string("Tunnel Method").required(),
                        ),
                    ),
            )
    }

    fn id(&self) -> &str {
        &self.destination_id
    }

    fn refresh(&mut self, api: &DestinationPostgres) {
        self.name = api.name.clone();
        self.destination_id = api.destination_id.clone().unwrap_or_default();
        self.workspace_id = api.workspace_id.clone();
    }
}
