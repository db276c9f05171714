//! Connection linking a source to a destination

use super::opt;
use crate::framework::schema::{Attribute, Schema};
use crate::provider::ResourceModel;
use crate::resource::{ResourceKind, UpdateSupport};
use serde::{Deserialize, Serialize};

/// API payload for a connection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    /// Display name
    pub name: String,
    /// Source end of the connection
    #[serde(rename = "sourceId", skip_serializing_if = "String::is_empty")]
    pub source_id: String,
    /// Destination end of the connection
    #[serde(rename = "destinationId", skip_serializing_if = "String::is_empty")]
    pub destination_id: String,
    /// Upstream-assigned id
    #[serde(rename = "connectionId", skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    /// Geography the sync runs in
    #[serde(rename = "dataResidency", skip_serializing_if = "String::is_empty")]
    pub data_residency: String,
    /// How destination namespaces are derived
    #[serde(rename = "namespaceDefinition", skip_serializing_if = "String::is_empty")]
    pub namespace_definition: String,
    /// Namespace format string
    #[serde(rename = "namespaceFormat", skip_serializing_if = "String::is_empty")]
    pub namespace_format: String,
    /// Reaction to non-breaking upstream schema changes
    #[serde(
        rename = "nonBreakingSchemaUpdatesBehavior",
        skip_serializing_if = "String::is_empty"
    )]
    pub non_breaking_schema_updates_behavior: String,
    /// Prefix applied to destination stream names
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Connection status, e.g. `active`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Sync schedule
    pub schedule: ConnectionSchedule,
}

/// Connection sync schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSchedule {
    /// Schedule strategy, e.g. `manual` or `cron`
    #[serde(rename = "scheduleType")]
    pub schedule_type: String,
    /// Cron expression when the strategy is `cron`
    #[serde(rename = "cronExpression", skip_serializing_if = "String::is_empty")]
    pub cron_expression: String,
}

impl ResourceKind for Connection {
    const ENDPOINT: &'static str = "/v1/connections";
    const ID_FIELD: &'static str = "connectionId";
    const NAME: &'static str = "connection";
    const UPDATE: UpdateSupport = UpdateSupport::Unsupported;

    fn id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }
}

/// Host-facing state for `airbyte_connection`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionModel {
    /// Display name
    pub name: String,
    /// Source end of the connection
    pub source_id: String,
    /// Destination end of the connection
    pub destination_id: String,
    /// Upstream-assigned id, empty until created
    pub connection_id: String,
    /// Geography the sync runs in
    pub data_residency: String,
    /// How destination namespaces are derived
    pub namespace_definition: String,
    /// Namespace format string
    pub namespace_format: String,
    /// Reaction to non-breaking upstream schema changes
    pub non_breaking_schema_updates_behavior: String,
    /// Prefix applied to destination stream names
    pub prefix: String,
    /// Connection status
    pub status: String,
    /// Sync schedule
    pub schedule: ConnectionScheduleModel,
}

/// Host-facing schedule block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionScheduleModel {
    /// Schedule strategy
    pub schedule_type: String,
    /// Cron expression when the strategy is `cron`
    pub cron_expression: String,
}

impl From<ConnectionModel> for Connection {
    fn from(model: ConnectionModel) -> Self {
        Self {
            name: model.name,
            source_id: model.source_id,
            destination_id: model.destination_id,
            connection_id: opt(model.connection_id),
            data_residency: model.data_residency,
            namespace_definition: model.namespace_definition,
            namespace_format: model.namespace_format,
            non_breaking_schema_updates_behavior: model.non_breaking_schema_updates_behavior,
            prefix: model.prefix,
            status: model.status,
            schedule: ConnectionSchedule {
                schedule_type: model.schedule.schedule_type,
                cron_expression: model.schedule.cron_expression,
            },
        }
    }
}

impl ResourceModel for ConnectionModel {
    type Api = Connection;

    const TYPE_SUFFIX: &'static str = "connection";

    fn schema() -> Schema {
        Schema::new("Connection resource for Airbyte")
            .attribute("name", Attribute::string("Name").required())
            .attribute("source_id", Attribute::string("Source ID").required())
            .attribute(
                "destination_id",
                Attribute::string("Destination ID").required(),
            )
            .attribute(
                "connection_id",
                Attribute::string("Connection ID").computed(),
            )
            .attribute("status", Attribute::string("Status").required())
            .attribute(
                "schedule",
                Attribute::map("Schedule")
                    .required()
                    .attribute(
                        "schedule_type",
                        Attribute::string("Schedule Type").required(),
                    )
                    .attribute(
                        "cron_expression",
                        Attribute::string("Cron Expression").optional(),
                    ),
            )
            .attribute(
                "data_residency",
                Attribute::string("Data Residency").optional(),
            )
            .attribute(
                "namespace_definition",
                Attribute::string("Namespace Definition").optional(),
            )
            .attribute(
                "namespace_format",
                Attribute::string("Namespace Format").optional(),
            )
            .attribute(
                "non_breaking_schema_updates_behavior",
                Attribute::string("Non-breaking Schema Updates Behavior").optional(),
            )
            .attribute("prefix", Attribute::string("Prefix").optional())
    }

    fn id(&self) -> &str {
        &self.connection_id
    }

    // Connections carry no secrets, so the whole record refreshes from
    // the response.
    fn refresh(&mut self, api: &Connection) {
        self.name = api.name.clone();
        self.connection_id = api.connection_id.clone().unwrap_or_default();
        self.source_id = api.source_id.clone();
        self.destination_id = api.destination_id.clone();
        self.data_residency = api.data_residency.clone();
        self.status = api.status.clone();
        self.namespace_definition = api.namespace_definition.clone();
        self.namespace_format = api.namespace_format.clone();
        self.non_breaking_schema_updates_behavior =
            api.non_breaking_schema_updates_behavior.clone();
        self.prefix = api.prefix.clone();
        self.schedule = ConnectionScheduleModel {
            schedule_type: api.schedule.schedule_type.clone(),
            cron_expression: api.schedule.cron_expression.clone(),
        };
    }
}
