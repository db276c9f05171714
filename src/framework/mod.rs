//! Host plugin framework boundary
//!
//! The host drives the provider over a process boundary: each call names
//! a service (the provider itself or one resource type), an operation,
//! and a [`ServiceRequest`] whose plan/state/config payloads are opaque
//! base64(JSON) strings. Services answer with a [`ServiceResponse`]
//! envelope; errors are folded into the envelope's `error` field by the
//! dispatch layer, never panics.

pub mod codec;
pub mod schema;
mod server;

pub use server::{serve, Registry, HANDSHAKE_PREFIX, PROTOCOL_VERSION};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Lifecycle operation requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Resolve the service's type name
    Metadata,
    /// Publish the service's attribute schema
    Schema,
    /// Hand the service its credentials
    Configure,
    /// Create the remote resource from a plan
    Create,
    /// Refresh state from the remote resource
    Read,
    /// Apply a changed plan to the remote resource
    Update,
    /// Destroy the remote resource
    Delete,
}

/// Request envelope passed by the host on every lifecycle call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRequest {
    /// Provider type name (set on resource Metadata calls)
    pub type_name: String,
    /// Packed provider configuration (Configure)
    pub config_contents: String,
    /// Id of the planned resource (Update)
    pub plan_id: String,
    /// Packed desired-state payload (Create/Update)
    pub plan_contents: String,
    /// Id of the last-applied resource (Read/Delete)
    pub state_id: String,
    /// Packed last-applied state (Read)
    pub state_contents: String,
    /// Packed credentials republished by the provider (Configure)
    pub resource_data: String,
}

/// Response envelope returned to the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceResponse {
    /// Service type name (Metadata)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    /// Packed attribute schema (Schema)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_contents: String,
    /// Packed credentials for resource Configure calls (provider Configure)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_data: String,
    /// Upstream id of the resource the state describes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_id: String,
    /// Packed refreshed state
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_contents: String,
    /// Timestamp of the last successful Create/Update
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_last_updated: String,
    /// Operation failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceResponse {
    /// Envelope carrying only an error
    pub fn from_error(err: impl std::fmt::Display) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::default()
        }
    }

    /// Envelope carrying only a type name
    pub fn type_name(name: impl Into<String>) -> Self {
        Self {
            type_name: name.into(),
            ..Self::default()
        }
    }
}

/// Lifecycle contract implemented by the provider service
pub trait ProviderService: Send + Sync {
    /// Provider type name (the `airbyte` prefix of every resource type)
    fn metadata(&self) -> Result<ServiceResponse>;
    /// Provider-level configuration schema
    fn schema(&self) -> Result<ServiceResponse>;
    /// Validate configuration, build the shared client, republish
    /// credentials for resource Configure calls
    fn configure(&mut self, req: &ServiceRequest) -> Result<ServiceResponse>;
}

/// Lifecycle contract implemented by every resource adapter
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// `<provider>_<resource>` type name
    fn metadata(&self, req: &ServiceRequest) -> Result<ServiceResponse>;
    /// Resource attribute schema
    fn schema(&self) -> Result<ServiceResponse>;
    /// Build this resource's API client from republished credentials
    fn configure(&mut self, req: &ServiceRequest) -> Result<ServiceResponse>;
    /// Create the remote resource from the packed plan
    async fn create(&self, req: &ServiceRequest) -> Result<ServiceResponse>;
    /// Refresh packed state from the remote resource
    async fn read(&self, req: &ServiceRequest) -> Result<ServiceResponse>;
    /// Apply the packed plan to the remote resource
    async fn update(&self, req: &ServiceRequest) -> Result<ServiceResponse>;
    /// Destroy the remote resource named by the state id
    async fn delete(&self, req: &ServiceRequest) -> Result<ServiceResponse>;
}
