//! Provider adapter
//!
//! Validates host and credential configuration, owns the one API client
//! of the session, and republishes credentials so each resource adapter
//! can build its own client through the framework Configure call.

mod adapter;

pub use adapter::{ResourceAdapter, ResourceModel};

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::framework::schema::{Attribute, Schema};
use crate::framework::{codec, ProviderService, ServiceRequest, ServiceResponse};
use crate::http::ApiClient;
use serde::Deserialize;


/// Type-name prefix of every resource exposed by this plugin
pub const PROVIDER_TYPE_NAME: &str = "airbyte";

/// Provider-level configuration supplied by the host
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the Airbyte Cloud API
    pub host: String,
    /// Bearer token, raw or already prefixed
    pub authorization: String,
}

/// The Airbyte provider service
#[derive(Default)]
pub struct AirbyteProvider {
    client: Option<ApiClient>,
}

impl AirbyteProvider {
    /// New unconfigured provider
    pub fn new() -> Self {
        Self::default()
    }

    /// The session client, once Configure has run
    pub fn client(&self) -> Option<&ApiClient> {
        self.client.as_ref()
    }
}

impl ProviderService for AirbyteProvider {
    fn metadata(&self) -> Result<ServiceResponse> {
        Ok(ServiceResponse::type_name(PROVIDER_TYPE_NAME))
    }

    fn schema(&self) -> Result<ServiceResponse> {
        let schema = Schema::new("Airbyte provider plugin")
            .attribute(
                "host",
                Attribute::string(
                    "URI for the Airbyte API. May also be provided via the \
                     AIRBYTE_HOST environment variable.",
                )
                .required(),
            )
            .attribute(
                "authorization",
                Attribute::string("Bearer token for the Airbyte provider")
                    .required()
                    .sensitive(),
            );

        Ok(ServiceResponse {
            schema_contents: codec::pack(&schema)?,
            ..ServiceResponse::default()
        })
    }

    fn configure(&mut self, req: &ServiceRequest) -> Result<ServiceResponse> {
        let mut config: ProviderConfig = codec::unpack(&req.config_contents)?;
        if config.host.is_empty() {
            if let Ok(host) = std::env::var("AIRBYTE_HOST") {
                config.host = host;
            }
        }
        if config.host.is_empty() || config.authorization.is_empty() {
            return Err(Error::config(
                "invalid host or credentials received; \
                 provider is unable to create the Airbyte API client",
            ));
        }
        url::Url::parse(&config.host)?;

        // Exactly one client per provider session.
        if self.client.is_none() {
            self.client = Some(ApiClient::new(&config.host, &config.authorization)?);
        }

        let creds = Credentials::new(&config.host, &config.authorization);
        Ok(ServiceResponse {
            resource_data: codec::pack(&creds)?,
            ..ServiceResponse::default()
        })
    }
}
