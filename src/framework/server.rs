//! Static registry and serve loop
//!
//! The host spawns the plugin binary as a subprocess. The plugin prints a
//! handshake line, then answers line-delimited JSON requests on stdin
//! with one JSON response envelope per line on stdout. Dispatch is a
//! static-registry lookup; nothing is loaded dynamically.

use super::{Operation, ProviderService, ResourceService, ServiceRequest, ServiceResponse};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// First token of the handshake line
pub const HANDSHAKE_PREFIX: &str = "AIRBYTE_PROVIDER";

/// Wire protocol version announced in the handshake
pub const PROTOCOL_VERSION: u32 = 1;

/// One request line from the host
#[derive(Debug, Deserialize)]
struct RpcRequest {
    /// Target: `provider` or a registered resource type name
    service: String,
    operation: Operation,
    #[serde(default)]
    request: ServiceRequest,
}

/// Provider plus resource services keyed by their type names
pub struct Registry {
    provider: Box<dyn ProviderService>,
    provider_type_name: String,
    resources: HashMap<String, Box<dyn ResourceService>>,
}

impl Registry {
    /// Build a registry around a provider service.
    pub fn new(provider: impl ProviderService + 'static) -> Result<Self> {
        let provider_type_name = provider.metadata()?.type_name;
        if provider_type_name.is_empty() {
            return Err(Error::framework("provider metadata returned no type name"));
        }
        Ok(Self {
            provider: Box::new(provider),
            provider_type_name,
            resources: HashMap::new(),
        })
    }

    /// Register a resource service under its metadata type name.
    pub fn register(&mut self, service: impl ResourceService + 'static) -> Result<()> {
        let req = ServiceRequest {
            type_name: self.provider_type_name.clone(),
            ..ServiceRequest::default()
        };
        let type_name = service.metadata(&req)?.type_name;
        if type_name.is_empty() {
            return Err(Error::framework("resource metadata returned no type name"));
        }
        if self.resources.contains_key(&type_name) {
            return Err(Error::framework(format!(
                "resource type {type_name} registered twice"
            )));
        }
        self.resources.insert(type_name, Box::new(service));
        Ok(())
    }

    /// Registered resource type names, sorted.
    pub fn resource_type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Route one host call to its service, folding errors into the envelope.
    pub async fn dispatch(
        &mut self,
        service: &str,
        operation: Operation,
        req: &ServiceRequest,
    ) -> ServiceResponse {
        debug!(service, ?operation, "dispatch");
        let result = self.dispatch_inner(service, operation, req).await;
        result.unwrap_or_else(ServiceResponse::from_error)
    }

    async fn dispatch_inner(
        &mut self,
        service: &str,
        operation: Operation,
        req: &ServiceRequest,
    ) -> Result<ServiceResponse> {
        if service == "provider" || service == self.provider_type_name {
            return match operation {
                Operation::Metadata => self.provider.metadata(),
                Operation::Schema => self.provider.schema(),
                Operation::Configure => self.provider.configure(req),
                other => Err(Error::framework(format!(
                    "operation {other:?} is not valid for the provider service"
                ))),
            };
        }

        let resource = self
            .resources
            .get_mut(service)
            .ok_or_else(|| Error::framework(format!("unknown service: {service}")))?;

        match operation {
            Operation::Metadata => resource.metadata(req),
            Operation::Schema => resource.schema(),
            Operation::Configure => resource.configure(req),
            Operation::Create => resource.create(req).await,
            Operation::Read => resource.read(req).await,
            Operation::Update => resource.update(req).await,
            Operation::Delete => resource.delete(req).await,
        }
    }
}

/// Serve the registry over stdin/stdout until the host closes the pipe.
///
/// `version` is the build-time plugin version announced in the handshake:
/// `AIRBYTE_PROVIDER|<protocol>|<version>|stdio`.
pub async fn serve(version: &str, mut registry: Registry) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let handshake = format!("{HANDSHAKE_PREFIX}|{PROTOCOL_VERSION}|{version}|stdio\n");
    stdout.write_all(handshake.as_bytes()).await?;
    stdout.flush().await?;

    info!(
        version,
        resources = registry.resources.len(),
        "provider plugin serving"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<RpcRequest>(line) {
            Ok(rpc) => {
                registry
                    .dispatch(&rpc.service, rpc.operation, &rpc.request)
                    .await
            }
            Err(e) => ServiceResponse::from_error(format!("malformed request: {e}")),
        };
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        stdout.write_all(encoded.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("host closed the pipe; shutting down");
    Ok(())
}
