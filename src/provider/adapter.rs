//! Generic resource adapter
//!
//! One adapter implements the whole host lifecycle for every kind. A
//! [`ResourceModel`] describes the host-facing state shape, its schema,
//! and how to map to the kind's API payload; the adapter supplies the
//! lifecycle mechanics once.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::framework::schema::Schema;
use crate::framework::{codec, ResourceService, ServiceRequest, ServiceResponse};
use crate::http::ApiClient;
use crate::resource::ResourceKind;
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Host-facing state model for one resource kind.
///
/// `refresh` merges only the id-bearing top-level fields of an API
/// response into prior state: upstream reads return a reduced view and
/// echoes of the configuration redact secrets, so the configuration block
/// always survives from the operator's plan.
pub trait ResourceModel: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// API payload type this model maps onto
    type Api: ResourceKind + From<Self>;

    /// Resource suffix appended to the provider type name,
    /// e.g. `source_stripe`
    const TYPE_SUFFIX: &'static str;

    /// Attribute schema published to the host
    fn schema() -> Schema;

    /// Upstream id recorded in state; empty until the resource exists
    fn id(&self) -> &str;

    /// Merge refreshed top-level fields from an API response
    fn refresh(&mut self, api: &Self::Api);
}

/// Generic lifecycle adapter over a [`ResourceModel`]
pub struct ResourceAdapter<M: ResourceModel> {
    client: Option<ApiClient>,
    _model: PhantomData<M>,
}

impl<M: ResourceModel> ResourceAdapter<M> {
    /// New unconfigured adapter
    pub fn new() -> Self {
        Self {
            client: None,
            _model: PhantomData,
        }
    }

    fn client(&self) -> Result<&ApiClient> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::config("resource has not been configured"))
    }

    fn timestamp() -> String {
        Utc::now().to_rfc2822()
    }
}

impl<M: ResourceModel> Default for ResourceAdapter<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<M: ResourceModel + 'static> ResourceService for ResourceAdapter<M> {
    fn metadata(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        Ok(ServiceResponse::type_name(format!(
            "{}_{}",
            req.type_name,
            M::TYPE_SUFFIX
        )))
    }

    fn schema(&self) -> Result<ServiceResponse> {
        Ok(ServiceResponse {
            schema_contents: codec::pack(&M::schema())?,
            ..ServiceResponse::default()
        })
    }

    fn configure(&mut self, req: &ServiceRequest) -> Result<ServiceResponse> {
        if req.resource_data.is_empty() {
            return Err(Error::config("no data provided to configure resource"));
        }
        let creds: Credentials = codec::unpack(&req.resource_data)?;
        self.client = Some(ApiClient::new(creds.host, creds.authorization)?);
        Ok(ServiceResponse::default())
    }

    async fn create(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        let plan: M = codec::unpack(&req.plan_contents)?;
        let created = self.client()?.create(&M::Api::from(plan.clone())).await?;

        let mut state = plan;
        state.refresh(&created);

        Ok(ServiceResponse {
            state_id: state.id().to_string(),
            state_contents: codec::pack(&state)?,
            state_last_updated: Self::timestamp(),
            ..ServiceResponse::default()
        })
    }

    async fn read(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        let mut state: M = codec::unpack(&req.state_contents)?;
        let mut response = ServiceResponse::default();

        if !req.state_id.is_empty() {
            let remote = self.client()?.read::<M::Api>(&req.state_id).await?;
            state.refresh(&remote);
            response.state_id = state.id().to_string();
        }

        response.state_contents = codec::pack(&state)?;
        Ok(response)
    }

    async fn update(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        let plan: M = codec::unpack(&req.plan_contents)?;
        let client = self.client()?;

        client.update(&M::Api::from(plan.clone())).await?;

        let id = if req.plan_id.is_empty() {
            plan.id().to_string()
        } else {
            req.plan_id.clone()
        };
        let remote = client.read::<M::Api>(&id).await?;

        let mut state = plan;
        state.refresh(&remote);

        Ok(ServiceResponse {
            state_id: state.id().to_string(),
            state_contents: codec::pack(&state)?,
            state_last_updated: Self::timestamp(),
            ..ServiceResponse::default()
        })
    }

    async fn delete(&self, req: &ServiceRequest) -> Result<ServiceResponse> {
        self.client()?.delete::<M::Api>(&req.state_id).await?;
        Ok(ServiceResponse::default())
    }
}
