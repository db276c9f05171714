//! Resource descriptor and generic CRUD client
//!
//! Every managed kind follows the same quartet against its collection
//! endpoint, so the per-kind clients collapse into four generic
//! operations parameterized by a [`ResourceKind`] descriptor. Update
//! capability differs per kind upstream and is carried as data rather
//! than silently swallowed: kinds without an update endpoint fail loudly.

use crate::error::{Error, Result};
use crate::http::{api_error, ApiClient, ApiResponse};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

#[cfg(test)]
mod tests;

/// How an upstream resource kind supports in-place update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSupport {
    /// Full support: PUT the whole payload to `{endpoint}/{id}`.
    Put,
    /// No update endpoint upstream; refresh current remote state via GET.
    RefreshOnly,
    /// No update endpoint at all; the operation is an explicit error.
    Unsupported,
}

/// Descriptor implemented by each kind's API payload type.
///
/// The descriptor carries everything the generic CRUD operations need:
/// the collection endpoint, the JSON field holding the upstream id, and
/// the kind's update capability.
pub trait ResourceKind: Serialize + DeserializeOwned + Send + Sync {
    /// Collection endpoint, e.g. `/v1/sources`
    const ENDPOINT: &'static str;
    /// JSON field carrying the upstream-assigned id, e.g. `sourceId`
    const ID_FIELD: &'static str;
    /// Kind name used in errors and logs, e.g. `source_stripe`
    const NAME: &'static str;
    /// Update capability of the upstream API
    const UPDATE: UpdateSupport;

    /// Upstream-assigned id; `None` until the resource has been created.
    fn id(&self) -> Option<&str>;
}

fn decode_response<K: DeserializeOwned>(response: &ApiResponse) -> Result<K> {
    if response.is_success() {
        Ok(serde_json::from_slice(&response.body)?)
    } else {
        Err(api_error(response.status.as_u16(), &response.body))
    }
}

impl ApiClient {
    /// Create a resource: POST the payload to the kind's collection
    /// endpoint and decode the echoed payload, id now populated.
    pub async fn create<K: ResourceKind>(&self, payload: &K) -> Result<K> {
        let body = serde_json::to_vec(payload)?;
        let response = self
            .request(Method::POST, K::ENDPOINT, Some(body))
            .await?;
        decode_response(&response)
    }

    /// Read a resource by its upstream id.
    pub async fn read<K: ResourceKind>(&self, id: &str) -> Result<K> {
        let response = self
            .request(Method::GET, &format!("{}/{id}", K::ENDPOINT), None)
            .await?;
        decode_response(&response)
    }

    /// Update a resource according to the kind's capability.
    ///
    /// `RefreshOnly` kinds return current remote state instead of
    /// applying the payload; `Unsupported` kinds error before any request
    /// is made.
    pub async fn update<K: ResourceKind>(&self, payload: &K) -> Result<K> {
        match K::UPDATE {
            UpdateSupport::Put => {
                let id = payload
                    .id()
                    .ok_or(Error::MissingResourceId { kind: K::NAME })?;
                let body = serde_json::to_vec(payload)?;
                let response = self
                    .request(Method::PUT, &format!("{}/{id}", K::ENDPOINT), Some(body))
                    .await?;
                decode_response(&response)
            }
            UpdateSupport::RefreshOnly => {
                let id = payload
                    .id()
                    .ok_or(Error::MissingResourceId { kind: K::NAME })?;
                warn!(
                    kind = K::NAME,
                    "upstream exposes no update endpoint; refreshing remote state instead"
                );
                self.read(id).await
            }
            UpdateSupport::Unsupported => Err(Error::UpdateUnsupported { kind: K::NAME }),
        }
    }

    /// Delete a resource by its upstream id.
    ///
    /// The id travels both in the path and as an `{id_field: id}` body,
    /// matching what the upstream accepts for every kind.
    pub async fn delete<K: ResourceKind>(&self, id: &str) -> Result<()> {
        let body = serde_json::to_vec(&json!({ K::ID_FIELD: id }))?;
        let response = self
            .request(Method::DELETE, &format!("{}/{id}", K::ENDPOINT), Some(body))
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(api_error(response.status.as_u16(), &response.body))
        }
    }
}
