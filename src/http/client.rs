//! API client wrapper
//!
//! One `ApiClient` is built per provider configuration and shared
//! read-only by every resource adapter in the session. Each operation is
//! a single blocking round trip; transport failures surface as
//! [`Error::Http`](crate::error::Error::Http), distinct from genuine
//! non-2xx responses which are decoded through the error envelope.

use crate::auth::normalize_bearer;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Request timeout, fixed at 10 seconds in production use
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiClientConfig {
    /// Create a new config builder
    pub fn builder() -> ApiClientConfigBuilder {
        ApiClientConfigBuilder::default()
    }
}

/// Builder for the API client config
#[derive(Default)]
pub struct ApiClientConfigBuilder {
    config: ApiClientConfig,
}

impl ApiClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ApiClientConfig {
        self.config
    }
}

/// A fully buffered response
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Buffered response body
    pub body: Bytes,
}

impl ApiResponse {
    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP client bound to one Airbyte Cloud host and credential
pub struct ApiClient {
    client: Client,
    host: String,
    authorization: String,
}

impl ApiClient {
    /// Create a client with the default configuration
    pub fn new(host: impl Into<String>, authorization: impl Into<String>) -> Result<Self> {
        Self::with_config(host, authorization, ApiClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(
        host: impl Into<String>,
        authorization: impl Into<String>,
        config: ApiClientConfig,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            host: host.into(),
            authorization: authorization.into(),
        })
    }

    /// Base URL this client is bound to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Issue a request against `path` (joined onto the host).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse> {
        self.request_with_headers(method, path, body, &HashMap::new())
            .await
    }

    /// Issue a request with caller-supplied headers.
    ///
    /// Caller headers OVERRIDE the fixed `Accept`/`User-Agent`/
    /// `Content-Type`/`Authorization` values rather than being appended as
    /// duplicates; the last writer wins per header name.
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        extra_headers: &HashMap<String, String>,
    ) -> Result<ApiResponse> {
        let url = self.build_url(path);
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Normalization is re-applied on every request so a credential
        // swapped in either form keeps producing a canonical header.
        if !self.authorization.is_empty() {
            let value = normalize_bearer(&self.authorization);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value)
                    .map_err(|e| Error::config(format!("invalid authorization header: {e}")))?,
            );
        }

        for (name, value) in extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::config(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("invalid header value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        let mut req = self
            .client
            .request(method.clone(), url.as_str())
            .headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(%method, %url, status = status.as_u16(), "request completed");

        Ok(ApiResponse {
            status,
            headers: response_headers,
            body,
        })
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let host = self.host.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{host}/{path}")
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("host", &self.host)
            .field("has_authorization", &!self.authorization.is_empty())
            .finish_non_exhaustive()
    }
}
