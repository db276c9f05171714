//! HTTP layer
//!
//! A thin wrapper over `reqwest` carrying the Airbyte Cloud request
//! contract: fixed 10-second timeout, bearer-token header injection and
//! JSON content type on every call, fully buffered response bodies, and
//! decoding of the upstream error envelope. There is intentionally no
//! retry, rate limiting or connection-pool tuning here.

mod client;
mod envelope;

pub use client::{ApiClient, ApiClientConfig, ApiClientConfigBuilder, ApiResponse};
pub use envelope::{api_error, decode_api_error, ApiErrorBody, ValidationError, FALLBACK_MESSAGE};

#[cfg(test)]
mod tests;
