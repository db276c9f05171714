//! Upstream error envelope
//!
//! Non-2xx responses from Airbyte Cloud carry a JSON envelope whose
//! `message` field may trail off into a Java stack-trace fragment from the
//! upstream JSON parser. The decoder truncates the message at that marker
//! and falls back to a fixed diagnostic when the body is not an envelope
//! at all (an HTML error page from a wrong host, typically).

use crate::error::{Error, Result};
use serde::Deserialize;

/// Diagnostic returned when a non-2xx body is not a parseable envelope.
pub const FALLBACK_MESSAGE: &str = "content type mismatch or invalid provider api host or path";

/// Upstream JSON-parser artifact marking the start of a stack fragment.
const STACK_MARKER: &str = "at [Source:";

/// Error envelope returned by the Airbyte Cloud API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Human-readable message, possibly with a trailing stack fragment
    #[serde(default)]
    pub message: String,
    /// Upstream exception class
    #[serde(default)]
    pub exception_class_name: String,
    /// Upstream stack frames
    #[serde(default)]
    pub exception_stack: Vec<String>,
    /// Per-field validation failures
    #[serde(default)]
    pub validation_errors: Vec<ValidationError>,
}

/// One validation failure within the error envelope
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Path of the offending property
    #[serde(default)]
    pub property_path: String,
    /// The rejected value
    #[serde(default)]
    pub invalid_value: String,
    /// Validation message
    #[serde(default)]
    pub message: String,
}

/// Decode a non-2xx response body into its trimmed envelope message.
pub fn decode_api_error(body: &[u8]) -> Result<String> {
    let envelope: ApiErrorBody =
        serde_json::from_slice(body).map_err(|_| Error::decode(FALLBACK_MESSAGE))?;
    let message = envelope
        .message
        .split(STACK_MARKER)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    Ok(message)
}

/// Convert a non-2xx response into the crate error, preserving the status.
pub fn api_error(status: u16, body: &[u8]) -> Error {
    match decode_api_error(body) {
        Ok(message) => Error::api(status, message),
        Err(err) => err,
    }
}
