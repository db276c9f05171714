//! Opaque payload codec
//!
//! Plan, state, config and schema payloads cross the host boundary as
//! base64-encoded JSON so the host never has to understand their shape.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Pack a value into an opaque payload string.
pub fn pack<T: Serialize>(value: &T) -> Result<String> {
    Ok(STANDARD.encode(serde_json::to_vec(value)?))
}

/// Unpack an opaque payload string produced by [`pack`].
pub fn unpack<T: DeserializeOwned>(contents: &str) -> Result<T> {
    let raw = STANDARD
        .decode(contents.trim())
        .map_err(|e| Error::framework(format!("invalid payload encoding: {e}")))?;
    Ok(serde_json::from_slice(&raw)?)
}
