//! Authentication module
//!
//! Airbyte Cloud authenticates with an opaque bearer token in the
//! `Authorization` header. Operators paste the credential with or without
//! the `Bearer ` prefix; [`normalize_bearer`] makes the header form
//! canonical and is re-applied on every request.

use serde::{Deserialize, Serialize};


/// Ensure a raw credential carries the `Bearer ` prefix exactly once.
///
/// Empty input stays empty; input already starting with the literal
/// `Bearer` is returned unchanged; anything else gets the prefix
/// prepended. The token structure itself is not validated.
pub fn normalize_bearer(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    if token.starts_with("Bearer") {
        return token.to_string();
    }
    format!("Bearer {token}")
}

/// Credentials the provider republishes to each resource adapter through
/// the framework Configure call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Base URL of the Airbyte Cloud API
    pub host: String,
    /// Bearer token, raw or already prefixed
    pub authorization: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(host: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            authorization: authorization.into(),
        }
    }
}
