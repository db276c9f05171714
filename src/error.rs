//! Error types for the Airbyte Cloud provider
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The taxonomy separates transport failures (network, timeout, request
//! construction) from upstream application errors (non-2xx with a decoded
//! envelope) and from local (de)serialization failures. Every layer
//! returns the first error it hits; there is no retry or local recovery.

use thiserror::Error;

/// The main error type for the provider
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid provider or resource configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// A required configuration field was absent
    #[error("Missing required config field: {field}")]
    MissingConfigField {
        /// Field name
        field: String,
    },

    /// The configured host is not a parseable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Network, timeout or request-construction failure; no upstream
    /// response was decoded
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ============================================================================
    // Upstream API Errors
    // ============================================================================
    /// Non-2xx response with a decoded error envelope
    #[error("{message}")]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Truncated, trimmed envelope message
        message: String,
    },

    /// Non-2xx response whose body was not a parseable envelope
    #[error("{message}")]
    Decode {
        /// Fixed fallback diagnostic
        message: String,
    },

    /// The kind has no upstream update endpoint
    #[error("update resource is not supported for {kind}")]
    UpdateUnsupported {
        /// Resource kind name
        kind: &'static str,
    },

    /// An operation needed an upstream id before Create assigned one
    #[error("resource {kind} has no upstream id; it must be created first")]
    MissingResourceId {
        /// Resource kind name
        kind: &'static str,
    },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// Local marshal/unmarshal failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Framework Boundary Errors
    // ============================================================================
    /// Malformed payload or dispatch problem at the host boundary
    #[error("Framework error: {message}")]
    Framework {
        /// What was wrong
        message: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Pipe or filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything without a more specific variant
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an upstream API error from a status code and decoded message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a framework boundary error
    pub fn framework(message: impl Into<String>) -> Self {
        Self::Framework {
            message: message.into(),
        }
    }

    /// True for transport-level failures, as opposed to a genuine non-2xx
    /// response decoded from the upstream API.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Io(_))
    }
}

/// Result type alias for the provider
pub type Result<T> = std::result::Result<T, Error>;
