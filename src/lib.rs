//! # Airbyte Cloud Provider Plugin
//!
//! A declarative-infrastructure plugin exposing Airbyte Cloud sources,
//! destinations and connections as managed resources. The host framework
//! drives each resource through a fixed lifecycle
//! (Metadata/Configure/Schema/Create/Read/Update/Delete) over a process
//! boundary; every operation here is a single blocking round trip against
//! the Airbyte Cloud REST API.
//!
//! ## Architecture
//!
//! ```text
//! host framework ──▶ serve() ──▶ AirbyteProvider (configure, one ApiClient)
//!                       │
//!                       └──────▶ ResourceAdapter<M>  (one generic adapter,
//!                                   │                 13 resource kinds)
//!                                   ▼
//!                              ApiClient::create/read/update/delete::<K>()
//!                                   │
//!                                   ▼
//!                     POST/GET/PUT/DELETE /v1/{sources,destinations,connections}
//! ```
//!
//! There is deliberately no retry, pagination, caching or batching layer:
//! the upstream contract is a plain CRUD quartet per kind, and errors
//! propagate to the host on first failure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the provider
pub mod error;

/// Bearer-credential normalization and provider credentials
pub mod auth;

/// HTTP client wrapper and upstream error-envelope decoding
pub mod http;

/// Resource-kind descriptor and the generic CRUD client
pub mod resource;

/// Managed resource kinds (sources, destinations, connections)
pub mod kinds;

/// Host plugin framework boundary: envelopes, codec, schema, server loop
pub mod framework;

/// Provider adapter and the generic resource adapter
pub mod provider;

pub use error::{Error, Result};
pub use http::ApiClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
