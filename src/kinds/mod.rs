//! Managed resource kinds
//!
//! One module per kind. Each defines the API payload structs mirroring
//! the upstream JSON schema exactly (camelCase ids, `sourceType` /
//! `destinationType` discriminators, snake_case configuration fields),
//! the host-facing state model (all snake_case), the mapping between the
//! two, and the attribute schema published to the host.

pub mod amplitude;
pub mod connection;
pub mod facebook_marketing;
pub mod freshdesk;
pub mod google_analytics;
pub mod google_sheets;
pub mod hubspot;
pub mod mysql;
pub mod pipedrive;
pub mod postgres;
pub mod shopify;
pub mod stripe;
pub mod zendesk_support;


/// Empty state ids are "not created yet"; the API payload carries no
/// field at all in that case.
pub(crate) fn opt(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// `skip_serializing_if` helper for omitempty booleans.
pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}
