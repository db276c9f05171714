//! Attribute schema published to the host
//!
//! Each service declares its configuration surface as a tree of typed
//! attributes with required/optional/computed/sensitive flags. The tree
//! is packed through the codec and consumed opaquely by the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// UTF-8 string
    String,
    /// Signed integer
    Int,
    /// Boolean
    Bool,
    /// Nested attribute map
    Map,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// One schema attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Human-readable description
    pub description: String,
    /// Must be set by the operator
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// May be omitted by the operator
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// Populated by the provider, not the operator
    #[serde(default, skip_serializing_if = "is_false")]
    pub computed: bool,
    /// Redacted in host output
    #[serde(default, skip_serializing_if = "is_false")]
    pub sensitive: bool,
    /// Child attributes (Map kind only)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Attribute {
    fn new(kind: AttributeKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            attributes: BTreeMap::new(),
        }
    }

    /// String attribute
    pub fn string(description: impl Into<String>) -> Self {
        Self::new(AttributeKind::String, description)
    }

    /// Integer attribute
    pub fn int(description: impl Into<String>) -> Self {
        Self::new(AttributeKind::Int, description)
    }

    /// Boolean attribute
    pub fn bool(description: impl Into<String>) -> Self {
        Self::new(AttributeKind::Bool, description)
    }

    /// Nested attribute map
    pub fn map(description: impl Into<String>) -> Self {
        Self::new(AttributeKind::Map, description)
    }

    /// Mark required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark optional
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark computed
    #[must_use]
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Mark sensitive
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Add a child attribute (Map kind)
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }
}

/// Schema published by a provider or resource service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Service description
    pub description: String,
    /// Top-level attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// New empty schema
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add a top-level attribute
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }
}
