use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Swagger 2.0 schema: either a `$ref` pointer or an inline description.
///
/// Property descriptors, body schemas and definitions all share this shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

impl Schema {
    /// Name of the referenced definition: the last segment of `$ref`.
    pub fn ref_name(&self) -> Option<&str> {
        self.reference.as_deref().and_then(ref_name)
    }

    /// The direct `type`, else the referenced definition name.
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_deref().or_else(|| self.ref_name())
    }

    /// The `$ref` reachable from this schema: its own, or its array `items`' one.
    pub fn reachable_ref(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .or_else(|| self.items.as_ref().and_then(|i| i.reference.as_deref()))
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|r| r == field)
    }
}

/// Last non-empty segment of a `$ref` pointer.
pub fn ref_name(reference: &str) -> Option<&str> {
    reference.rsplit('/').next().filter(|s| !s.is_empty())
}
