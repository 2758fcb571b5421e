use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// A response definition. `examples` maps a content type to an example payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, serde_json::Value>,
}

impl Response {
    /// The first example payload, in declared content-type order.
    pub fn first_example(&self) -> Option<&serde_json::Value> {
        self.examples.values().next()
    }
}
