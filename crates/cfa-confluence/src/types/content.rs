//! Confluence content types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;

/// Minimal view of a content item (page, blog post, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentSummary {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub title: String,
    /// Content type (`page`, `blogpost`, ...).
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Content listing response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GetAllContentResponse {
    /// Content in API response order.
    pub results: Vec<ContentSummary>,
}

/// Content fetched with `expand=ancestors`.
///
/// Fields not modelled here are kept in `extra` and serialized back
/// unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentWithAncestors {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    /// Ancestors ordered from the space root down to the direct parent.
    #[serde(default)]
    pub ancestors: Vec<ContentSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentWithAncestors {
    /// ID of the direct parent, `None` for top-level content.
    pub fn parent_id(&self) -> Option<&str> {
        self.ancestors.last().map(|a| a.id.as_str())
    }
}
