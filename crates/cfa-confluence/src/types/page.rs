//! Confluence page types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;

/// Representation name for Confluence storage-format markup.
pub(crate) const STORAGE_REPRESENTATION: &str = "storage";

/// Status of a published, non-archived page.
pub(crate) const CURRENT_STATUS: &str = "current";

/// Input for the `create_page` action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    /// Space the page is created in.
    #[serde(deserialize_with = "de::id")]
    pub space_id: String,
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Parent page. Confluence places the page under the space homepage when absent.
    #[serde(
        default,
        deserialize_with = "de::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,
    /// Page body in storage format.
    pub body: String,
}

impl CreatePageRequest {
    /// Build the v2 `POST /pages` body.
    pub(crate) fn to_wire(&self) -> CreatePageBody<'_> {
        CreatePageBody {
            space_id: &self.space_id,
            status: CURRENT_STATUS,
            title: self.title.as_deref(),
            parent_id: self.parent_id.as_deref(),
            body: StorageWrite {
                representation: STORAGE_REPRESENTATION,
                value: &self.body,
            },
        }
    }
}

/// Wire body for page creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePageBody<'a> {
    space_id: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    body: StorageWrite<'a>,
}

#[derive(Debug, Serialize)]
struct StorageWrite<'a> {
    representation: &'static str,
    value: &'a str,
}

/// Confluence page as returned by REST v2.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Page ID.
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    /// Page status (`current`, `draft`, ...).
    pub status: String,
    /// Page title.
    pub title: String,
    /// Owning space ID.
    #[serde(deserialize_with = "de::id")]
    pub space_id: String,
    /// Parent page ID.
    #[serde(default, deserialize_with = "de::opt_id")]
    pub parent_id: Option<String>,
    /// Account ID of the author.
    pub author_id: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Version information.
    pub version: Version,
    /// Page body content.
    #[serde(default)]
    pub body: Option<Body>,
}

/// Page version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Version {
    /// Version number.
    pub number: u32,
    /// Version message/comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Page body content.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Body {
    /// Storage format content.
    #[serde(default)]
    pub storage: Option<Storage>,
}

/// Storage format representation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Storage {
    /// HTML content in Confluence storage format.
    pub value: String,
    /// Content representation (always "storage").
    pub representation: String,
}

/// Entry of the v2 space pages listing.
///
/// Fields not modelled here are kept in `extra` and serialized back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub status: String,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "de::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub space_id: Option<String>,
    /// `null` for pages at the root of the space.
    #[serde(default, deserialize_with = "de::opt_id")]
    pub parent_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pages of a space that can be used as a parent.
///
/// The listing envelope (`_links`, ...) is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AvailableParentsResponse {
    /// Pages in API response order.
    pub results: Vec<PageSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AvailableParentsResponse {
    /// Drop every page whose status is not `current`.
    #[must_use]
    pub fn retain_current(mut self) -> Self {
        self.results.retain(|page| page.status == CURRENT_STATUS);
        self
    }
}
