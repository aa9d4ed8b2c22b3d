//! Confluence request and response records.
//!
//! Serde ignores unknown fields from API responses, so each record only
//! declares what the actions return.

mod content;
pub(crate) mod de;
mod page;
mod space;

pub use content::{ContentSummary, ContentWithAncestors, GetAllContentResponse};
pub use page::{
    AvailableParentsResponse, Body, CreatePageRequest, PageResponse, PageSummary, Storage,
    Version,
};
pub use space::{GetAllSpacesResponse, SpaceDetails, SpaceSummary};
