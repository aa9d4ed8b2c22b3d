//! Confluence actions.
//!
//! A small set of Confluence Cloud REST operations exposed as named actions:
//!
//! - [`transport`]: Basic-auth HTTP round trips ([`HttpTransport`])
//! - [`ConfluenceClient`]: one typed method per action
//! - [`actions`]: action table and JSON dispatch with a uniform result
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cfa_config::ConfluenceConfig;
//! use cfa_confluence::{Action, ConfluenceClient, dispatch};
//!
//! let config = ConfluenceConfig::new(
//!     "https://example.atlassian.net",
//!     "dev@example.com",
//!     "api-token",
//! );
//! let client = ConfluenceClient::from_config(&config)?;
//!
//! let space = client.get_space_id("ENG")?;
//! println!("{} -> {}", space.key, space.id);
//!
//! let response = dispatch(&client, Action::GetAllSpaces, serde_json::Value::Null);
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

pub mod actions;
mod client;
mod error;
pub mod transport;
pub mod types;

pub use actions::{Action, ActionError, ActionResponse, dispatch, dispatch_by_name};
pub use client::ConfluenceClient;
pub use error::ConfluenceError;
pub use transport::{HttpTransport, Method, Transport};
pub use types::{
    AvailableParentsResponse, ContentSummary, ContentWithAncestors, CreatePageRequest,
    GetAllContentResponse, GetAllSpacesResponse, PageResponse, PageSummary, SpaceDetails,
    SpaceSummary,
};
