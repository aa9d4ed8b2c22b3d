//! Space operations for Confluence API.

use serde_json::Value;
use tracing::{debug, info};

use super::{API_V1, ConfluenceClient, require, segment};
use crate::error::ConfluenceError;
use crate::transport::Transport;
use crate::types::{GetAllSpacesResponse, SpaceDetails};

impl<T: Transport> ConfluenceClient<T> {
    /// Look up a space by key and return its id and name.
    pub fn get_space_id(&self, space_key: &str) -> Result<SpaceDetails, ConfluenceError> {
        require(space_key, "space_key")?;

        info!("Getting space {}", space_key);
        self.get_json(&space_url(space_key), "space")
    }

    /// Fetch the raw space record.
    pub fn get_space_details(&self, space_key: &str) -> Result<Value, ConfluenceError> {
        require(space_key, "space_key")?;

        info!("Getting details for space {}", space_key);
        self.get_json(&space_url(space_key), "space")
    }

    /// List spaces visible to the authenticated user.
    pub fn get_all_spaces(&self) -> Result<GetAllSpacesResponse, ConfluenceError> {
        let spaces: GetAllSpacesResponse = self.get_json(&format!("{API_V1}/space"), "spaces")?;
        debug!("Found {} spaces", spaces.results.len());
        Ok(spaces)
    }
}

fn space_url(space_key: &str) -> String {
    format!("{API_V1}/space/{}", segment(space_key))
}
