//! Content operations for Confluence API.

use tracing::debug;

use super::{API_V1, ConfluenceClient};
use crate::error::ConfluenceError;
use crate::transport::Transport;
use crate::types::GetAllContentResponse;

impl<T: Transport> ConfluenceClient<T> {
    /// List content visible to the authenticated user.
    pub fn get_all_content(&self) -> Result<GetAllContentResponse, ConfluenceError> {
        let content: GetAllContentResponse =
            self.get_json(&format!("{API_V1}/content"), "content list")?;
        debug!("Found {} content items", content.results.len());
        Ok(content)
    }
}
