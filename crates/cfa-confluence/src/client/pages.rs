//! Page operations for Confluence API.

use tracing::{debug, info};

use super::{API_V1, API_V2, ConfluenceClient, require, segment};
use crate::error::ConfluenceError;
use crate::transport::Transport;
use crate::types::{
    AvailableParentsResponse, ContentWithAncestors, CreatePageRequest, PageResponse,
};

impl<T: Transport> ConfluenceClient<T> {
    /// Create a page from storage-format markup.
    pub fn create_page(
        &self,
        request: &CreatePageRequest,
    ) -> Result<PageResponse, ConfluenceError> {
        require(&request.space_id, "spaceId")?;

        info!(
            "Creating page {:?} in space {}",
            request.title.as_deref().unwrap_or_default(),
            request.space_id
        );

        let page: PageResponse =
            self.post_json(&format!("{API_V2}/pages"), &request.to_wire(), "created page")?;
        info!("Created page {} (v{})", page.id, page.version.number);
        Ok(page)
    }

    /// Fetch content with its ancestor chain.
    ///
    /// The direct parent is [`ContentWithAncestors::parent_id`].
    pub fn get_parent_id(
        &self,
        content_id: &str,
    ) -> Result<ContentWithAncestors, ConfluenceError> {
        require(content_id, "content_id")?;

        let url = format!(
            "{API_V1}/content/{}?expand=ancestors",
            segment(content_id)
        );
        let content: ContentWithAncestors = self.get_json(&url, "content")?;
        debug!(
            "Content {} has {} ancestors",
            content.id,
            content.ancestors.len()
        );
        Ok(content)
    }

    /// List the current pages of a space that can act as a parent.
    pub fn get_available_parents(
        &self,
        space_id: &str,
    ) -> Result<AvailableParentsResponse, ConfluenceError> {
        require(space_id, "space_id")?;

        let url = format!("{API_V2}/spaces/{}/pages", segment(space_id));
        let pages: AvailableParentsResponse = self.get_json(&url, "space pages")?;
        let total = pages.results.len();
        let parents = pages.retain_current();
        debug!(
            "Space {}: {} of {} pages are current",
            space_id,
            parents.results.len(),
            total
        );
        Ok(parents)
    }
}
