use std::collections::HashSet;

use crate::{
    management::KvStore,
    spotify::{ApiClient, ApiError},
    types::SavedTracksResponse,
};

/// Page size requested from the saved-tracks endpoint.
pub const LIBRARY_PAGE_SIZE: u32 = 50;

/// Defensive bound on cursor pagination. The server's terminal `null`
/// cursor is the normal exit; the cap only converts a cyclic or endless
/// cursor into an error instead of nontermination.
pub const MAX_LIBRARY_PAGES: usize = 500;

impl<S: KvStore> ApiClient<S> {
    /// Walks the cursor-paginated liked-songs listing to exhaustion and
    /// returns the complete set of track ids.
    ///
    /// Each response supplies either the absolute URL of the next page or a
    /// terminal `null`. The result is all-or-nothing: a failure on any page
    /// fails the whole call, never yielding a partially populated set.
    ///
    /// # Errors
    ///
    /// The fetcher taxonomy per page, plus `PaginationExceeded` if the
    /// server keeps producing cursors past [`MAX_LIBRARY_PAGES`].
    pub async fn liked_track_ids(&self) -> Result<HashSet<String>, ApiError> {
        let operation = "liked songs";
        let mut ids = HashSet::new();
        let mut next = Some(format!(
            "{}/me/tracks?limit={}",
            self.base_url(),
            LIBRARY_PAGE_SIZE
        ));
        let mut pages = 0usize;

        while let Some(url) = next {
            if pages == MAX_LIBRARY_PAGES {
                return Err(ApiError::PaginationExceeded { operation, pages });
            }

            let page: SavedTracksResponse = self.get_json_url(operation, &url).await?;
            ids.extend(page.items.into_iter().map(|item| item.track.id));
            next = page.next;
            pages += 1;
        }

        Ok(ids)
    }
}
