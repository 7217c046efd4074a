use crate::{
    management::KvStore,
    spotify::{ApiClient, ApiError},
    types::{Artist, ListeningSummary, RecentlyPlayedResponse, TimeRange, TopItemsResponse, Track},
    utils,
};

/// Fixed fetch size for the top-items endpoints.
pub const TOP_ITEMS_LIMIT: u32 = 10;

/// Number of genre labels reported by the genre aggregation.
pub const TOP_GENRES_LIMIT: usize = 5;

impl<S: KvStore> ApiClient<S> {
    /// Retrieves the user's top tracks for a time window.
    ///
    /// Issues a single authorized GET to `/me/top/tracks` and projects the
    /// `items` list out of the response envelope.
    ///
    /// # Errors
    ///
    /// - `SessionExpired` on HTTP 401 (after the session guard has run)
    /// - `RequestFailed` on any other non-2xx status
    /// - `MalformedResponse` when the envelope lacks `items`
    ///
    /// Never retried; the caller owns retry policy.
    pub async fn top_tracks(&self, range: TimeRange) -> Result<Vec<Track>, ApiError> {
        let page: TopItemsResponse<Track> = self
            .get_json(
                "top tracks",
                &format!("/me/top/tracks?time_range={range}&limit={TOP_ITEMS_LIMIT}"),
            )
            .await?;

        Ok(page.items)
    }

    /// Retrieves the user's top artists for a time window.
    ///
    /// Same contract as [`ApiClient::top_tracks`], against
    /// `/me/top/artists`.
    pub async fn top_artists(&self, range: TimeRange) -> Result<Vec<Artist>, ApiError> {
        let page: TopItemsResponse<Artist> = self
            .get_json(
                "top artists",
                &format!("/me/top/artists?time_range={range}&limit={TOP_ITEMS_LIMIT}"),
            )
            .await?;

        Ok(page.items)
    }

    /// Derives the user's top genres for a time window by tallying the
    /// genre labels of the top artists. Ranking and tie-breaking live in
    /// [`utils::rank_genres`]; this just supplies the artists.
    pub async fn top_genres(&self, range: TimeRange) -> Result<Vec<String>, ApiError> {
        let artists = self.top_artists(range).await?;
        Ok(utils::rank_genres(&artists, TOP_GENRES_LIMIT))
    }

    /// Fetches top tracks and top artists concurrently and truncates each
    /// list to `limit`.
    ///
    /// The two sub-fetches are joined explicitly: if either fails the whole
    /// summary fails, never a partial one.
    pub async fn summary(
        &self,
        range: TimeRange,
        limit: usize,
    ) -> Result<ListeningSummary, ApiError> {
        let (mut top_tracks, mut top_artists) =
            tokio::try_join!(self.top_tracks(range), self.top_artists(range))?;

        top_tracks.truncate(limit);
        top_artists.truncate(limit);

        Ok(ListeningSummary {
            top_tracks,
            top_artists,
        })
    }

    /// Retrieves the user's recently played tracks, newest first, projecting
    /// each play-history entry down to its track.
    pub async fn recently_played(&self, limit: u32) -> Result<Vec<Track>, ApiError> {
        let page: RecentlyPlayedResponse = self
            .get_json(
                "recently played",
                &format!("/me/player/recently-played?limit={limit}"),
            )
            .await?;

        Ok(page.items.into_iter().map(|item| item.track).collect())
    }
}
