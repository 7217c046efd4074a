use crate::{
    management::KvStore,
    spotify::{ApiClient, ApiError},
    types::{RecommendationsResponse, Track},
};

/// Fixed fetch size for the recommendations endpoint; the feed is capped
/// upstream at this many candidates before filtering.
pub const REC_FETCH_LIMIT: u32 = 30;

impl<S: KvStore> ApiClient<S> {
    /// Builds the recommendation feed for a set of seed ids.
    ///
    /// Fetches seed-based candidates and, concurrently, the user's complete
    /// liked-songs set, then drops every candidate that is already liked.
    /// The survivors keep the order the recommendation endpoint returned
    /// them in.
    ///
    /// The join is explicit and all-or-nothing: if either the seed fetch or
    /// the library pagination fails, the whole call fails. Tracks skipped in
    /// earlier swipe sessions are *not* filtered here — swipe history
    /// belongs to the presentation layer.
    pub async fn recommendations(
        &self,
        seed_tracks: &[String],
        seed_artists: &[String],
        seed_genres: &[String],
    ) -> Result<Vec<Track>, ApiError> {
        let path = format!(
            "/recommendations?seed_tracks={}&seed_artists={}&seed_genres={}&limit={}",
            seed_tracks.join(","),
            seed_artists.join(","),
            seed_genres.join(","),
            REC_FETCH_LIMIT
        );

        let (candidates, liked) = tokio::try_join!(
            async {
                let response: RecommendationsResponse =
                    self.get_json("recommendations", &path).await?;
                Ok::<_, ApiError>(response.tracks)
            },
            self.liked_track_ids()
        )?;

        Ok(candidates
            .into_iter()
            .filter(|track| !liked.contains(&track.id))
            .collect())
    }
}
