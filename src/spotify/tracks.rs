use crate::{
    management::KvStore,
    spotify::{ApiClient, ApiError},
    types::{ArtistTopTracksResponse, AudioFeatures, Track},
};

/// Market used for the artist top-tracks endpoint, which requires one.
const MARKET: &str = "US";

impl<S: KvStore> ApiClient<S> {
    /// Retrieves a single track by id.
    ///
    /// # Errors
    ///
    /// - `SessionExpired` on HTTP 401 (after the session guard has run)
    /// - `RequestFailed` on any other non-2xx status
    /// - `MalformedResponse` when the entity doesn't decode
    pub async fn track_details(&self, track_id: &str) -> Result<Track, ApiError> {
        self.get_json("track details", &format!("/tracks/{track_id}"))
            .await
    }

    /// Retrieves the audio analysis metrics for a single track.
    pub async fn audio_features(&self, track_id: &str) -> Result<AudioFeatures, ApiError> {
        self.get_json("audio features", &format!("/audio-features/{track_id}"))
            .await
    }

    /// Retrieves an artist's most popular tracks, projecting the `tracks`
    /// list out of the response envelope.
    pub async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, ApiError> {
        let response: ArtistTopTracksResponse = self
            .get_json(
                "artist top tracks",
                &format!("/artists/{artist_id}/top-tracks?market={MARKET}"),
            )
            .await?;

        Ok(response.tracks)
    }

    /// Saves a track to the user's liked songs.
    ///
    /// Single authorized PUT; success carries no payload. There is no
    /// optimistic local update — reflecting the change in any locally
    /// cached swipe history is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Same taxonomy as the fetchers; a 401 runs the session guard before
    /// `SessionExpired` is surfaced.
    pub async fn save_track(&self, track_id: &str) -> Result<(), ApiError> {
        self.put_empty("save track", &format!("/me/tracks?ids={track_id}"))
            .await
    }
}
