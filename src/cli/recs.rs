use tabled::Table;

use crate::{
    info,
    management::{FileStore, KEY_LEFT_SWIPES, KEY_RIGHT_SWIPES, KEY_SWIPE_HINT_SEEN, KvStore},
    success,
    types::{Track, TrackTableRow},
    utils, warning,
};

pub async fn recs(
    seed_tracks: Vec<String>,
    seed_artists: Vec<String>,
    mut seed_genres: Vec<String>,
    like: Option<String>,
    skip: Option<String>,
) {
    let (client, store) = super::build_client();

    // one-time onboarding hint, backed by a session-scoped store flag
    if store.get(KEY_SWIPE_HINT_SEEN).await.is_none() {
        info!("Like a track from the feed with --like <id>, or skip it with --skip <id>.");
        let _ = store.set(KEY_SWIPE_HINT_SEEN, "true").await;
    }

    if seed_tracks.is_empty() && seed_artists.is_empty() && seed_genres.is_empty() {
        seed_genres.push("pop".to_string());
    }

    let pb = super::spinner("Building your feed...");
    let feed = match client
        .recommendations(&seed_tracks, &seed_artists, &seed_genres)
        .await
    {
        Ok(feed) => {
            pb.finish_and_clear();
            feed
        }
        Err(e) => {
            pb.finish_and_clear();
            super::fail("Failed to build recommendation feed", e);
        }
    };

    let mut swiped_away: Vec<String> = Vec::new();

    if let Some(id) = like {
        match feed.iter().find(|t| t.id == id) {
            Some(track) => match client.save_track(&id).await {
                Ok(()) => {
                    push_history(&store, KEY_RIGHT_SWIPES, track).await;
                    swiped_away.push(id);
                    success!("Saved '{}' to your liked songs.", track.name);
                }
                Err(e) => super::fail("Failed to save track", e),
            },
            None => warning!("Track {} is not in the current feed.", id),
        }
    }

    if let Some(id) = skip {
        match feed.iter().find(|t| t.id == id) {
            Some(track) => {
                push_history(&store, KEY_LEFT_SWIPES, track).await;
                swiped_away.push(id);
                info!("Skipped '{}'.", track.name);
            }
            None => warning!("Track {} is not in the current feed.", id),
        }
    }

    let rows: Vec<TrackTableRow> = feed
        .iter()
        .filter(|t| !swiped_away.contains(&t.id))
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: utils::artist_names(&t.artists),
            album: t.album.name.clone(),
        })
        .collect();

    if rows.is_empty() {
        info!("Nothing new to suggest right now. Try different seeds.");
        return;
    }

    println!("{}", Table::new(rows));
}

async fn push_history(store: &FileStore, key: &str, track: &Track) {
    let mut history: Vec<Track> = match store.get(key).await {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        None => Vec::new(),
    };
    history.push(track.clone());

    match serde_json::to_string(&history) {
        Ok(json) => {
            if let Err(e) = store.set(key, &json).await {
                warning!("Failed to record swipe: {}", e);
            }
        }
        Err(e) => warning!("Failed to record swipe: {}", e),
    }
}
