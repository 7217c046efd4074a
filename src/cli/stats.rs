use tabled::Table;

use crate::{
    info,
    types::{
        Artist, ArtistTableRow, FeatureTableRow, GenreTableRow, TimeRange, Track, TrackTableRow,
    },
    utils,
};

pub async fn stats(range: TimeRange, tracks: bool, artists: bool, genres: bool, limit: usize) {
    let (client, _store) = super::build_client();

    if tracks {
        match client.top_tracks(range).await {
            Ok(tracks) => print_tracks(&tracks),
            Err(e) => super::fail("Failed to fetch top tracks", e),
        }
        return;
    }

    if artists {
        match client.top_artists(range).await {
            Ok(artists) => print_artists(&artists),
            Err(e) => super::fail("Failed to fetch top artists", e),
        }
        return;
    }

    if genres {
        match client.top_genres(range).await {
            Ok(genres) => print_genres(&genres),
            Err(e) => super::fail("Failed to fetch top genres", e),
        }
        return;
    }

    match client.summary(range, limit).await {
        Ok(summary) => {
            info!("Top tracks ({})", range);
            print_tracks(&summary.top_tracks);
            info!("Top artists ({})", range);
            print_artists(&summary.top_artists);
        }
        Err(e) => super::fail("Failed to fetch summary", e),
    }
}

pub async fn recent(limit: u32) {
    let (client, _store) = super::build_client();

    match client.recently_played(limit).await {
        Ok(tracks) => print_tracks(&tracks),
        Err(e) => super::fail("Failed to fetch recently played tracks", e),
    }
}

pub async fn track(id: String) {
    let (client, _store) = super::build_client();

    let details = match client.track_details(&id).await {
        Ok(details) => details,
        Err(e) => super::fail("Failed to fetch track details", e),
    };
    let features = match client.audio_features(&id).await {
        Ok(features) => features,
        Err(e) => super::fail("Failed to fetch audio features", e),
    };

    info!(
        "{} — {} ({})",
        details.name,
        utils::artist_names(&details.artists),
        details.album.name
    );
    if let Some(url) = &details.preview_url {
        info!("Preview: {}", url);
    }

    let rows = vec![
        feature_row("danceability", features.danceability),
        feature_row("energy", features.energy),
        feature_row("acousticness", features.acousticness),
        feature_row("liveness", features.liveness),
        feature_row("tempo", features.tempo),
        feature_row("loudness", features.loudness),
        feature_row("speechiness", features.speechiness),
        feature_row("valence", features.valence),
    ];
    println!("{}", Table::new(rows));
}

fn feature_row(metric: &str, value: f64) -> FeatureTableRow {
    FeatureTableRow {
        metric: metric.to_string(),
        value: format!("{:.3}", value),
    }
}

fn print_tracks(tracks: &[Track]) {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: utils::artist_names(&t.artists),
            album: t.album.name.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn print_artists(artists: &[Artist]) {
    let rows: Vec<ArtistTableRow> = artists
        .iter()
        .map(|a| ArtistTableRow {
            name: a.name.clone(),
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn print_genres(genres: &[String]) {
    let rows: Vec<GenreTableRow> = genres
        .iter()
        .enumerate()
        .map(|(i, genre)| GenreTableRow {
            rank: (i + 1).to_string(),
            genre: genre.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
