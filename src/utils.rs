use std::collections::HashMap;

use crate::types::{Artist, TimeRange, TrackArtist};

/// Ranks genre labels across a list of artists by occurrence count,
/// descending. Ties keep first-seen order (the traversal is stable and the
/// sort preserves insertion order for equal counts). Returns at most `limit`
/// labels; empty input yields an empty list.
pub fn rank_genres(artists: &[Artist], limit: usize) -> Vec<String> {
    let mut tally: Vec<(String, usize)> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for artist in artists {
        for genre in &artist.genres {
            match seen.get(genre.as_str()) {
                Some(&i) => tally[i].1 += 1,
                None => {
                    seen.insert(genre.as_str(), tally.len());
                    tally.push((genre.clone(), 1));
                }
            }
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(limit);
    tally.into_iter().map(|(genre, _)| genre).collect()
}

/// Parses a time range argument. Accepts the wire spelling
/// (`short_term`), the hyphenated form, and the bare prefix (`short`),
/// case-insensitively.
pub fn parse_time_range(value: &str) -> Result<TimeRange, String> {
    let normalized = value.trim().to_lowercase().replace('-', "_");
    match normalized.as_str() {
        "short" | "short_term" => Ok(TimeRange::ShortTerm),
        "medium" | "medium_term" => Ok(TimeRange::MediumTerm),
        "long" | "long_term" => Ok(TimeRange::LongTerm),
        other => Err(format!(
            "invalid time range '{}'; expected short_term, medium_term or long_term",
            other
        )),
    }
}

pub fn artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
