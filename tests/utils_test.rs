use swipefy::types::{Artist, TimeRange, TrackArtist};
use swipefy::utils::*;

// Helper function to create a test artist with a set of genre labels
fn artist_with_genres(id: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("Artist {}", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        images: Vec::new(),
    }
}

#[test]
fn test_rank_genres_orders_by_count_then_first_seen() {
    // pop appears twice; rock and jazz once each, rock seen first
    let artists = vec![
        artist_with_genres("a1", &["pop", "rock"]),
        artist_with_genres("a2", &["pop"]),
        artist_with_genres("a3", &["jazz"]),
    ];

    assert_eq!(rank_genres(&artists, 5), vec!["pop", "rock", "jazz"]);
}

#[test]
fn test_rank_genres_is_deterministic() {
    let artists = vec![
        artist_with_genres("a1", &["indie", "shoegaze", "dream pop"]),
        artist_with_genres("a2", &["shoegaze"]),
        artist_with_genres("a3", &["indie", "dream pop"]),
    ];

    // Pure function - same input twice yields identical output
    assert_eq!(rank_genres(&artists, 5), rank_genres(&artists, 5));
}

#[test]
fn test_rank_genres_truncates_to_limit() {
    let artists = vec![
        artist_with_genres("a1", &["one", "two", "three", "four"]),
        artist_with_genres("a2", &["five", "six", "seven"]),
        artist_with_genres("a3", &["one"]),
    ];

    let ranked = rank_genres(&artists, 5);
    assert_eq!(ranked.len(), 5);
    // the only repeated label ranks first
    assert_eq!(ranked[0], "one");
}

#[test]
fn test_rank_genres_empty_input() {
    assert!(rank_genres(&[], 5).is_empty());

    // artists without genre labels contribute nothing
    let artists = vec![artist_with_genres("a1", &[])];
    assert!(rank_genres(&artists, 5).is_empty());
}

#[test]
fn test_parse_time_range_valid_inputs() {
    assert_eq!(parse_time_range("short_term").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("medium_term").unwrap(), TimeRange::MediumTerm);
    assert_eq!(parse_time_range("long_term").unwrap(), TimeRange::LongTerm);

    // bare prefixes, hyphens, case and surrounding whitespace are tolerated
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("medium-term").unwrap(), TimeRange::MediumTerm);
    assert_eq!(parse_time_range("LONG_TERM").unwrap(), TimeRange::LongTerm);
    assert_eq!(parse_time_range("  long  ").unwrap(), TimeRange::LongTerm);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    let result = parse_time_range("yearly");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid time range"));

    assert!(parse_time_range("").is_err());
}

#[test]
fn test_time_range_display_matches_wire_spelling() {
    assert_eq!(TimeRange::ShortTerm.to_string(), "short_term");
    assert_eq!(TimeRange::MediumTerm.to_string(), "medium_term");
    assert_eq!(TimeRange::LongTerm.to_string(), "long_term");
}

#[test]
fn test_artist_names_joins_in_order() {
    let artists = vec![
        TrackArtist {
            name: "First".to_string(),
        },
        TrackArtist {
            name: "Second".to_string(),
        },
    ];

    assert_eq!(artist_names(&artists), "First, Second");
    assert_eq!(artist_names(&[]), "");
}
