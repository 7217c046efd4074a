//! Configuration management for Swipefy.
//!
//! Loads configuration from environment variables and a `.env` file in the
//! platform-specific local data directory. Every accessor falls back to a
//! sensible default so the CLI runs with zero setup; overrides exist mainly
//! for pointing the client at a different API endpoint.

use std::{env, path::PathBuf};

/// Default base URL of the Spotify Web API.
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file under `swipefy/.env`:
/// - Linux: `~/.local/share/swipefy/.env`
/// - macOS: `~/Library/Application Support/swipefy/.env`
/// - Windows: `%LOCALAPPDATA%/swipefy/.env`
///
/// A missing file is not an error; the defaults apply.
pub async fn load_env() {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        let _ = async_fs::create_dir_all(parent).await;
    }

    let _ = dotenv::from_path(path);
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, falling back to the
/// public API endpoint. The value is injected into the API client at
/// construction time, so tests can point it at a local mock server instead.
pub fn api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the application's directory under the platform data dir.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("swipefy");
    path
}

/// Returns the directory backing the on-disk key-value store.
pub fn store_dir() -> PathBuf {
    data_dir().join("store")
}
