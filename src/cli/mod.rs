//! # CLI Module
//!
//! The command-line interface layer of Swipefy. It plays the role the
//! screens play in a mobile client: every command is a thin caller into the
//! Spotify access layer, plus the presentation-owned state the core stays
//! out of (swipe history, the one-time onboarding hint).
//!
//! ## Commands
//!
//! - [`auth`] / [`logout`] - store or clear the bearer credential
//! - [`stats`] - top tracks, artists, and genres, or the joined summary
//! - [`recent`] - recently played tracks
//! - [`track`] - details and audio features for a single track
//! - [`recs`] - the swipe-style recommendation feed; `--like` saves a
//!   track and records it in the right-swipe history, `--skip` records it
//!   in the left-swipe history
//!
//! ## Session handling
//!
//! The terminal implementations of the session collaborators live in
//! [`session`]: there is no modal to dismiss in a terminal, so the expired
//! prompt is printed and acknowledged in one step, and "navigation" is a
//! pointer at `swipefy auth`. When a command fails with `SessionExpired`
//! the collaborators have already explained everything, so the command
//! exits without a second error message.
//!
//! ## Output
//!
//! Tables via `tabled`, long-running pagination behind an `indicatif`
//! spinner, status lines through the crate's colored output macros.

mod auth;
mod recs;
mod session;
mod stats;

pub use auth::auth;
pub use auth::logout;
pub use recs::recs;
pub use session::TerminalNavigator;
pub use session::TerminalPrompt;
pub use stats::recent;
pub use stats::stats;
pub use stats::track;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    management::FileStore,
    spotify::{ApiClient, ApiError},
};

/// Builds the CLI's API client over the on-disk store, wired to the
/// terminal session collaborators. The store handle is returned alongside
/// because the CLI layer owns swipe history in the same store.
pub(crate) fn build_client() -> (ApiClient<FileStore>, Arc<FileStore>) {
    let store = Arc::new(FileStore::new(config::store_dir()));
    let client = ApiClient::new(
        config::api_url(),
        Arc::clone(&store),
        Arc::new(TerminalPrompt),
        Arc::new(TerminalNavigator),
    );

    (client, store)
}

/// Exits with an error message, except for `SessionExpired` where the
/// session collaborators already told the user what happened.
pub(crate) fn fail(context: &str, err: ApiError) -> ! {
    if matches!(err, ApiError::SessionExpired) {
        std::process::exit(1);
    }

    error!("{}: {}", context, err);
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
