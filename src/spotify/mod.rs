//! # Spotify Integration Module
//!
//! This module is the complete access layer between Swipefy and the Spotify
//! Web API: it attaches bearer-token authorization to every outbound
//! request, reacts exactly once to session expiration no matter how many
//! requests are in flight, pages through the liked-songs library to
//! completion, and derives the filtered recommendation feed.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Access Layer
//!     ├── Client plumbing (authorization, status triage, decoding)
//!     ├── Statistics (top tracks/artists/genres, summary, recent plays)
//!     ├── Track Operations (details, audio features, save to library)
//!     ├── Library Pager (cursor pagination over liked songs)
//!     └── Recommendations (seed fetch ⋈ liked-set filtering)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Submodules
//!
//! ### Client
//!
//! [`client`] - [`ApiClient`] and the request plumbing every operation
//! shares:
//! - **Token attach**: each request reads the current bearer token from the
//!   injected credential store; no ambient globals
//! - **Status triage**: 401 runs the single-fire session guard and surfaces
//!   [`ApiError::SessionExpired`]; any other non-2xx surfaces
//!   [`ApiError::RequestFailed`] with the operation name
//! - **Strict decoding**: a 2xx body that doesn't match the expected shape
//!   is [`ApiError::MalformedResponse`], handled by callers like any other
//!   request failure
//! - **No automatic retries**: a failure is surfaced exactly once; retry
//!   policy belongs to the caller
//!
//! ### Statistics
//!
//! [`stats`] - Listening statistics over the authenticated user:
//! - **Top Items**: time-ranged top tracks and top artists (fixed limit)
//! - **Genre Ranking**: frequency aggregation over the top artists' labels
//! - **Summary**: concurrent top-tracks + top-artists join, all-or-nothing
//! - **Recent Plays**: play-history listing projected down to tracks
//!
//! ### Track Operations
//!
//! [`tracks`] - Single-entity lookups (track details, audio features,
//! artist top tracks) and the one mutation the feed needs, saving a track
//! to the user's library.
//!
//! ### Library Pager
//!
//! [`library`] - Exhaustive walk of the cursor-paginated saved-tracks
//! listing into a membership set. Trusts the server's terminal cursor but
//! bounds the walk defensively so a cyclic cursor cannot loop forever.
//!
//! ### Recommendations
//!
//! [`recommend`] - Seed-based candidate fetch joined concurrently with the
//! library pager; already-liked tracks are removed by pure set difference
//! and candidate order is preserved.
//!
//! ## Session Expiration Strategy
//!
//! Spotify access tokens expire server-side; the only reliable signal is an
//! HTTP 401. With many requests in flight, each of them will observe that
//! 401 independently. The guard in [`crate::management`] guarantees the
//! expensive reaction — clearing stored credentials, telling the user,
//! navigating back to sign-in — happens exactly once per episode, while
//! every affected request still reports `SessionExpired` to its own caller.
//!
//! ## Error Types
//!
//! All operations return [`ApiError`], which carries the operation name for
//! logging and display. See [`client`] for the full taxonomy.
//!
//! ## Thread Safety
//!
//! [`ApiClient`] handles are cheaply clonable; clones share the credential
//! store and the session guard. All operations are async and safe to run
//! concurrently from multiple tasks.

pub mod client;
pub mod library;
pub mod recommend;
pub mod stats;
pub mod tracks;

pub use client::ApiClient;
pub use client::ApiError;
pub use library::LIBRARY_PAGE_SIZE;
pub use library::MAX_LIBRARY_PAGES;
pub use recommend::REC_FETCH_LIMIT;
pub use stats::TOP_GENRES_LIMIT;
pub use stats::TOP_ITEMS_LIMIT;
