//! # Spotify Integration Module
//!
//! This module is the integration layer between xmsync and the Spotify Web
//! API. It covers exactly what a sync needs: authorization, track search and
//! playlist writes.
//!
//! ## Architecture
//!
//! ```text
//! Command Layer (cli::sync, cli::auth)
//!          ↓
//! Management Layer (resolver, PlaylistManager, TokenManager)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code + PKCE)
//!     ├── Search (field-scoped track lookup)
//!     └── Playlist Operations (current user, create, replace, append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `GET /search` - Best single track match for a query
//! - `GET /me` - Current user, owner of created playlists
//! - `POST /users/{user_id}/playlists` - Create a private playlist
//! - `PUT /playlists/{playlist_id}/tracks` - Replace all items
//! - `POST /playlists/{playlist_id}/tracks` - Append items
//! - `POST /api/token` - Code exchange and token refresh
//!
//! ## Error Handling
//!
//! Every call checks the response status with `error_for_status()` and
//! returns `reqwest::Error` on failure. There is no retry and no rate-limit
//! handling: the first failure aborts the run.
//!
//! ## Usage
//!
//! ```rust
//! let spotify = SpotifyClient::new(config::spotify_apiurl(), access_token);
//! let hit = spotify.search_track("artist:John Mayer track:Gravity").await?;
//! let user = spotify.current_user().await?;
//! let playlist = spotify.create_playlist(&user.id, &request).await?;
//! spotify.replace_items(&playlist.id, &uris).await?;
//! ```

pub mod auth;
mod client;
mod playlist;
mod search;

pub use client::SpotifyClient;
