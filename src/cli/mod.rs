//! # CLI Module
//!
//! Command implementations behind the `xmsync` binary. Each command loads
//! what it needs from configuration, calls into the station, Spotify and
//! management layers, and turns failures into a message plus exit code 1.
//!
//! ## Commands
//!
//! - [`auth`] - Authorize xmsync against Spotify and cache the token
//! - [`sync`] - Mirror the station's recent history into the playlist
//! - [`history`] - Show the station's recent history without touching Spotify
//!
//! ## Layers
//!
//! ```text
//! CLI Layer (commands, console output)
//!     ↓
//! Management Layer (TokenManager, resolver, PlaylistManager)
//!     ↓
//! API Layer (station::StationClient, spotify::SpotifyClient)
//!     ↓
//! Network Layer (HTTP requests)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! xmsync auth                             # Authorize once
//! xmsync sync                             # Run from cron every few hours
//! xmsync sync --dry-run                   # Show matches, leave the playlist alone
//! xmsync history --window-hours 2         # What played recently
//! ```

mod auth;
mod history;
pub mod sync;

pub use auth::auth;
pub use history::history;
pub use sync::sync;
