//! SiriusXM to Spotify playlist sync library
//!
//! This library mirrors the recent play history of a SiriusXM station into a
//! Spotify playlist. A run fetches the tracks played in a trailing time window,
//! resolves each one to a Spotify track URI and writes the result into a
//! playlist, replacing whatever the previous run left there.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command implementations (`auth`, `sync`, `history`)
//! - `config` - Configuration loaded from the environment and `.env` files
//! - `management` - Token cache, catalog resolution and playlist management
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client
//! - `station` - Station play-history client
//! - `types` - Data structures shared across modules
//! - `utils` - Pure helpers (PKCE, time window, queries, batching)

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod station;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error so HTTP, configuration and cache failures can
/// all be propagated to the command layer with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching since {} UTC", since);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The process terminates with exit code 1 right after printing. Only the
/// command layer uses this; library code propagates errors instead.
///
/// # Example
///
/// ```
/// error!("Sync failed: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
