//! Configuration management for xmsync.
//!
//! Configuration lives in environment variables. They can be provided by the
//! process environment or by `.env` files, resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`xmsync/.env`)
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::Res;

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_SCOPE: &str = "playlist-modify-public playlist-modify-private";
pub const DEFAULT_STATION_SLUG: &str = "lifewithjohnmayer";
pub const DEFAULT_STATION_API_URL: &str = "https://xmplaylist.com/api";
pub const DEFAULT_WINDOW_HOURS: u32 = 12;
/// Largest accepted history window: one year.
pub const MAX_WINDOW_HOURS: u32 = 8760;
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Auto-updated by xmsync";

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist, then loads
/// `xmsync/.env` from it and finally a `.env` in the working directory.
/// Missing files are skipped. Variables already present in the environment
/// are never overwritten.
///
/// The data directory is platform specific:
/// - Linux: `~/.local/share/xmsync/.env`
/// - macOS: `~/Library/Application Support/xmsync/.env`
/// - Windows: `%LOCALAPPDATA%/xmsync/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the platform-specific data directory of the application.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("xmsync");
    path
}

fn required(key: &str) -> Res<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{key} must be set").into()),
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn or_default(key: &str, default: &str) -> String {
    optional(key).unwrap_or_else(|| default.to_string())
}

/// Returns the Spotify client ID (`SPOTIFY_CLIENT_ID`).
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify client secret (`SPOTIFY_CLIENT_SECRET`), if any.
///
/// Without a secret the authorization flow relies on PKCE alone.
pub fn spotify_client_secret() -> Option<String> {
    optional("SPOTIFY_CLIENT_SECRET")
}

/// Returns the OAuth redirect URI (`SPOTIFY_REDIRECT_URI`).
///
/// Must match the redirect URI registered in the Spotify application and
/// point at the local callback server, e.g. `http://127.0.0.1:8888/callback`.
pub fn spotify_redirect_uri() -> Res<String> {
    required("SPOTIFY_REDIRECT_URI")
}

/// Returns the requested permission scopes (`SPOTIFY_SCOPE`).
pub fn spotify_scope() -> String {
    or_default("SPOTIFY_SCOPE", DEFAULT_SPOTIFY_SCOPE)
}

/// Returns the pre-configured destination playlist (`SPOTIFY_PLAYLIST_ID`).
pub fn spotify_playlist_id() -> Option<String> {
    optional("SPOTIFY_PLAYLIST_ID")
}

pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

pub fn spotify_apiauth_url() -> String {
    or_default("SPOTIFY_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL)
}

pub fn spotify_apitoken_url() -> String {
    or_default("SPOTIFY_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Returns the station whose history is mirrored (`STATION_SLUG`).
pub fn station_slug() -> String {
    or_default("STATION_SLUG", DEFAULT_STATION_SLUG)
}

/// Returns the base URL of the station history API (`STATION_API_URL`).
pub fn station_apiurl() -> String {
    or_default("STATION_API_URL", DEFAULT_STATION_API_URL)
}

/// Returns the size of the history window in hours (`WINDOW_HOURS`).
///
/// # Errors
///
/// Fails when the value is not an integer between 1 and [`MAX_WINDOW_HOURS`].
pub fn window_hours() -> Res<u32> {
    match optional("WINDOW_HOURS") {
        Some(raw) => parse_window_hours(&raw),
        None => Ok(DEFAULT_WINDOW_HOURS),
    }
}

/// Parses a history window size: a whole number of hours between 1 and
/// [`MAX_WINDOW_HOURS`].
pub fn parse_window_hours(raw: &str) -> Res<u32> {
    let hours: u32 = raw
        .trim()
        .parse()
        .map_err(|e| format!("Invalid WINDOW_HOURS '{raw}': {e}"))?;
    if hours == 0 {
        return Err("WINDOW_HOURS must be at least 1".into());
    }
    if hours > MAX_WINDOW_HOURS {
        return Err(format!("WINDOW_HOURS must be at most {MAX_WINDOW_HOURS}").into());
    }
    Ok(hours)
}

/// Returns the name for a newly created playlist (`PLAYLIST_NAME`).
///
/// Defaults to a name derived from the station and window, e.g.
/// `Lifewithjohnmayer – Last 12h`.
pub fn playlist_name(station_slug: &str, window_hours: u32) -> String {
    optional("PLAYLIST_NAME").unwrap_or_else(|| default_playlist_name(station_slug, window_hours))
}

pub fn default_playlist_name(station_slug: &str, window_hours: u32) -> String {
    let mut chars = station_slug.chars();
    let station = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{station} – Last {window_hours}h")
}

/// Returns the description for a newly created playlist (`PLAYLIST_DESCRIPTION`).
pub fn playlist_description() -> String {
    or_default("PLAYLIST_DESCRIPTION", DEFAULT_PLAYLIST_DESCRIPTION)
}

/// Returns the bind address of the local OAuth callback server (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}
