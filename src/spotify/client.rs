use reqwest::Client;

use crate::config;

/// Authenticated handle on the Spotify Web API.
///
/// Holds the API base URL and a bearer token that is valid for the duration
/// of one run. Endpoint groups live in sibling modules (`search`, `playlist`).
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    pub(crate) client: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Client for the configured `SPOTIFY_API_URL`.
    pub fn from_env(token: impl Into<String>) -> Self {
        Self::new(config::spotify_apiurl(), token)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}
