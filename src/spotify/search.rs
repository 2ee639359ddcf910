use crate::types::{SearchResponse, Track};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches the catalog for the single best track matching `query`.
    ///
    /// The query is sent as-is with `type=track` and `limit=1`, so field
    /// filters such as `artist:` and `track:` are interpreted by Spotify.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Track))` - The first hit
    /// - `Ok(None)` - No match; misses are normal for radio metadata
    /// - `Err(reqwest::Error)` - Network, auth or API error
    pub async fn search_track(&self, query: &str) -> Result<Option<Track>, reqwest::Error> {
        let response = self
            .client
            .get(self.url("/search"))
            .bearer_auth(self.token())
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchResponse>().await?;

        Ok(json.tracks.and_then(|t| t.items.into_iter().next()))
    }
}
