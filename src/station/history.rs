use reqwest::Client;

use crate::{
    config,
    types::{HistoryResponse, PlayEvent},
};

/// Number of history entries requested per run.
pub const HISTORY_LIMIT: u32 = 500;

#[derive(Debug, Clone)]
pub struct StationClient {
    client: Client,
    base_url: String,
}

impl StationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for the configured `STATION_API_URL`.
    pub fn from_env() -> Self {
        Self::new(config::station_apiurl())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieves every track played on `slug` since `since_ms` (epoch milliseconds).
    ///
    /// Issues a single request for up to [`HISTORY_LIMIT`] entries.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status or undecodable body. A body
    /// without `tracks` is not an error and yields an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// let station = StationClient::new("https://xmplaylist.com/api");
    /// let events = station.history("lifewithjohnmayer", since_ms).await?;
    /// ```
    pub async fn history(
        &self,
        slug: &str,
        since_ms: i64,
    ) -> Result<Vec<PlayEvent>, reqwest::Error> {
        let api_url = format!(
            "{base}/station/{slug}/history",
            base = self.base_url,
            slug = slug
        );

        let response = self
            .client
            .get(&api_url)
            .query(&[
                ("since", since_ms.to_string()),
                ("limit", HISTORY_LIMIT.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<HistoryResponse>().await?;

        Ok(json.tracks.unwrap_or_default())
    }
}
