use crate::types::{
    CreatePlaylistRequest, CreatePlaylistResponse, CurrentUser, PlaylistItemsRequest,
    PlaylistSnapshotResponse,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves the profile of the user the token belongs to.
    pub async fn current_user(&self) -> Result<CurrentUser, reqwest::Error> {
        let response = self
            .client
            .get(self.url("/me"))
            .bearer_auth(self.token())
            .send()
            .await?
            .error_for_status()?;

        response.json::<CurrentUser>().await
    }

    /// Creates a playlist owned by `user_id`.
    ///
    /// # Example
    ///
    /// ```
    /// let request = CreatePlaylistRequest {
    ///     name: "Lifewithjohnmayer – Last 12h".to_string(),
    ///     description: "Auto-updated by xmsync".to_string(),
    ///     public: false,
    ///     collaborative: false,
    /// };
    /// let playlist = spotify.create_playlist(&user.id, &request).await?;
    /// ```
    pub async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, reqwest::Error> {
        let api_url = self.url(&format!("/users/{user_id}/playlists"));

        let response = self
            .client
            .post(&api_url)
            .bearer_auth(self.token())
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        response.json::<CreatePlaylistResponse>().await
    }

    /// Replaces every item of the playlist with `uris` (at most 100).
    pub async fn replace_items(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<PlaylistSnapshotResponse, reqwest::Error> {
        let api_url = self.url(&format!("/playlists/{playlist_id}/tracks"));

        let response = self
            .client
            .put(&api_url)
            .bearer_auth(self.token())
            .json(&PlaylistItemsRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await?
            .error_for_status()?;

        response.json::<PlaylistSnapshotResponse>().await
    }

    /// Appends `uris` (at most 100) to the end of the playlist.
    pub async fn add_items(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<PlaylistSnapshotResponse, reqwest::Error> {
        let api_url = self.url(&format!("/playlists/{playlist_id}/tracks"));

        let response = self
            .client
            .post(&api_url)
            .bearer_auth(self.token())
            .json(&PlaylistItemsRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await?
            .error_for_status()?;

        response.json::<PlaylistSnapshotResponse>().await
    }
}
