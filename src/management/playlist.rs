use crate::{
    info,
    spotify::SpotifyClient,
    success,
    types::{CreatePlaylistRequest, TrackRef},
    utils,
};

/// Owns the destination playlist of a run.
///
/// The playlist id is never stored here: [`PlaylistManager::ensure`] returns
/// it and the caller passes it on to [`PlaylistManager::apply`].
pub struct PlaylistManager<'a> {
    spotify: &'a SpotifyClient,
    name: String,
    description: String,
}

impl<'a> PlaylistManager<'a> {
    pub fn new(spotify: &'a SpotifyClient, name: String, description: String) -> Self {
        Self {
            spotify,
            name,
            description,
        }
    }

    /// Returns the configured playlist, or creates a private one owned by
    /// the current user when none is configured.
    ///
    /// The boolean is `true` when a playlist was created.
    pub async fn ensure(&self, handle: Option<&str>) -> Result<(String, bool), reqwest::Error> {
        if let Some(id) = handle.filter(|id| !id.is_empty()) {
            return Ok((id.to_string(), false));
        }

        let user = self.spotify.current_user().await?;
        let request = CreatePlaylistRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            public: false,
            collaborative: false,
        };
        let playlist = self.spotify.create_playlist(&user.id, &request).await?;

        success!("Created playlist {} ({})", playlist.name, playlist.id);
        Ok((playlist.id, true))
    }

    /// Writes `refs` into the playlist in batches of 100.
    ///
    /// The first batch replaces all current items, later batches are
    /// appended. Nothing is sent when `refs` is empty, so the playlist keeps
    /// its content. Batches applied before a failure stay applied.
    ///
    /// Returns the number of URIs written.
    pub async fn apply(&self, playlist_id: &str, refs: &[TrackRef]) -> Result<usize, reqwest::Error> {
        let uris: Vec<String> = refs.iter().map(|r| r.as_str().to_string()).collect();

        for (index, chunk) in utils::playlist_batches(&uris).enumerate() {
            if index == 0 {
                self.spotify.replace_items(playlist_id, chunk).await?;
            } else {
                self.spotify.add_items(playlist_id, chunk).await?;
            }
            info!("Wrote batch {} ({} tracks)", index + 1, chunk.len());
        }

        Ok(uris.len())
    }
}
