use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    spotify::SpotifyClient,
    types::{PlayEvent, TrackRef},
    utils,
};

/// Resolves play events to catalog track URIs.
///
/// Each event is searched as `artist:<artist> track:<title>`; the first hit
/// is kept and misses are skipped silently. The result holds no duplicates
/// and keeps the order in which URIs were first seen.
///
/// # Errors
///
/// The first failing search aborts resolution and is returned as is. Matches
/// collected so far are dropped with it.
pub async fn resolve_track_refs(
    spotify: &SpotifyClient,
    events: &[PlayEvent],
) -> Result<Vec<TrackRef>, reqwest::Error> {
    let pb = ProgressBar::new(events.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{pos}/{len}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message("Searching Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut refs: Vec<TrackRef> = Vec::with_capacity(events.len());

    for event in events {
        let query = utils::search_query(event);
        let hit = match spotify.search_track(&query).await {
            Ok(hit) => hit,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        if let Some(track) = hit {
            refs.push(TrackRef(track.uri));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    utils::dedup_preserving_order(&mut refs);

    Ok(refs)
}
