use chrono::{DateTime, Utc};
use tabled::Table;

use crate::{
    Res, config, error, info,
    management::{PlaylistManager, TokenManager, resolve_track_refs},
    spotify::SpotifyClient,
    station::StationClient,
    success,
    types::{TrackRef, TrackRefTableRow},
    utils, warning,
};

/// Everything a run needs besides the two API clients.
#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub station_slug: String,
    pub window_hours: u32,
    pub playlist_id: Option<String>,
    pub playlist_name: String,
    pub playlist_description: String,
    pub dry_run: bool,
}

impl SyncSettings {
    /// Settings from the environment, with command-line values taking precedence.
    pub fn resolve(
        station: Option<String>,
        window_hours: Option<u32>,
        playlist_id: Option<String>,
        dry_run: bool,
    ) -> Res<Self> {
        let station_slug = station.unwrap_or_else(config::station_slug);
        let window_hours = match window_hours {
            Some(hours) => hours,
            None => config::window_hours()?,
        };

        Ok(Self {
            playlist_name: config::playlist_name(&station_slug, window_hours),
            playlist_description: config::playlist_description(),
            playlist_id: playlist_id.or_else(config::spotify_playlist_id),
            station_slug,
            window_hours,
            dry_run,
        })
    }
}

/// Which path a run took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The station played nothing in the window.
    NoTracks,
    /// Nothing played could be found on Spotify.
    NoMatches { fetched: usize },
    /// Matches were listed but the playlist was not touched.
    DryRun { fetched: usize, refs: Vec<TrackRef> },
    /// The playlist now holds the matches of this run.
    Updated {
        playlist_id: String,
        created: bool,
        fetched: usize,
        applied: usize,
    },
}

/// Runs one sync: fetch history, resolve tracks, write the playlist.
///
/// Empty history and zero matches end the run early without touching the
/// playlist. Any HTTP failure is returned and ends the run where it happened;
/// playlist batches written before it stay written.
pub async fn run(
    station: &StationClient,
    spotify: &SpotifyClient,
    settings: &SyncSettings,
    now: DateTime<Utc>,
) -> Res<SyncOutcome> {
    let since = utils::window_start(now, settings.window_hours)?;
    info!("Fetching since {} UTC…", since.format("%Y-%m-%d %H:%M:%S"));

    let events = station
        .history(&settings.station_slug, since.timestamp_millis())
        .await?;
    if events.is_empty() {
        info!("No tracks found.");
        return Ok(SyncOutcome::NoTracks);
    }
    info!("Found {} played tracks", events.len());

    let refs = resolve_track_refs(spotify, &events).await?;
    if refs.is_empty() {
        warning!("No matches found on Spotify.");
        return Ok(SyncOutcome::NoMatches {
            fetched: events.len(),
        });
    }
    info!("Matched {} of {} tracks", refs.len(), events.len());

    if settings.dry_run {
        let rows: Vec<TrackRefTableRow> = refs
            .iter()
            .enumerate()
            .map(|(i, r)| TrackRefTableRow {
                position: i + 1,
                uri: r.to_string(),
            })
            .collect();
        println!("{}", Table::new(rows));
        info!("Dry run, playlist left untouched.");
        return Ok(SyncOutcome::DryRun {
            fetched: events.len(),
            refs,
        });
    }

    let manager = PlaylistManager::new(
        spotify,
        settings.playlist_name.clone(),
        settings.playlist_description.clone(),
    );
    let (playlist_id, created) = manager.ensure(settings.playlist_id.as_deref()).await?;
    let applied = manager.apply(&playlist_id, &refs).await?;

    success!("Updated playlist {} with {} tracks.", playlist_id, applied);

    Ok(SyncOutcome::Updated {
        playlist_id,
        created,
        fetched: events.len(),
        applied,
    })
}

pub async fn sync(
    station: Option<String>,
    window_hours: Option<u32>,
    playlist_id: Option<String>,
    dry_run: bool,
) {
    let settings = match SyncSettings::resolve(station, window_hours, playlist_id, dry_run) {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run xmsync auth\n Error: {}",
                e
            );
        }
    };

    let token = match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => error!("Failed to refresh token. Please run xmsync auth\n Error: {}", e),
    };

    let station_client = StationClient::from_env();
    let spotify = SpotifyClient::from_env(token);

    if let Err(e) = run(&station_client, &spotify, &settings, Utc::now()).await {
        error!("Sync failed: {}", e);
    }
}
