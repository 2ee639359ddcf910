use chrono::Utc;
use tabled::Table;

use crate::{
    config, error, info,
    station::StationClient,
    success,
    types::PlayEventTableRow,
    utils,
};

pub async fn history(station: Option<String>, window_hours: Option<u32>) {
    let slug = station.unwrap_or_else(config::station_slug);
    let window_hours = match window_hours {
        Some(hours) => hours,
        None => match config::window_hours() {
            Ok(hours) => hours,
            Err(e) => error!("{}", e),
        },
    };

    let since = match utils::window_start(Utc::now(), window_hours) {
        Ok(since) => since,
        Err(e) => error!("{}", e),
    };
    info!(
        "Fetching {} history since {} UTC…",
        slug,
        since.format("%Y-%m-%d %H:%M:%S")
    );

    let events = match StationClient::from_env()
        .history(&slug, since.timestamp_millis())
        .await
    {
        Ok(events) => events,
        Err(e) => error!("Failed to fetch station history: {}", e),
    };

    if events.is_empty() {
        info!("No tracks found.");
        return;
    }

    let rows: Vec<PlayEventTableRow> = events
        .into_iter()
        .map(|e| PlayEventTableRow {
            artist: e.artist,
            title: e.title,
        })
        .collect();
    let count = rows.len();

    println!("{}", Table::new(rows));
    success!("{} tracks played in the last {}h", count, window_hours);
}
