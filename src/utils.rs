use std::{collections::HashSet, hash::Hash};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{Res, types::PlayEvent};

/// Maximum number of items the playlist endpoints accept per call.
pub const PLAYLIST_BATCH_SIZE: usize = 100;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Start of the history window ending at `now`.
///
/// Fails instead of panicking when the window reaches before the earliest
/// representable date.
pub fn window_start(now: DateTime<Utc>, window_hours: u32) -> Res<DateTime<Utc>> {
    now.checked_sub_signed(Duration::hours(window_hours as i64))
        .ok_or_else(|| format!("History window of {window_hours}h is out of range").into())
}

/// Start of the history window as epoch milliseconds.
pub fn window_start_ms(now: DateTime<Utc>, window_hours: u32) -> Res<i64> {
    Ok(window_start(now, window_hours)?.timestamp_millis())
}

/// Field-scoped catalog query for a play event. Both fields pass through verbatim.
pub fn search_query(event: &PlayEvent) -> String {
    format!("artist:{} track:{}", event.artist, event.title)
}

/// Removes duplicates, keeping the first occurrence of each item in place.
pub fn dedup_preserving_order<T>(items: &mut Vec<T>)
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

/// Splits items into playlist-sized batches. The first batch replaces, the rest append.
pub fn playlist_batches<T>(items: &[T]) -> std::slice::Chunks<'_, T> {
    items.chunks(PLAYLIST_BATCH_SIZE)
}
