//! # Station Module
//!
//! Client for the station play-history API (xmplaylist.com). The station side
//! of a sync is read-only: one request returns every track played since a
//! cutoff timestamp.
//!
//! ## API Coverage
//!
//! - `GET /station/{slug}/history?since=<epoch-ms>&limit=500`
//!
//! Only the first page is read. Non-success statuses are returned as errors and
//! abort the run; a body without a `tracks` key means nothing was played.

mod history;

pub use history::HISTORY_LIMIT;
pub use history::StationClient;
