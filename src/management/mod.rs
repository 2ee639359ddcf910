mod auth;
mod playlist;
mod resolver;

pub use auth::TokenManager;
pub use playlist::PlaylistManager;
pub use resolver::resolve_track_refs;
