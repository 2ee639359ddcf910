//! # API Module
//!
//! HTTP endpoints of the short-lived local server started by `xmsync auth`.
//!
//! - [`callback`] - Receives the authorization code from Spotify's
//!   authorization server and exchanges it for a token using the PKCE
//!   verifier held in shared state.
//! - [`health`] - Reports status and version, handy to check that the
//!   redirect URI points at a running server.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use xmsync::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
