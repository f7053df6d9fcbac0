//! Profilator - GitHub profile cards as SVG images.
//!
//! This crate provides a small HTTP server that renders a profile card for
//! any GitHub user, suitable for embedding in READMEs and web pages. It is
//! designed to be placed behind a CDN: every non-redirect response carries a
//! one-day `s-maxage`.
//!
//! # Architecture
//!
//! - **Scale**: Normalizes the `scale` query parameter into a bounded integer
//! - **Classify**: Decides from `Accept`/`User-Agent` whether a miss gets HTML or an image
//! - **GitHub**: Resolves display names and fetches avatars
//! - **Render**: Splices identity and avatar into the SVG card template
//! - **Routes**: Static assets, fixed routes, the card route and the fallback
//!
//! # URL Pattern
//!
//! ```text
//! GET /{username}?v={cache key}&scale={1..5}
//! ```
//!
//! # Security
//!
//! - Display names and usernames are XML-escaped before they reach the SVG
//! - Usernames are validated before they are placed in upstream URLs
//! - Avatars are embedded as `data:` URIs; the card loads nothing external

pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod render;
pub mod routes;
pub mod scale;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
