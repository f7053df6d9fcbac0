//! Fixed routes: favicon redirects and the bundled default cards.

use axum::response::Response;

use super::{found, svg_response};
use crate::render::DefaultProfile;

/// Profile whose card doubles as the site favicon.
pub const FAVICON_PROFILE: &str = "/Bellisario";

/// `GET /favicon.svg` and `GET /favicon.ico`.
pub async fn favicon() -> Response {
    found(FAVICON_PROFILE)
}

/// `GET /@profilator` - example card.
pub async fn profilator() -> Response {
    svg_response(DefaultProfile::Profilator.svg())
}

/// `GET /@blank` - empty card.
pub async fn blank() -> Response {
    svg_response(DefaultProfile::Blank.svg())
}
