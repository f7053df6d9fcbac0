//! Route definitions for the profile card service.
//!
//! ## Routes
//!
//! Checked in this order:
//!
//! - `GET /<asset>` - File under the public asset root, when one exists
//! - `GET /favicon.svg`, `GET /favicon.ico` - Redirect to the default profile
//! - `GET /@profilator` - Example card
//! - `GET /@blank` - Blank card
//! - `GET /@version` - Version script
//! - `GET /{username}` - Profile card (redirects until `v` is set)
//! - anything else - 404 card for image clients, HTML 404 page otherwise

mod defaults;
mod middleware;
mod not_found;
mod profile;
mod version;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

pub use middleware::CACHE_CONTROL;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/favicon.svg", get(defaults::favicon))
        .route("/favicon.ico", get(defaults::favicon))
        .route("/@profilator", get(defaults::profilator))
        .route("/@blank", get(defaults::blank))
        .route("/@version", get(version::version_script))
        .route("/{username}", get(profile::profile_handler))
        .fallback(not_found::not_found_handler)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::serve_static,
        ))
        .layer(axum::middleware::from_fn(middleware::cache_control))
        .with_state(state)
}

/// `302 Found` redirect.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// SVG image response.
fn svg_response(body: impl Into<String>) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], body.into()).into_response()
}
