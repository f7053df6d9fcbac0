//! Catch-all for anything no other route handled.

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use super::svg_response;
use crate::classify::classify;
use crate::render::{DefaultProfile, not_found};

/// Router fallback.
pub async fn not_found_handler(uri: Uri, headers: HeaderMap) -> Response {
    respond(&headers, uri.path())
}

/// Pick the miss representation for this client.
///
/// Image proxies and clients that don't want HTML get the default 404 card
/// with a 200 status, so embedded cards never show as broken images.
/// Everyone else gets the HTML 404 page.
pub fn respond(headers: &HeaderMap, path: &str) -> Response {
    let client = classify(headers);

    if client.wants_image() {
        tracing::debug!(
            path = %path,
            image_proxy = client.is_image_proxy_bot,
            "miss served as 404 card"
        );
        return svg_response(DefaultProfile::NotFound.svg());
    }

    (StatusCode::NOT_FOUND, not_found::render(path)).into_response()
}
