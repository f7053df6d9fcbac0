//! Profile card route handler.
//!
//! Handles `GET /{username}`. Requests without a `v` parameter are redirected
//! to a versioned URL first, so every card a CDN stores carries a cache key.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, Uri, header};
use axum::response::Response;

use super::{found, not_found, svg_response};
use crate::error::ProfilatorError;
use crate::github::NameLookup;
use crate::render::{ProfileCard, render_profile};
use crate::scale::Scale;
use crate::state::AppState;

/// Query parameters accepted by the card route.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProfileParams {
    /// Cache-busting key.
    pub v: Option<String>,
    /// Raw card scale, normalized by [`Scale::parse`].
    pub scale: Option<String>,
}

impl ProfileParams {
    /// Parse a raw query string. Repeated keys keep their first value and
    /// malformed escapes decode lossily, so parsing never fails.
    pub fn from_query(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return Self::default();
        };
        let first = |name: &str| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };
        Self {
            v: first("v"),
            scale: first("scale"),
        }
    }
}

/// Handle a card request for a GitHub username.
///
/// 1. Redirects to a versioned URL when `v` is missing
/// 2. Resolves the display name, falling through to the 404 handling on a miss
/// 3. Fetches the avatar at a scale-derived size
/// 4. Renders the card
///
/// A path that doesn't decode to a username (e.g. invalid UTF-8) is still
/// redirected, then answered like any other miss.
pub async fn profile_handler(
    State(state): State<AppState>,
    username: Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, ProfilatorError> {
    let params = ProfileParams::from_query(query.as_deref());

    if params.v.is_none() {
        let location = versioned_location(&uri, &state.config.cache_key());
        tracing::debug!(path = %uri.path(), location = %location, "redirecting to versioned url");
        return Ok(found(&location));
    }

    let username = match username {
        Ok(Path(username)) => username,
        Err(rejection) => {
            tracing::debug!(path = %uri.path(), error = %rejection, "undecodable username");
            return Ok(not_found::respond(&headers, uri.path()));
        }
    };

    let scale = Scale::parse(params.scale.as_deref());

    let display_name = match state.source.resolve_name(&username).await {
        NameLookup::Found(name) => name,
        NameLookup::NotFound => return Ok(not_found::respond(&headers, uri.path())),
    };

    let avatar = state
        .source
        .fetch_avatar(&username, scale.avatar_size())
        .await?;
    let image = avatar.data_uri();

    let svg = render_profile(&ProfileCard {
        username: &username,
        display_name: &display_name,
        image: &image,
        scale,
    });

    tracing::debug!(username = %username, scale = scale.get(), bytes = svg.len(), "card rendered");

    let etag = etag(&svg);
    let mut response = svg_response(svg);
    if let Ok(val) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(header::ETAG, val);
    }

    Ok(response)
}

/// Same path and query with `v={key}` appended.
fn versioned_location(uri: &Uri, key: &str) -> String {
    match uri.query().filter(|q| !q.is_empty()) {
        Some(query) => format!("{}?{query}&v={key}", uri.path()),
        None => format!("{}?v={key}", uri.path()),
    }
}

/// Strong ETag (xxHash of the body).
fn etag(body: &str) -> String {
    let hash = xxhash_rust::xxh3::xxh3_64(body.as_bytes());
    format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()))
}
