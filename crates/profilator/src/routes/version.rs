//! Version script consumed by the landing page.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// `GET /@version` - a script that sets `window.VERSION`.
///
/// Reports the build version, or `DEV` in development mode.
pub async fn version_script(State(state): State<AppState>) -> impl IntoResponse {
    let version = state
        .config
        .reported_version()
        .replace('\\', "\\\\")
        .replace('\'', "\\'");

    (
        [(header::CONTENT_TYPE, "text/javascript")],
        format!("window.VERSION = '{version}';"),
    )
}
