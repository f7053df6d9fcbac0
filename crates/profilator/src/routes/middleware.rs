//! Request middleware: static assets and cache headers.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Shared cache lifetime for every non-redirect response (one day).
pub const CACHE_CONTROL: &str = "s-maxage=86400";

/// Serve a file from the public asset root when one matches the path,
/// otherwise hand the request to the router.
pub async fn serve_static(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    let mut asset_request = Request::new(Body::empty());
    *asset_request.method_mut() = request.method().clone();
    *asset_request.uri_mut() = request.uri().clone();
    *asset_request.headers_mut() = request.headers().clone();

    let response = match ServeDir::new(&state.config.public_dir).oneshot(asset_request).await {
        Ok(response) => response,
        // ServeDir's default fallback can't fail
        Err(never) => match never {},
    };

    let status = response.status();
    if status.is_success() || status == StatusCode::NOT_MODIFIED {
        tracing::debug!(path = %request.uri().path(), "static asset hit");
        return response.map(Body::new);
    }

    next.run(request).await
}

/// Set the shared cache lifetime on every response except redirects and
/// server errors.
pub async fn cache_control(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let status = response.status();

    if !status.is_redirection() && !status.is_server_error() {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
    }

    response
}
