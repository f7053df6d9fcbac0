//! Error types for the profile card service.
//!
//! Errors never expose upstream details to the client; they are logged and
//! rendered as short plain-text bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Profile card service error type.
#[derive(Debug, thiserror::Error)]
pub enum ProfilatorError {
    /// The requested user does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),

    /// A call to GitHub failed (network, timeout, bad status, oversized body).
    #[error("upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ProfilatorError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                (StatusCode::BAD_GATEWAY, "Bad Gateway")
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, message).into_response()
    }
}
