//! GitHub identity and avatar lookups.
//!
//! Every card request makes two sequential calls: one to the REST API for the
//! display name and one to the avatar host for the image. Nothing is cached
//! and nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::header;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ProfilatorError;

/// Maximum avatar body size accepted from the avatar host.
const MAX_AVATAR_BYTES: usize = 5_000_000;

/// Maximum length of a GitHub username.
const MAX_USERNAME_LEN: usize = 39;

const USER_AGENT: &str = concat!("profilator/", env!("CARGO_PKG_VERSION"));

/// Outcome of resolving a username to a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    /// The user exists; holds the name to show on the card.
    Found(String),
    /// The user does not exist or could not be resolved.
    NotFound,
}

/// An avatar ready to embed as a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// MIME type of the image.
    pub mime: String,
    /// Base64 (standard alphabet) encoded image bytes.
    pub base64: String,
}

impl Avatar {
    /// Encode raw image bytes, sniffing the MIME type when none is given.
    pub fn from_bytes(bytes: &[u8], mime: Option<&str>) -> Self {
        let mime = mime
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| detect_image_mime(bytes));
        Self {
            mime: mime.to_string(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// The avatar as a `data:` URI.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Source of user identities and avatars.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Resolve a username to its display name. Any failure is `NotFound`.
    async fn resolve_name(&self, username: &str) -> NameLookup;

    /// Fetch the user's avatar at `size` pixels.
    async fn fetch_avatar(&self, username: &str, size: u32) -> Result<Avatar, ProfilatorError>;
}

/// Whether `username` is a syntactically valid GitHub login: 1-39 ASCII
/// alphanumerics or hyphens, no leading, trailing or doubled hyphen.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !username.starts_with('-')
        && !username.ends_with('-')
        && !username.contains("--")
}

/// Subset of the `GET /users/{username}` response we use.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
    name: Option<String>,
}

impl GitHubUser {
    fn display_name(self) -> String {
        match self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => self.login,
        }
    }
}

/// [`ProfileSource`] backed by the GitHub REST API and avatar host.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    avatar_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.upstream_timeout)
            .connect_timeout(Duration::from_secs(3).min(config.upstream_timeout))
            .build()?;

        Ok(Self {
            http,
            api_url: config.github_api_url.clone(),
            avatar_url: config.github_avatar_url.clone(),
            token: config.github_token.clone(),
        })
    }

    async fn fetch_user(&self, username: &str) -> Result<GitHubUser, reqwest::Error> {
        let mut request = self
            .http
            .get(format!("{}/users/{username}", self.api_url))
            .header(header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request.send().await?.error_for_status()?.json().await
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn resolve_name(&self, username: &str) -> NameLookup {
        if !is_valid_username(username) {
            tracing::debug!(username = %username, "invalid username, skipping lookup");
            return NameLookup::NotFound;
        }

        match self.fetch_user(username).await {
            Ok(user) => NameLookup::Found(user.display_name()),
            Err(err) if err.status() == Some(reqwest::StatusCode::NOT_FOUND) => {
                tracing::debug!(username = %username, "user not found");
                NameLookup::NotFound
            }
            Err(err) => {
                tracing::warn!(username = %username, error = %err, "user lookup failed");
                NameLookup::NotFound
            }
        }
    }

    async fn fetch_avatar(&self, username: &str, size: u32) -> Result<Avatar, ProfilatorError> {
        if !is_valid_username(username) {
            return Err(ProfilatorError::NotFound(username.to_string()));
        }

        let url = format!("{}/{username}.png?size={size}", self.avatar_url);
        let resp = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        let mime = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());

        let bytes = resp.bytes().await?;
        if bytes.len() > MAX_AVATAR_BYTES {
            return Err(ProfilatorError::Internal(anyhow::anyhow!(
                "avatar for {username} is {} bytes, over the {MAX_AVATAR_BYTES} byte limit",
                bytes.len()
            )));
        }

        tracing::debug!(username = %username, size, bytes = bytes.len(), "avatar fetched");
        Ok(Avatar::from_bytes(&bytes, mime.as_deref()))
    }
}

/// Detect MIME type from image bytes (basic magic byte detection).
fn detect_image_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG") {
        "image/png"
    } else if bytes.starts_with(b"\xFF\xD8\xFF") {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.starts_with(b"RIFF") && bytes.get(8..12) == Some(&b"WEBP"[..]) {
        "image/webp"
    } else {
        // GitHub serves PNG for `/{username}.png`
        "image/png"
    }
}
