//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::github::{GitHubClient, ProfileSource};

/// Shared application state available to all request handlers.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Identity and avatar lookups.
    pub source: Arc<dyn ProfileSource>,
}

impl AppState {
    /// Create application state backed by the GitHub client.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let github = GitHubClient::new(&config)?;

        tracing::info!(
            dev = config.dev,
            upstream_timeout_secs = config.upstream_timeout.as_secs(),
            "application state initialized"
        );

        Ok(Self::with_source(config, Arc::new(github)))
    }

    /// Create application state with a custom profile source.
    pub fn with_source(config: Config, source: Arc<dyn ProfileSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}
