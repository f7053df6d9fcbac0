//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

/// Version string of the running build, exposed by `/@version` and used as
/// the cache-busting key in production.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout applied to each outbound GitHub request.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,

    /// Development mode. Changes the `/@version` payload and makes
    /// `/{username}` redirects bust caches on every request.
    pub dev: bool,

    /// Build version reported in production mode.
    pub version: String,

    /// Root directory for static assets.
    pub public_dir: PathBuf,

    /// Base URL of the GitHub REST API.
    pub github_api_url: String,

    /// Base URL serving `/{username}.png` avatars.
    pub github_avatar_url: String,

    /// Optional token sent to the GitHub API.
    pub github_token: Option<String>,

    /// Timeout for each outbound request.
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PROFILATOR_BIND_ADDR`: Server bind address (default: "0.0.0.0:3000")
    /// - `DEV`: Development mode when "true", "1" or "yes"
    /// - `PROFILATOR_PUBLIC_DIR`: Static asset root (default: "public")
    /// - `GITHUB_API_URL`: GitHub API base (default: "https://api.github.com")
    /// - `GITHUB_AVATAR_URL`: Avatar host base (default: "https://github.com")
    /// - `GITHUB_TOKEN`: Bearer token for the GitHub API
    /// - `PROFILATOR_UPSTREAM_TIMEOUT_SECS`: Outbound request timeout (default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PROFILATOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let dev = std::env::var("DEV").is_ok_and(|v| parse_flag(&v));

        let public_dir = std::env::var("PROFILATOR_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let github_api_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| "https://api.github.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let github_avatar_url = std::env::var("GITHUB_AVATAR_URL")
            .unwrap_or_else(|_| "https://github.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let github_token = std::env::var("GITHUB_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let timeout_secs = std::env::var("PROFILATOR_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        tracing::info!(
            bind_addr = %bind_addr,
            dev,
            version = VERSION,
            public_dir = %public_dir.display(),
            github_api_url = %github_api_url,
            github_avatar_url = %github_avatar_url,
            github_token = github_token.is_some(),
            upstream_timeout_secs = timeout_secs,
            "profilator configuration loaded"
        );

        Ok(Self {
            bind_addr,
            dev,
            version: VERSION.to_string(),
            public_dir,
            github_api_url,
            github_avatar_url,
            github_token,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Value of the `v` parameter appended by the cache-busting redirect.
    ///
    /// Production responses are keyed per deployed version; development
    /// responses get a fresh millisecond timestamp on every request.
    pub fn cache_key(&self) -> String {
        if self.dev {
            chrono::Utc::now().timestamp_millis().to_string()
        } else {
            self.version.clone()
        }
    }

    /// Version reported by `/@version`.
    pub fn reported_version(&self) -> &str {
        if self.dev { "DEV" } else { &self.version }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "PROFILATOR_BIND_ADDR",
        "DEV",
        "PROFILATOR_PUBLIC_DIR",
        "GITHUB_API_URL",
        "GITHUB_AVATAR_URL",
        "GITHUB_TOKEN",
        "PROFILATOR_UPSTREAM_TIMEOUT_SECS",
    ];

    /// Helper to run config tests with isolated env vars.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:3000");
            assert!(!config.dev);
            assert_eq!(config.version, VERSION);
            assert_eq!(config.public_dir, PathBuf::from("public"));
            assert_eq!(config.github_api_url, "https://api.github.com");
            assert_eq!(config.github_avatar_url, "https://github.com");
            assert!(config.github_token.is_none());
            assert_eq!(config.upstream_timeout, Duration::from_secs(5));
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("PROFILATOR_BIND_ADDR", "127.0.0.1:9090"),
                ("DEV", "true"),
                ("PROFILATOR_PUBLIC_DIR", "/srv/public"),
                ("GITHUB_API_URL", "http://localhost:8080/"),
                ("GITHUB_AVATAR_URL", "http://localhost:8081/"),
                ("GITHUB_TOKEN", " ghp_abc "),
                ("PROFILATOR_UPSTREAM_TIMEOUT_SECS", "12"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert!(config.dev);
                assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
                assert_eq!(config.github_api_url, "http://localhost:8080");
                assert_eq!(config.github_avatar_url, "http://localhost:8081");
                assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
                assert_eq!(config.upstream_timeout, Duration::from_secs(12));
            },
        );
    }

    #[test]
    fn config_dev_flag_variants() {
        for (value, expected) in [("1", true), ("YES", true), ("false", false), ("", false)] {
            with_env_vars(&[("DEV", value)], || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.dev, expected, "DEV={value:?}");
            });
        }
    }

    #[test]
    fn config_invalid_timeout_falls_back() {
        for value in ["0", "-3", "soon"] {
            with_env_vars(&[("PROFILATOR_UPSTREAM_TIMEOUT_SECS", value)], || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.upstream_timeout, Duration::from_secs(5));
            });
        }
    }

    #[test]
    fn config_blank_token_ignored() {
        with_env_vars(&[("GITHUB_TOKEN", "   ")], || {
            let config = Config::from_env().unwrap();
            assert!(config.github_token.is_none());
        });
    }

    #[test]
    fn reported_version_by_mode() {
        with_env_vars(&[], || {
            let mut config = Config::from_env().unwrap();
            assert_eq!(config.reported_version(), VERSION);
            assert_eq!(config.cache_key(), VERSION);

            config.dev = true;
            assert_eq!(config.reported_version(), "DEV");
            assert!(config.cache_key().parse::<i64>().is_ok());
        });
    }
}
