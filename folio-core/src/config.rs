//! Client configuration

use crate::error::{FolioError, Result};
use std::time::Duration;
use url::Url;

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:4730";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "FOLIO_API_URL";

/// Environment variable setting a request timeout in seconds
pub const TIMEOUT_ENV: &str = "FOLIO_TIMEOUT_SECS";

/// Settings for talking to the catalog API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, e.g. `http://localhost:4730`
    pub base_url: Url,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
        })
    }

    /// Defaults overridden by `FOLIO_API_URL` and `FOLIO_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(
            std::env::var(API_URL_ENV).ok().as_deref(),
            std::env::var(TIMEOUT_ENV).ok().as_deref(),
        )
    }

    /// Apply optional raw overrides on top of this config
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self> {
        if let Some(url) = base_url {
            self.base_url = parse_base_url(url)?;
        }
        if let Some(secs) = timeout_secs {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                FolioError::Config(format!(
                    "timeout must be a whole number of seconds, got '{}'",
                    secs
                ))
            })?;
            // Zero disables the timeout
            self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL as shown in user messages, without a trailing slash
    pub fn endpoint(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| FolioError::Config(format!("invalid API URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FolioError::Config(format!(
            "unsupported URL scheme '{}' in '{}'",
            other, raw
        ))),
    }
}
