//! Backend location and request settings.

use crate::error::{ApiError, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "GREENSHIFT_API_URL";

/// Request timeout on native targets. Browsers apply their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Parse and normalise a base URL. The path always ends in `/` so that
    /// endpoints join underneath it rather than replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let mut url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout: Some(DEFAULT_TIMEOUT),
        })
    }

    /// Use [`BASE_URL_ENV`] when set and non-empty, else [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL of an endpoint path such as `"calculations"`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}
