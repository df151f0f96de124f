//! Resolver configuration and resolution from explicit values or environment.

use std::time::Duration;

use serde::Serialize;

use crate::types::{IconError, IconResult};

/// Tabler Icons on jsDelivr.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons/";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ICONKIT_BASE_URL";

/// Environment variable setting a request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "ICONKIT_TIMEOUT_MS";

const DEFAULT_USER_AGENT: &str = concat!("iconkit/", env!("CARGO_PKG_VERSION"));

/// Settings for the HTTP icon source.
#[derive(Debug, Clone, Serialize)]
pub struct ResolverConfig {
    /// Prefix for icon URLs; always ends with `/`.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Build a config with the given base URL, validating it.
    pub fn with_base_url(base_url: &str) -> IconResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Default::default()
        })
    }

    /// Resolve configuration: explicit values first, then environment, then defaults.
    pub fn resolve(base_url: Option<&str>, timeout_ms: Option<u64>) -> IconResult<Self> {
        let base_url = match base_url {
            Some(url) => url.to_string(),
            None => std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };

        let timeout_ms = match timeout_ms {
            Some(ms) => Some(ms),
            None => match std::env::var(TIMEOUT_ENV) {
                Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                    IconError::Config(format!("{TIMEOUT_ENV}={raw:?} is not a valid timeout: {e}"))
                })?),
                Err(_) => None,
            },
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            timeout_ms,
            ..Default::default()
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// URL of the SVG file for an icon name.
    pub fn icon_url(&self, name: &str) -> String {
        format!("{}{name}.svg", self.base_url)
    }
}

/// Check that the base URL is an absolute http(s) URL and ends with `/`.
fn normalize_base_url(raw: &str) -> IconResult<String> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| IconError::Config(format!("invalid base URL {raw:?}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(IconError::Config(format!(
            "base URL must use http or https, got {:?}",
            parsed.scheme()
        )));
    }

    let mut base = raw.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}
