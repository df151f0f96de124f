//! Icon source abstraction and the HTTP implementation backed by reqwest.

use async_trait::async_trait;

use crate::config::ResolverConfig;
use crate::types::{IconError, IconResult};

/// Somewhere raw SVG markup can be obtained from by icon name.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Fetch the raw markup for an icon.
    async fn fetch(&self, name: &str) -> IconResult<String>;
    /// Check whether an icon exists without downloading it.
    async fn exists(&self, name: &str) -> IconResult<bool>;
}

/// Fetches icons over HTTP from `{base_url}{name}.svg`.
#[derive(Clone)]
pub struct CdnSource {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl CdnSource {
    pub fn new(config: ResolverConfig) -> IconResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IconError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

#[async_trait]
impl IconSource for CdnSource {
    async fn fetch(&self, name: &str) -> IconResult<String> {
        let url = self.config.icon_url(name);
        tracing::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IconError::unavailable(name, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IconError::unavailable(name, format!("HTTP {status}")));
        }

        resp.text()
            .await
            .map_err(|e| IconError::unavailable(name, format!("failed to read body: {e}")))
    }

    async fn exists(&self, name: &str) -> IconResult<bool> {
        let url = self.config.icon_url(name);
        tracing::debug!("HEAD {url}");

        let resp = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(|e| IconError::unavailable(name, e.to_string()))?;

        Ok(resp.status().is_success())
    }
}
