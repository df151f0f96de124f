//! The icon resolver: cache lookup, fetch, customize, fallback.

use crate::cache::IconCache;
use crate::config::ResolverConfig;
use crate::markup;
use crate::source::{CdnSource, IconSource};
use crate::suggest;
use crate::types::{
    CustomizationOptions, HtmlOptions, IconError, IconRequest, IconResult, ResourceKey,
};

/// Resolves icon names to customized, cached SVG markup.
///
/// Construct once and share by reference or `Arc`; the cache lives as long
/// as the resolver.
pub struct IconResolver<S = CdnSource> {
    source: S,
    cache: IconCache,
}

impl IconResolver<CdnSource> {
    /// Create a resolver fetching over HTTP with the given configuration.
    pub fn new(config: ResolverConfig) -> IconResult<Self> {
        Ok(Self::with_source(CdnSource::new(config)?))
    }
}

impl<S: IconSource> IconResolver<S> {
    /// Create a resolver over any icon source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            cache: IconCache::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve an icon, falling back to a placeholder glyph on any failure.
    pub async fn resolve(&self, name: &str, options: &CustomizationOptions) -> String {
        match self.try_resolve(name, options).await {
            Ok(svg) => svg,
            Err(e) => {
                tracing::warn!("Error fetching icon \"{name}\": {e}");
                markup::fallback_icon(name)
            }
        }
    }

    pub async fn resolve_request(&self, request: &IconRequest) -> String {
        self.resolve(&request.name, &request.options).await
    }

    /// Resolve an icon, returning the failure instead of the fallback.
    ///
    /// Only successful results are cached.
    pub async fn try_resolve(
        &self,
        name: &str,
        options: &CustomizationOptions,
    ) -> IconResult<String> {
        if name.trim().is_empty() {
            return Err(IconError::InvalidName(name.to_string()));
        }
        options.validate()?;

        let key = ResourceKey::new(name, options);
        if let Some(svg) = self.cache.get(&key) {
            tracing::debug!("Cache hit for icon \"{name}\"");
            return Ok(svg);
        }

        tracing::debug!("Cache miss for icon \"{name}\", fetching");
        let raw = self.source.fetch(name).await?;
        let svg = markup::customize(&raw, options);
        self.cache.insert(key, svg.clone());

        Ok(svg)
    }

    /// Apply customization to arbitrary markup. No I/O.
    pub fn customize(&self, svg: &str, options: &CustomizationOptions) -> String {
        markup::customize(svg, options)
    }

    /// All `<path>` elements of an icon with default options.
    ///
    /// Empty when the icon has no paths or cannot be fetched.
    pub async fn get_paths(&self, name: &str) -> Vec<String> {
        match self.try_resolve(name, &CustomizationOptions::default()).await {
            Ok(svg) => markup::extract_paths(&svg),
            Err(e) => {
                tracing::warn!("Error getting paths for \"{name}\": {e}");
                Vec::new()
            }
        }
    }

    /// Resolve an icon and optionally wrap it in a container element.
    pub async fn to_html(&self, name: &str, options: &HtmlOptions) -> String {
        let svg = self.resolve(name, &options.icon_options()).await;

        match options.wrapper.as_deref().filter(|w| !w.is_empty()) {
            Some(tag) => markup::wrap_html(&svg, tag, options.wrapper_class.as_deref()),
            None => svg,
        }
    }

    /// Suggest related icon names for a keyword. No I/O.
    pub fn suggest(&self, keyword: &str) -> Vec<String> {
        suggest::suggest(keyword)
    }

    /// Check whether an icon exists at the source. False on any error.
    pub async fn is_available(&self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        match self.source.exists(name).await {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!("Availability check for \"{name}\" failed: {e}");
                false
            }
        }
    }

    /// The placeholder markup used when an icon cannot be obtained.
    pub fn fallback_icon(&self, name: &str) -> String {
        markup::fallback_icon(name)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" stroke-width="2"><path d="M12 17.75l-6.172 3.245" /></svg>"#;

    /// Serves `STAR` for "star", fails everything else.
    #[derive(Default)]
    struct StarSource {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl IconSource for StarSource {
        async fn fetch(&self, name: &str) -> IconResult<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if name == "star" {
                Ok(STAR.to_string())
            } else {
                Err(IconError::unavailable(name, "HTTP 404 Not Found"))
            }
        }

        async fn exists(&self, name: &str) -> IconResult<bool> {
            Ok(name == "star")
        }
    }

    fn resolver() -> IconResolver<StarSource> {
        IconResolver::with_source(StarSource::default())
    }

    #[tokio::test]
    async fn test_resolve_caches() {
        let r = resolver();
        let opts = CustomizationOptions::default();
        let first = r.resolve("star", &opts).await;
        let second = r.resolve("star", &opts).await;
        assert_eq!(first, second);
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 1);
        assert_eq!(r.cache_len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_request_shares_cache() {
        let r = resolver();
        let request = IconRequest::new("star", CustomizationOptions::default());
        let a = r.resolve_request(&request).await;
        let b = r.resolve("star", &CustomizationOptions::default()).await;
        assert_eq!(a, b);
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_options_fetch_again() {
        let r = resolver();
        r.resolve("star", &CustomizationOptions::default()).await;
        r.resolve("star", &CustomizationOptions::default().with_size(48))
            .await;
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 2);
        assert_eq!(r.cache_len(), 2);
    }

    #[tokio::test]
    async fn test_failure_returns_fallback_uncached() {
        let r = resolver();
        let svg = r.resolve("missing", &CustomizationOptions::default()).await;
        assert!(svg.contains(r#"<title>Icon "missing" not found</title>"#));
        assert_eq!(r.cache_len(), 0);

        r.resolve("missing", &CustomizationOptions::default()).await;
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_name_skips_fetch() {
        let r = resolver();
        let err = r
            .try_resolve("  ", &CustomizationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IconError::InvalidName(_)));
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_options_fallback() {
        let r = resolver();
        let svg = r
            .resolve("star", &CustomizationOptions::default().with_size(0))
            .await;
        assert!(svg.contains("<title>"));
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_paths_failure_is_empty() {
        let r = resolver();
        assert_eq!(r.get_paths("star").await.len(), 1);
        assert!(r.get_paths("missing").await.is_empty());
    }

    #[tokio::test]
    async fn test_to_html_no_wrapper() {
        let r = resolver();
        let opts = HtmlOptions {
            wrapper: None,
            ..Default::default()
        };
        let html = r.to_html("star", &opts).await;
        assert!(html.starts_with("<svg"));
    }

    #[tokio::test]
    async fn test_is_available() {
        let r = resolver();
        assert!(r.is_available("star").await);
        assert!(!r.is_available("missing").await);
        assert!(!r.is_available("").await);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let r = resolver();
        let opts = CustomizationOptions::default();
        r.resolve("star", &opts).await;
        r.clear_cache();
        r.resolve("star", &opts).await;
        assert_eq!(r.source().fetches.load(Ordering::SeqCst), 2);
    }
}
