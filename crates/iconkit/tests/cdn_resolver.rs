//! Integration tests for the resolver over a mocked HTTP icon CDN.

use iconkit::{CustomizationOptions, HtmlOptions, IconError, IconResolver, ResolverConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────── helpers ───────────────────────

const USER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M8 7a4 4 0 1 0 8 0a4 4 0 0 0 -8 0" /><path d="M6 21v-2a4 4 0 0 1 4 -4h4a4 4 0 0 1 4 4v2" /></svg>"#;

fn resolver_for(server: &MockServer) -> IconResolver {
    let config = ResolverConfig::with_base_url(&format!("{}/icons/", server.uri())).unwrap();
    IconResolver::new(config).unwrap()
}

async fn serve_user(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/icons/user.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER_SVG))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// A base URL nothing is listening on.
fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/icons/")
}

// ─────────────────────── resolve ───────────────────────

#[tokio::test]
async fn test_resolve_is_idempotent_with_single_fetch() {
    let server = MockServer::start().await;
    serve_user(&server, 1).await;
    let resolver = resolver_for(&server);

    let opts = CustomizationOptions::default();
    let first = resolver.resolve("user", &opts).await;
    let second = resolver.resolve("user", &opts).await;

    assert_eq!(first, second);
    assert!(first.contains("<path"));
    // MockServer verifies `.expect(1)` on drop.
}

#[tokio::test]
async fn test_resolve_applies_customization() {
    let server = MockServer::start().await;
    serve_user(&server, 1).await;
    let resolver = resolver_for(&server);

    let opts = CustomizationOptions {
        width: 32,
        height: 16,
        stroke_width: 1.5,
        class_name: Some("ic".to_string()),
        aria_hidden: true,
    };
    let svg = resolver.resolve("user", &opts).await;

    assert!(svg.contains(r#"width="32""#));
    assert!(svg.contains(r#"height="16""#));
    assert!(svg.contains(r#"stroke-width="1.5""#));
    assert!(svg.contains(r#"class="ic""#));
    assert!(svg.contains(r#"aria-hidden="true""#));
}

#[tokio::test]
async fn test_resolve_404_returns_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/icons/nope.svg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    let svg = resolver.resolve("nope", &CustomizationOptions::default()).await;
    assert!(svg.contains(r#"<title>Icon "nope" not found</title>"#));
    assert_eq!(resolver.cache_len(), 0);
}

#[tokio::test]
async fn test_try_resolve_server_error_is_resource_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    let err = resolver
        .try_resolve("user", &CustomizationOptions::default())
        .await
        .unwrap_err();
    match err {
        IconError::ResourceUnavailable { name, reason } => {
            assert_eq!(name, "user");
            assert!(reason.contains("500"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_resolve_network_error_returns_fallback() {
    let config = ResolverConfig::with_base_url(&dead_base_url()).unwrap();
    let resolver = IconResolver::new(config).unwrap();

    let svg = resolver.resolve("user", &CustomizationOptions::default()).await;
    assert!(svg.contains(r#"<title>Icon "user" not found</title>"#));
}

#[tokio::test]
async fn test_timeout_returns_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/icons/user.svg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(USER_SVG)
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config =
        ResolverConfig::resolve(Some(&format!("{}/icons/", server.uri())), Some(200)).unwrap();
    let resolver = IconResolver::new(config).unwrap();

    let svg = resolver.resolve("user", &CustomizationOptions::default()).await;
    assert!(svg.contains(r#"<title>Icon "user" not found</title>"#));
    assert_eq!(resolver.cache_len(), 0);
}

// ─────────────────────── paths / html ───────────────────────

#[tokio::test]
async fn test_get_paths_two_elements() {
    let server = MockServer::start().await;
    serve_user(&server, 1).await;
    let resolver = resolver_for(&server);

    let paths = resolver.get_paths("user").await;
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.starts_with("<path")));
}

#[tokio::test]
async fn test_get_paths_on_failure_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    assert!(resolver.get_paths("user").await.is_empty());
}

#[tokio::test]
async fn test_to_html_wraps_with_size() {
    let server = MockServer::start().await;
    serve_user(&server, 1).await;
    let resolver = resolver_for(&server);

    let opts = HtmlOptions {
        wrapper: Some("span".to_string()),
        wrapper_class: Some("icon-wrap".to_string()),
        size: 40,
        ..Default::default()
    };
    let html = resolver.to_html("user", &opts).await;

    assert!(html.starts_with("<span class=\"icon-wrap\">\n  <svg"));
    assert!(html.ends_with("\n</span>"));
    assert!(html.contains(r#"width="40""#));
    assert!(html.contains(r#"height="40""#));
}

// ─────────────────────── availability ───────────────────────

#[tokio::test]
async fn test_is_available_200() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/icons/user.svg"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    assert!(resolver.is_available("user").await);
}

#[tokio::test]
async fn test_is_available_404() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    assert!(!resolver.is_available("ghost").await);
}

#[tokio::test]
async fn test_is_available_network_error() {
    let config = ResolverConfig::with_base_url(&dead_base_url()).unwrap();
    let resolver = IconResolver::new(config).unwrap();

    assert!(!resolver.is_available("user").await);
}

// ─────────────────────── sharing ───────────────────────

#[tokio::test]
async fn test_shared_resolver_across_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/icons/user.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER_SVG))
        .mount(&server)
        .await;
    let resolver = std::sync::Arc::new(resolver_for(&server));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let r = resolver.clone();
        handles.push(tokio::spawn(async move {
            r.resolve("user", &CustomizationOptions::default()).await
        }));
    }

    let mut outputs = Vec::new();
    for h in handles {
        outputs.push(h.await.unwrap());
    }
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(resolver.cache_len(), 1);
}
