#![cfg(feature = "server")]

use arcade_kernel::domain::config::ApiConfig;
use arcade_kernel::server::ApiState;
use arcade_lobby::{DomainSummary, PageResponse, api_router, site_router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app(config: ApiConfig) -> Router {
    let state = ApiState::builder()
        .config(config.clone())
        .register_slice(arcade_navigator::init().expect("builtin catalog is valid"))
        .register_slice(arcade_lobby::init(&config.lobby))
        .build()
        .expect("state builds");

    let (api, _doc) = api_router().split_for_parts();
    site_router(&config).merge(api).with_state(state)
}

fn mounted_at(prefix: &str) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.lobby.mount_path = prefix.to_owned();
    config
}

async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible")
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn lobby_lists_all_domains() {
    let response = get(app(ApiConfig::default()), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    for title in [
        "Game Design Fundamentals",
        "Programming for Games",
        "Creative Assets",
        "Industry and Career Connections",
    ] {
        assert!(html.contains(title), "missing {title}");
    }
    assert!(html.contains(r#"href="/domain/4/page/1""#));
    assert!(html.contains("39 pages"));
}

#[tokio::test]
async fn first_page_links_forward_only() {
    let response = get(app(ApiConfig::default()), "/domain/1/page/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("PAGE 1 / 38"));
    assert!(html.contains(r#"<span class="nav-btn prev disabled">"#));
    assert!(html.contains(r#"href="/domain/1/page/2""#));
}

#[tokio::test]
async fn last_page_links_backward_only() {
    let html = body_text(get(app(ApiConfig::default()), "/domain/2/page/39").await).await;
    assert!(html.contains(r#"href="/domain/2/page/38""#));
    assert!(html.contains(r#"<span class="nav-btn next disabled">"#));
    assert!(html.contains("Programming for Games"));
}

#[tokio::test]
async fn unknown_domain_is_plain_404() {
    let response = get(app(ApiConfig::default()), "/domain/5/page/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(body_text(response).await, "Domain not found");
}

#[tokio::test]
async fn out_of_range_page_is_plain_404() {
    for uri in ["/domain/1/page/0", "/domain/1/page/39", "/domain/3/page/28"] {
        let response = get(app(ApiConfig::default()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_text(response).await, "Page not found", "{uri}");
    }
}

#[tokio::test]
async fn domain_is_checked_before_page() {
    let response = get(app(ApiConfig::default()), "/domain/0/page/0").await;
    assert_eq!(body_text(response).await, "Domain not found");
}

#[tokio::test]
async fn oversized_numbers_resolve_to_a_reason() {
    let response = get(app(ApiConfig::default()), "/domain/1/page/99999999999999999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Page not found");
}

#[tokio::test]
async fn non_numeric_segments_are_not_found() {
    for uri in ["/domain/abc/page/1", "/domain/1/page/-1", "/domain/1/page/1.0"] {
        let response = get(app(ApiConfig::default()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_text(response).await, "Not found", "{uri}");
    }
}

#[tokio::test]
async fn mounted_lobby_has_landing_and_prefixed_links() {
    let router = app(mounted_at("/gamedev-pd"));

    let landing = body_text(get(router.clone(), "/").await).await;
    assert!(landing.contains("INSERT COIN"));
    assert!(landing.contains(r#"href="/gamedev-pd/""#));

    for uri in ["/gamedev-pd", "/gamedev-pd/"] {
        let response = get(router.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_text(response).await.contains(r#"href="/gamedev-pd/domain/1/page/1""#));
    }

    let page = body_text(get(router.clone(), "/gamedev-pd/domain/3/page/2").await).await;
    assert!(page.contains(r#"href="/gamedev-pd/domain/3/page/1""#));
    assert!(page.contains(r#"href="/gamedev-pd/domain/3/page/3""#));

    let unmounted = get(router, "/domain/1/page/1").await;
    assert_eq!(unmounted.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_assets_are_served_under_mount() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("arcade.css"), "body { color: #00ff41; }").expect("write");

    let mut config = mounted_at("pd");
    config.storage.static_dir = dir.path().to_path_buf();

    let response = get(app(config), "/pd/static/arcade.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("#00ff41"));
}

#[tokio::test]
async fn json_catalog_lists_domains_in_order() {
    let response = get(app(ApiConfig::default()), "/api/domains").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let domains: Vec<DomainSummary> = serde_json::from_slice(&bytes).expect("domains json");

    let numbers: Vec<u32> = domains.iter().map(|d| d.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    let pages: Vec<u32> = domains.iter().map(|d| d.total_pages).collect();
    assert_eq!(pages, vec![38, 39, 27, 30]);
    assert_eq!(domains[2].standards, vec!["3.1".to_owned(), "3.2".to_owned()]);
}

#[tokio::test]
async fn json_page_carries_navigation_state() {
    let response = get(app(ApiConfig::default()), "/api/domains/4/pages/15").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let page: PageResponse = serde_json::from_slice(&bytes).expect("page json");

    assert_eq!(page.domain_title, "Industry and Career Connections");
    assert_eq!(page.prev_page, Some(14));
    assert_eq!(page.next_page, Some(16));
    assert_eq!(page.progress_percent, 50);

    let missing = get(app(ApiConfig::default()), "/api/domains/4/pages/31").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(missing).await, "Page not found");
}
