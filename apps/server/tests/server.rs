use arcade::domain::config::{ApiConfig, SslConfig};
use arcade_server::Server;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(server: &Server, uri: &str) -> Response {
    server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible")
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[test]
fn build_registers_feature_slices() {
    let server = Server::builder().port(5050).build().expect("server builds");

    assert_eq!(server.state().config().server.port, 5050);
    assert_eq!(server.state().slice_names().count(), 2);
}

#[test]
fn missing_tls_files_fail_the_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = ApiConfig::default();
    cfg.server.ssl =
        Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().expect_err("cert is missing");
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[tokio::test]
async fn serves_lobby_pages_and_system_routes() {
    let server = Server::builder().build().expect("server builds");

    let lobby = get(&server, "/").await;
    assert_eq!(lobby.status(), StatusCode::OK);
    assert!(body_text(lobby).await.contains("Game Design Fundamentals"));

    let page = get(&server, "/domain/3/page/27").await;
    assert_eq!(page.status(), StatusCode::OK);
    assert!(body_text(page).await.contains("PAGE 27 / 27"));

    assert_eq!(get(&server, "/health").await.status(), StatusCode::OK);
    assert_eq!(get(&server, "/api/domains").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn not_found_bodies_name_the_reason() {
    let server = Server::builder().build().expect("server builds");

    assert_eq!(body_text(get(&server, "/domain/9/page/1").await).await, "Domain not found");
    assert_eq!(body_text(get(&server, "/domain/4/page/31").await).await, "Page not found");
}

#[tokio::test]
async fn api_reference_documents_catalog_routes() {
    let server = Server::builder().build().expect("server builds");

    let response = get(&server, "/scalar").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("/api/domains/{domain_num}/pages/{page_num}"));
    assert!(html.contains("/health"));
}
