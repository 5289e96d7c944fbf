#![cfg(feature = "server")]

use arcade_kernel::domain::config::ApiConfig;
use arcade_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use arcade_kernel::server::router::system_router;
use arcade_kernel::server::{ApiState, ApiStateError, HealthResponse, mark_started};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::any::Any;
use tower::ServiceExt;

#[derive(Debug)]
struct Marker(u32);

impl FeatureSlice for Marker {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn state_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Marker(7)))
        .build()
        .expect("state builds");

    assert_eq!(state.get_slice::<Marker>().map(|m| m.0), Some(7));
    assert_eq!(state.slice_names().count(), 1);
    assert_eq!(state.config().server.port, 5000);
}

#[derive(Debug)]
struct OtherMarker;

impl FeatureSlice for OtherMarker {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn slices_register_in_bulk() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([InitializedSlice::new(Marker(1)), InitializedSlice::new(OtherMarker)])
        .build()
        .expect("state builds");

    assert_eq!(state.get_slice::<Marker>().map(|m| m.0), Some(1));
    assert!(state.get_slice::<OtherMarker>().is_some());
    assert_eq!(state.slice_names().count(), 2);
}

#[test]
fn missing_slice_is_reported() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state builds");

    let err = state.try_get_slice::<Marker>().expect_err("nothing registered");
    assert_eq!(err.kind(), "MissingSlice");
}

#[tokio::test]
async fn health_endpoint_reports_up_without_caching() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state builds");
    let (router, _api): (axum::Router, _) =
        system_router::<ApiState>().with_state(state).split_for_parts();

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let health: HealthResponse = serde_json::from_slice(&bytes).expect("health json");
    assert_eq!(health.status, "up");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn uptime_counts_from_startup() {
    mark_started();
    std::thread::sleep(std::time::Duration::from_millis(1100));

    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state builds");
    let (router, _api): (axum::Router, _) =
        system_router::<ApiState>().with_state(state).split_for_parts();

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let health: HealthResponse = serde_json::from_slice(&bytes).expect("health json");

    assert!(health.uptime >= 1, "uptime {} should count from mark_started", health.uptime);
}
