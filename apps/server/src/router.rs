use arcade::kernel::prelude::ApiState;
use arcade::server::router::{api_router, site_router, system_router};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Game Dev Arcade PD"))]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .merge(api_router())
        .with_state(state.clone())
        .split_for_parts();

    // HTML lobby and pages; not part of the OpenAPI document
    let site_routes = site_router(state.config()).with_state(state);

    let scalar_routes = Scalar::with_url("/scalar", api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(site_routes)
        .merge(scalar_routes)
        .layer(TraceLayer::new_for_http())
}
