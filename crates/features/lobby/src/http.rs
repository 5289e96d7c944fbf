use crate::error::{LobbyError, LobbyErrorExt};
use crate::models::{DomainSummary, PageResponse};
use crate::{Lobby, parse_page_segment, views};
use arcade_derive::api_handler;
use arcade_kernel::domain::config::ApiConfig;
use arcade_kernel::domain::constants::CATALOG_TAG;
use arcade_kernel::server::ApiState;
use arcade_navigator::Navigator;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::services::ServeDir;
use tracing::{debug, warn};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// HTML routes: lobby, domain pages, static assets, and the landing splash when
/// the lobby is mounted under a prefix.
pub fn site_router(config: &ApiConfig) -> Router<ApiState> {
    let mount = config.lobby.mount();

    let mut router = Router::new()
        .route(&views::lobby_href(&mount), get(lobby_handler))
        .route(&format!("{mount}/domain/{{domain_num}}/page/{{page_num}}"), get(page_handler));

    if !mount.is_empty() {
        router = router.route("/", get(landing_handler)).route(&mount, get(lobby_handler));
    }

    let static_dir = &config.storage.static_dir;
    if static_dir.is_dir() {
        router = router.nest_service(&format!("{mount}/static"), ServeDir::new(static_dir));
    } else {
        warn!(path = %static_dir.display(), "Static directory not found, assets disabled");
    }

    router
}

/// Documented JSON routes over the catalog.
pub fn api_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(list_domains_handler)).routes(routes!(page_json_handler))
}

fn slices(state: &ApiState) -> Result<(&Lobby, &Navigator), LobbyError> {
    let lobby = state.try_get_slice::<Lobby>().context("Lobby slice not registered")?;
    Ok((lobby, navigator_slice(state)?))
}

fn navigator_slice(state: &ApiState) -> Result<&Navigator, LobbyError> {
    state.try_get_slice::<Navigator>().context("Navigator slice not registered")
}

/// Parses both segments of a page address.
fn parse_address(domain: &str, page: &str) -> Result<(u32, u32), LobbyError> {
    let parse = |segment: &str| {
        parse_page_segment(segment).ok_or_else(|| LobbyError::MalformedAddress {
            segment: segment.to_owned(),
            context: None,
        })
    };
    Ok((parse(domain)?, parse(page)?))
}

async fn landing_handler(State(state): State<ApiState>) -> Result<Html<String>, LobbyError> {
    let (lobby, _) = slices(&state)?;
    Ok(Html(views::render_landing(&lobby.title, &lobby.mount)))
}

async fn lobby_handler(State(state): State<ApiState>) -> Result<Html<String>, LobbyError> {
    let (lobby, navigator) = slices(&state)?;
    Ok(Html(views::render_lobby(&lobby.title, &lobby.mount, navigator.list_domains())))
}

async fn page_handler(
    State(state): State<ApiState>,
    Path((domain, page)): Path<(String, String)>,
) -> Result<Html<String>, LobbyError> {
    let (lobby, navigator) = slices(&state)?;
    let (domain_num, page_num) = parse_address(&domain, &page)?;

    let view = navigator.resolve_page(domain_num, page_num)?;
    debug!(
        domain_num,
        page_num,
        has_prev = view.has_prev,
        has_next = view.has_next,
        "Page resolved"
    );

    Ok(Html(views::render_page(&lobby.title, &lobby.mount, &view)))
}

#[api_handler(
    get,
    path = "/api/domains",
    responses((status = OK, description = "All training domains in order", body = [DomainSummary])),
    tag = CATALOG_TAG,
)]
async fn list_domains_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<DomainSummary>>, LobbyError> {
    let navigator = navigator_slice(&state)?;
    Ok(Json(navigator.list_domains().iter().map(DomainSummary::from).collect()))
}

#[api_handler(
    get,
    path = "/api/domains/{domain_num}/pages/{page_num}",
    params(
        ("domain_num" = u32, Path, description = "Domain number"),
        ("page_num" = u32, Path, description = "1-based page number"),
    ),
    responses(
        (status = OK, description = "Resolved page", body = PageResponse),
        (status = NOT_FOUND, description = "Unknown domain or page", body = String, content_type = "text/plain"),
    ),
    tag = CATALOG_TAG,
)]
async fn page_json_handler(
    State(state): State<ApiState>,
    Path((domain, page)): Path<(String, String)>,
) -> Result<Json<PageResponse>, LobbyError> {
    let navigator = navigator_slice(&state)?;
    let (domain_num, page_num) = parse_address(&domain, &page)?;

    Ok(Json(navigator.resolve_page(domain_num, page_num)?.into()))
}
