//! API Handlers
//!
//! HTTP request handlers for the front-end endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::catalog::display::{Platform, KNOWN_PLATFORMS};
use crate::catalog::{CatalogCaches, GameCatalog};
use crate::error::{CatalogError, Result};
use crate::models::{
    ClearCacheResponse, GameDetailResponse, HealthResponse, OrderingRequest, PlatformsRequest,
    QueryRequest, SearchStateResponse, SearchUpdateResponse, StatsResponse,
};
use crate::search::SearchController;

/// Application state shared across all handlers.
///
/// Built once by the composition root; every field is shared by reference.
#[derive(Clone)]
pub struct AppState {
    /// Search state machine
    pub controller: Arc<SearchController>,
    /// Catalog used for detail views
    pub catalog: Arc<dyn GameCatalog>,
    /// Caches behind the catalog, for stats and invalidation
    pub caches: Arc<CatalogCaches>,
}

impl AppState {
    pub fn new(
        controller: Arc<SearchController>,
        catalog: Arc<dyn GameCatalog>,
        caches: Arc<CatalogCaches>,
    ) -> Self {
        Self {
            controller,
            catalog,
            caches,
        }
    }
}

/// Handler for GET /search
///
/// Returns the current search state with display-ready cards.
pub async fn search_state_handler(State(state): State<AppState>) -> Json<SearchStateResponse> {
    Json(state.controller.state().await.into())
}

/// Handler for PUT /search/query
pub async fn set_query_handler(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Json<SearchUpdateResponse> {
    let accepted = state.controller.set_query(req.query).await;
    Json(SearchUpdateResponse::new(accepted, state.controller.state().await))
}

/// Handler for PUT /search/platforms
pub async fn set_platforms_handler(
    State(state): State<AppState>,
    Json(req): Json<PlatformsRequest>,
) -> Result<Json<SearchUpdateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::InvalidArgument(error_msg));
    }

    let accepted = state.controller.set_platforms(req.platform_ids).await;
    Ok(Json(SearchUpdateResponse::new(
        accepted,
        state.controller.state().await,
    )))
}

/// Handler for PUT /search/ordering
pub async fn set_ordering_handler(
    State(state): State<AppState>,
    Json(req): Json<OrderingRequest>,
) -> Json<SearchUpdateResponse> {
    let accepted = state.controller.set_ordering(req.ordering).await;
    Json(SearchUpdateResponse::new(accepted, state.controller.state().await))
}

/// Handler for POST /search/more
///
/// `accepted` is false when a fetch is already underway or there are no
/// further pages.
pub async fn load_more_handler(State(state): State<AppState>) -> Json<SearchUpdateResponse> {
    let accepted = state.controller.load_more().await;
    Json(SearchUpdateResponse::new(accepted, state.controller.state().await))
}

/// Handler for POST /search/refresh
pub async fn refresh_handler(State(state): State<AppState>) -> Json<SearchUpdateResponse> {
    state.controller.refresh().await;
    Json(SearchUpdateResponse::new(true, state.controller.state().await))
}

/// Handler for GET /games/:id
///
/// Loads details and screenshots concurrently.
pub async fn game_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<GameDetailResponse>> {
    let (detail, screenshots) =
        tokio::try_join!(state.catalog.details(id), state.catalog.images(id))?;

    Ok(Json(GameDetailResponse::new(&detail, &screenshots)))
}

/// Handler for GET /platforms
pub async fn platforms_handler() -> Json<Vec<Platform>> {
    Json(KNOWN_PLATFORMS.to_vec())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.caches.stats().await;
    Json(StatsResponse::from(&stats))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    state.caches.clear().await;
    info!("Catalog caches cleared on request");
    Json(ClearCacheResponse::new())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
