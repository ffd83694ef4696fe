//! API Routes
//!
//! Configures the Axum router with all front-end endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, game_detail_handler, health_handler, load_more_handler,
    platforms_handler, refresh_handler, search_state_handler, set_ordering_handler,
    set_platforms_handler, set_query_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin so the browser front-end can be served elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(search_state_handler))
        .route("/search/query", put(set_query_handler))
        .route("/search/platforms", put(set_platforms_handler))
        .route("/search/ordering", put(set_ordering_handler))
        .route("/search/more", post(load_more_handler))
        .route("/search/refresh", post(refresh_handler))
        .route("/games/:id", get(game_detail_handler))
        .route("/platforms", get(platforms_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
