//! Response DTOs for the front-end API
//!
//! Defines the structure of outgoing HTTP response bodies. Cards and detail
//! views carry display-ready labels so the render layer stays logic-free.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cache::CacheStats;
use crate::catalog::display::{cover_image, format_rating, format_release_date};
use crate::catalog::{CatalogCacheStats, GameDetail, GameSummary, SortOrder};
use crate::sanitize::sanitize_html;
use crate::search::SearchState;

/// One result card.
#[derive(Debug, Clone, Serialize)]
pub struct GameCard {
    pub id: u64,
    pub name: Option<String>,
    pub rating: Option<f64>,
    /// e.g. "4.5" or "Not rated"
    pub rating_label: String,
    pub released: Option<String>,
    /// e.g. "Oct 31, 2023" or "Release date TBA"
    pub release_label: String,
    /// Cover image, or a placeholder when the game has none
    pub image_url: String,
}

impl From<&GameSummary> for GameCard {
    fn from(game: &GameSummary) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            rating: game.rating,
            rating_label: format_rating(game.rating),
            released: game.released.clone(),
            release_label: format_release_date(game.released.as_deref()),
            image_url: cover_image(game.background_image.as_deref()).to_string(),
        }
    }
}

/// Response body for GET /search
#[derive(Debug, Clone, Serialize)]
pub struct SearchStateResponse {
    pub query: String,
    pub platform_ids: BTreeSet<u32>,
    pub ordering: SortOrder,
    pub page: u32,
    pub games: Vec<GameCard>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
}

impl From<SearchState> for SearchStateResponse {
    fn from(state: SearchState) -> Self {
        Self {
            games: state.displayed_games.iter().map(GameCard::from).collect(),
            query: state.query,
            platform_ids: state.platform_ids,
            ordering: state.ordering,
            page: state.page,
            loading: state.loading,
            error: state.error,
            has_more: state.has_more,
        }
    }
}

/// Response body for the search mutations (PUT /search/*, POST /search/*)
#[derive(Debug, Clone, Serialize)]
pub struct SearchUpdateResponse {
    /// Whether the call changed anything and scheduled a fetch
    pub accepted: bool,
    pub state: SearchStateResponse,
}

impl SearchUpdateResponse {
    pub fn new(accepted: bool, state: SearchState) -> Self {
        Self {
            accepted,
            state: state.into(),
        }
    }
}

/// Response body for GET /games/:id
#[derive(Debug, Clone, Serialize)]
pub struct GameDetailResponse {
    #[serde(flatten)]
    pub card: GameCard,
    /// Sanitized rich-text description
    pub description_html: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub screenshots: Vec<String>,
}

impl GameDetailResponse {
    pub fn new(detail: &GameDetail, screenshots: &[String]) -> Self {
        Self {
            card: GameCard::from(&detail.summary),
            description_html: detail.description.as_deref().map(sanitize_html),
            genres: detail.genres.clone(),
            website: detail.website.clone(),
            developers: detail.developers.clone(),
            publishers: detail.publishers.clone(),
            screenshots: screenshots.to_vec(),
        }
    }
}

/// Counters for one cache.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for CacheStatsResponse {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub search: CacheStatsResponse,
    pub details: CacheStatsResponse,
    pub images: CacheStatsResponse,
}

impl From<&CatalogCacheStats> for StatsResponse {
    fn from(stats: &CatalogCacheStats) -> Self {
        Self {
            search: (&stats.search).into(),
            details: (&stats.details).into(),
            images: (&stats.images).into(),
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
}

impl ClearCacheResponse {
    pub fn new() -> Self {
        Self {
            message: "Catalog caches cleared".to_string(),
        }
    }
}

impl Default for ClearCacheResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
