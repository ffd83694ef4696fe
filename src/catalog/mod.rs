//! Catalog Module
//!
//! Client for the external game catalog: criteria, normalized models,
//! the cache-backed HTTP client and card display helpers.

mod client;
mod criteria;
pub mod display;
mod models;

pub use client::{CatalogCacheStats, CatalogCaches, CatalogClient, GameCatalog};
pub use criteria::{SearchCriteria, SortField, SortOrder, DEFAULT_PAGE_SIZE};
pub use models::{GameDetail, GameSummary, SearchResultPage};
