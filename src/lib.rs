//! Game Finder - cache-backed game catalog search service
//!
//! Wraps a third-party game catalog behind per-resource TTL caches and a
//! debounced search controller that applies results in request order.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod sanitize;
pub mod search;
pub mod tasks;

pub use api::AppState;
pub use catalog::{CatalogCaches, CatalogClient, GameCatalog};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use search::{SearchController, SearchState};
