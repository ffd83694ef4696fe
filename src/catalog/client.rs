//! Catalog Client
//!
//! Cache-backed access to the provider's search, detail and screenshot
//! endpoints. Every call consults its cache first, goes to the network on a
//! miss, normalizes the payload and stores the result.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, TimedCache, DEFAULT_TTL, DETAIL_CACHE_CAPACITY, SEARCH_CACHE_CAPACITY};
use crate::catalog::models::{RawGameDetail, RawScreenshots, RawSearchResponse};
use crate::catalog::{GameDetail, SearchCriteria, SearchResultPage};
use crate::config::Config;
use crate::error::{CatalogError, Result};

// == Game Catalog Trait ==
/// Read access to the game catalog.
///
/// Implementations surface every failure to the caller and never retry.
#[async_trait]
pub trait GameCatalog: Send + Sync + 'static {
    /// One page of results for `criteria`.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Arc<SearchResultPage>>;

    /// Full record for one game. `id` 0 is rejected.
    async fn details(&self, id: u64) -> Result<Arc<GameDetail>>;

    /// Screenshot URLs for one game. `id` 0 is rejected.
    async fn images(&self, id: u64) -> Result<Arc<Vec<String>>>;
}

// == Catalog Caches ==
/// The three per-resource caches, constructed by the composition root and
/// handed to the client.
#[derive(Debug)]
pub struct CatalogCaches {
    pub search: Mutex<TimedCache<String, Arc<SearchResultPage>>>,
    pub details: Mutex<TimedCache<u64, Arc<GameDetail>>>,
    pub images: Mutex<TimedCache<u64, Arc<Vec<String>>>>,
}

impl CatalogCaches {
    pub fn new(search_capacity: usize, detail_capacity: usize, ttl: Duration) -> Self {
        Self {
            search: Mutex::new(TimedCache::new(search_capacity, ttl)),
            details: Mutex::new(TimedCache::new(detail_capacity, ttl)),
            images: Mutex::new(TimedCache::new(detail_capacity, ttl)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.search_cache_capacity,
            config.detail_cache_capacity,
            config.cache_ttl(),
        )
    }

    /// Drops every cached entry of every kind.
    pub async fn clear(&self) {
        self.search.lock().await.clear();
        self.details.lock().await.clear();
        self.images.lock().await.clear();
    }

    pub async fn stats(&self) -> CatalogCacheStats {
        CatalogCacheStats {
            search: self.search.lock().await.stats(),
            details: self.details.lock().await.stats(),
            images: self.images.lock().await.stats(),
        }
    }
}

impl Default for CatalogCaches {
    fn default() -> Self {
        Self::new(SEARCH_CACHE_CAPACITY, DETAIL_CACHE_CAPACITY, DEFAULT_TTL)
    }
}

/// Statistics for each cache kind.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCacheStats {
    pub search: CacheStats,
    pub details: CacheStats,
    pub images: CacheStats,
}

// == Catalog Client ==
/// HTTP client for the provider API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    caches: Arc<CatalogCaches>,
}

impl CatalogClient {
    /// Creates a client using the provider settings in `config`.
    ///
    /// A missing API key is not an error here; it surfaces as
    /// `CatalogError::Config` from the first call that needs the network.
    pub fn new(config: &Config, caches: Arc<CatalogCaches>) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(config.request_timeout())
            .user_agent(concat!("game_finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            caches,
        })
    }

    pub fn caches(&self) -> &Arc<CatalogCaches> {
        &self.caches
    }

    /// Explicit invalidation of all three caches.
    pub async fn clear_caches(&self) {
        self.caches.clear().await;
        info!("Catalog caches cleared");
    }

    // == URL Building ==
    /// Joins `path` onto the base URL and appends `params` followed by the key.
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            CatalogError::Config("Missing provider API key. Set RAWG_API_KEY".to_string())
        })?;

        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| CatalogError::Config(format!("Invalid provider URL: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in params {
                if !value.is_empty() {
                    query.append_pair(name, value);
                }
            }
            query.append_pair("key", key);
        }
        Ok(url)
    }

    // == Fetch ==
    /// Issues a GET and decodes the body, mapping non-success statuses to
    /// `CatalogError::Provider`.
    async fn fetch_json<T: DeserializeOwned>(&self, operation: &'static str, url: Url) -> Result<T> {
        debug!(operation, path = url.path(), "Requesting provider");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(operation, status = status.as_u16(), "Provider request failed");
            return Err(CatalogError::Provider {
                operation,
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn require_id(id: u64) -> Result<()> {
        if id == 0 {
            return Err(CatalogError::InvalidArgument("game id is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl GameCatalog for CatalogClient {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Arc<SearchResultPage>> {
        let key = criteria.cache_key();

        let cached = self.caches.search.lock().await.get(&key);
        if let Some(page) = cached {
            debug!(text = %criteria.text, page = criteria.page, "Search cache hit");
            return Ok(page);
        }

        let url = self.build_url("/games", &criteria.query_params())?;
        let raw: RawSearchResponse = self.fetch_json("catalog search", url).await?;
        let page = Arc::new(SearchResultPage::from(raw));

        debug!(
            text = %criteria.text,
            page = criteria.page,
            results = page.results.len(),
            "Search page fetched"
        );
        self.caches.search.lock().await.set(key, Arc::clone(&page));
        Ok(page)
    }

    async fn details(&self, id: u64) -> Result<Arc<GameDetail>> {
        Self::require_id(id)?;

        let cached = self.caches.details.lock().await.get(&id);
        if let Some(detail) = cached {
            debug!(id, "Detail cache hit");
            return Ok(detail);
        }

        let url = self.build_url(&format!("/games/{id}"), &[])?;
        let raw: RawGameDetail = self.fetch_json("game details", url).await?;
        let detail = Arc::new(GameDetail::from(raw));

        self.caches.details.lock().await.set(id, Arc::clone(&detail));
        Ok(detail)
    }

    async fn images(&self, id: u64) -> Result<Arc<Vec<String>>> {
        Self::require_id(id)?;

        let cached = self.caches.images.lock().await.get(&id);
        if let Some(images) = cached {
            debug!(id, "Image cache hit");
            return Ok(images);
        }

        let url = self.build_url(&format!("/games/{id}/screenshots"), &[])?;
        let raw: RawScreenshots = self.fetch_json("game screenshots", url).await?;
        let images = Arc::new(raw.into_images());

        self.caches.images.lock().await.set(id, Arc::clone(&images));
        Ok(images)
    }
}
