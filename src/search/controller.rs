//! Search Controller
//!
//! Owns the `SearchState`, debounces state changes into catalog searches and
//! applies results strictly in request-issued order.
//!
//! Every state change that needs new data bumps a sequence number before
//! scheduling its fetch. A fetch commits its outcome only if its sequence
//! number is still the latest when the network call returns; anything else
//! is a stale result and is dropped.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::catalog::{GameCatalog, SearchCriteria, SortOrder, DEFAULT_PAGE_SIZE};
use crate::config::Config;
use crate::search::SearchState;
use crate::tasks::Debouncer;

/// Quiescence window used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

struct Shared {
    state: SearchState,
    /// Sequence number of the most recently requested fetch
    latest_seq: u64,
    debouncer: Debouncer,
}

// == Search Controller ==
pub struct SearchController {
    catalog: Arc<dyn GameCatalog>,
    page_size: u32,
    shared: Arc<Mutex<Shared>>,
}

impl SearchController {
    pub fn new(catalog: Arc<dyn GameCatalog>, debounce: Duration, page_size: u32) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            shared: Arc::new(Mutex::new(Shared {
                state: SearchState::default(),
                latest_seq: 0,
                debouncer: Debouncer::new(debounce),
            })),
        }
    }

    pub fn from_config(catalog: Arc<dyn GameCatalog>, config: &Config) -> Self {
        Self::new(catalog, config.debounce(), config.page_size)
    }

    pub fn with_defaults(catalog: Arc<dyn GameCatalog>) -> Self {
        Self::new(catalog, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE)
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SearchState {
        self.shared.lock().await.state.clone()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    // == Query Changes ==
    /// Sets the search text (trimmed). Returns false if nothing changed.
    pub async fn set_query(&self, text: impl Into<String>) -> bool {
        let text = text.into().trim().to_string();
        let mut shared = self.shared.lock().await;
        if shared.state.query == text {
            return false;
        }
        shared.state.query = text;
        self.restart(&mut shared);
        true
    }

    /// Replaces the platform filter. Returns false if the set is unchanged.
    pub async fn set_platforms(&self, ids: impl IntoIterator<Item = u32>) -> bool {
        let ids: BTreeSet<u32> = ids.into_iter().collect();
        let mut shared = self.shared.lock().await;
        if shared.state.platform_ids == ids {
            return false;
        }
        shared.state.platform_ids = ids;
        self.restart(&mut shared);
        true
    }

    /// Changes the sort order. Returns false if it is unchanged.
    pub async fn set_ordering(&self, ordering: SortOrder) -> bool {
        let mut shared = self.shared.lock().await;
        if shared.state.ordering == ordering {
            return false;
        }
        shared.state.ordering = ordering;
        self.restart(&mut shared);
        true
    }

    /// Re-runs the current criteria from page 1.
    pub async fn refresh(&self) {
        let mut shared = self.shared.lock().await;
        self.restart(&mut shared);
    }

    // == Pagination ==
    /// Requests the next page, appended to the current results.
    ///
    /// Ignored (returns false) while a fetch is loading or waiting out the
    /// debounce window, or when the provider reported no further pages.
    pub async fn load_more(&self) -> bool {
        let mut shared = self.shared.lock().await;
        if shared.state.loading || !shared.state.has_more || shared.debouncer.is_pending() {
            debug!(page = shared.state.page, "Load more ignored");
            return false;
        }
        shared.state.page += 1;
        self.schedule_fetch(&mut shared);
        true
    }

    // == Teardown ==
    /// Cancels a fetch still waiting for its debounce window. A fetch already
    /// in flight is left to finish.
    pub async fn shutdown(&self) {
        let mut shared = self.shared.lock().await;
        if shared.debouncer.cancel() {
            debug!("Pending search cancelled on shutdown");
        }
    }

    /// True while a fetch is waiting for its debounce window.
    pub async fn is_fetch_pending(&self) -> bool {
        self.shared.lock().await.debouncer.is_pending()
    }

    fn restart(&self, shared: &mut Shared) {
        shared.state.reset_results();
        self.schedule_fetch(shared);
    }

    fn schedule_fetch(&self, shared: &mut Shared) {
        shared.latest_seq += 1;
        let seq = shared.latest_seq;
        let criteria = shared.state.criteria(self.page_size);

        debug!(seq, text = %criteria.text, page = criteria.page, "Search scheduled");

        let job = run_fetch(
            Arc::clone(&self.catalog),
            Arc::clone(&self.shared),
            seq,
            criteria,
        );
        shared.debouncer.call(job);
    }
}

// == Fetch ==
async fn run_fetch(
    catalog: Arc<dyn GameCatalog>,
    shared: Arc<Mutex<Shared>>,
    seq: u64,
    criteria: SearchCriteria,
) {
    {
        let mut guard = shared.lock().await;
        if guard.latest_seq != seq {
            debug!(seq, latest = guard.latest_seq, "Skipping superseded search");
            return;
        }
        guard.state.begin_fetch();
    }

    let outcome = catalog.search(&criteria).await;

    let mut guard = shared.lock().await;
    if guard.latest_seq != seq {
        debug!(seq, latest = guard.latest_seq, "Discarding stale search result");
        return;
    }

    match outcome {
        Ok(page) => {
            debug!(seq, page = criteria.page, results = page.results.len(), "Search applied");
            guard.state.apply_page(criteria.page, &page);
        }
        Err(err) => {
            warn!(seq, error = %err, "Search failed");
            guard.state.apply_error(err.to_string());
        }
    }
}
