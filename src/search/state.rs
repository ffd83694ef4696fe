//! Search State
//!
//! The single, controller-owned view of what the user asked for and what is
//! currently on screen.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::{GameSummary, SearchCriteria, SearchResultPage, SortOrder};

// == Search State ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub platform_ids: BTreeSet<u32>,
    pub ordering: SortOrder,
    /// 1-based page of the most recent request
    pub page: u32,
    /// Accumulated results across loaded pages
    pub displayed_games: Vec<GameSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            platform_ids: BTreeSet::new(),
            ordering: SortOrder::default(),
            page: 1,
            displayed_games: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
        }
    }
}

impl SearchState {
    /// Criteria for the current query at the current page.
    pub fn criteria(&self, page_size: u32) -> SearchCriteria {
        SearchCriteria::new(self.query.clone())
            .with_platforms(self.platform_ids.iter().copied())
            .with_ordering(self.ordering)
            .with_page(self.page)
            .with_page_size(page_size)
    }

    /// Back to the first page with nothing displayed.
    pub(crate) fn reset_results(&mut self) {
        self.page = 1;
        self.displayed_games.clear();
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Page 1 replaces the list; later pages append to it.
    pub(crate) fn apply_page(&mut self, page_num: u32, page: &SearchResultPage) {
        if page_num > 1 {
            self.displayed_games.extend(page.results.iter().cloned());
        } else {
            self.displayed_games = page.results.clone();
        }
        self.has_more = page.has_next();
        self.loading = false;
    }

    /// Failure empties the list and keeps `has_more` as it was.
    pub(crate) fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.displayed_games.clear();
        self.loading = false;
    }
}
