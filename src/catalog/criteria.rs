//! Search Criteria
//!
//! The full tuple of parameters that determines one search result page, and
//! the sort orders the provider understands.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// == Sort Field ==
/// Fields the provider can order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Rating,
    Released,
    Name,
    Added,
    Metacritic,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Rating,
        SortField::Released,
        SortField::Name,
        SortField::Added,
        SortField::Metacritic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Rating => "rating",
            SortField::Released => "released",
            SortField::Name => "name",
            SortField::Added => "added",
            SortField::Metacritic => "metacritic",
        }
    }
}

// == Sort Order ==
/// A sort field plus direction. Wire form is the field name, prefixed with
/// `-` when descending (`"-rating"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortOrder {
    pub field: SortField,
    pub descending: bool,
}

impl SortOrder {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Same field, opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            field: self.field,
            descending: !self.descending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::descending(SortField::Rating)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field.as_str())
        } else {
            f.write_str(self.field.as_str())
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (descending, name) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        SortField::ALL
            .iter()
            .find(|field| field.as_str() == name)
            .map(|field| Self {
                field: *field,
                descending,
            })
            .ok_or_else(|| CatalogError::InvalidArgument(format!("Unknown ordering: {s:?}")))
    }
}

impl TryFrom<String> for SortOrder {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.to_string()
    }
}

// == Search Criteria ==
/// Everything that determines a search result page.
///
/// Platform ids live in an ordered set, so two criteria built from the same
/// ids in a different order are equal and share a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchCriteria {
    pub text: String,
    pub platform_ids: BTreeSet<u32>,
    pub ordering: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            text: String::new(),
            platform_ids: BTreeSet::new(),
            ordering: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchCriteria {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_platforms(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.platform_ids = ids.into_iter().collect();
        self
    }

    pub fn with_ordering(mut self, ordering: SortOrder) -> Self {
        self.ordering = ordering;
        self
    }

    /// Pages are 1-based; zero is clamped to the first page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    // == Cache Key ==
    /// Deterministic serialization of all five fields.
    pub fn cache_key(&self) -> String {
        serde_json::json!([
            self.text,
            self.platform_ids,
            self.ordering.to_string(),
            self.page,
            self.page_size
        ])
        .to_string()
    }

    /// Comma-joined platform ids in ascending order, if any are selected.
    pub fn platforms_param(&self) -> Option<String> {
        if self.platform_ids.is_empty() {
            return None;
        }
        let joined = self
            .platform_ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Some(joined)
    }

    // == Query Parameters ==
    /// Provider query parameters; empty values are left out.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if !self.text.is_empty() {
            params.push(("search", self.text.clone()));
        }
        params.push(("ordering", self.ordering.to_string()));
        params.push(("page", self.page.to_string()));
        params.push(("page_size", self.page_size.to_string()));
        if let Some(platforms) = self.platforms_param() {
            params.push(("platforms", platforms));
        }
        params
    }
}
