//! Catalog Models
//!
//! Raw provider payloads and the normalized shapes the rest of the crate
//! consumes. Normalization is the only place provider quirks are handled.

use serde::{Deserialize, Serialize};

// == Normalized Types ==
/// One entry of a search result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: u64,
    pub name: Option<String>,
    pub rating: Option<f64>,
    /// Release date as `YYYY-MM-DD`
    pub released: Option<String>,
    pub background_image: Option<String>,
}

/// Full record for a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub summary: GameSummary,
    /// Rich-text (HTML) description when available, plain text otherwise
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<GameSummary>,
}

impl SearchResultPage {
    /// True when the provider advertised a following page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

// == Raw Provider Payloads ==
#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default)]
    results: Option<Vec<RawGame>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGame {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    released: Option<String>,
    #[serde(default)]
    background_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGameDetail {
    #[serde(flatten)]
    game: RawGame,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    description_raw: Option<String>,
    #[serde(default)]
    genres: Option<Vec<RawNamed>>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    developers: Option<Vec<RawNamed>>,
    #[serde(default)]
    publishers: Option<Vec<RawNamed>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNamed {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScreenshots {
    #[serde(default)]
    results: Option<Vec<RawScreenshot>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScreenshot {
    #[serde(default)]
    image: Option<String>,
}

// == Normalization ==
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn names(items: Option<Vec<RawNamed>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| non_empty(item.name))
        .collect()
}

impl From<RawGame> for GameSummary {
    fn from(raw: RawGame) -> Self {
        Self {
            id: raw.id,
            name: non_empty(raw.name).or_else(|| non_empty(raw.title)),
            rating: raw.rating,
            released: non_empty(raw.released),
            background_image: non_empty(raw.background_image),
        }
    }
}

impl From<RawSearchResponse> for SearchResultPage {
    fn from(raw: RawSearchResponse) -> Self {
        let results: Vec<GameSummary> = raw
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GameSummary::from)
            .collect();

        Self {
            count: raw
                .count
                .filter(|count| *count > 0)
                .unwrap_or(results.len() as u64),
            next: non_empty(raw.next),
            previous: non_empty(raw.previous),
            results,
        }
    }
}

impl From<RawGameDetail> for GameDetail {
    fn from(raw: RawGameDetail) -> Self {
        Self {
            summary: raw.game.into(),
            description: non_empty(raw.description).or_else(|| non_empty(raw.description_raw)),
            genres: names(raw.genres),
            website: non_empty(raw.website),
            developers: names(raw.developers),
            publishers: names(raw.publishers),
        }
    }
}

impl RawScreenshots {
    /// Image URLs in provider order; entries without an image are dropped.
    pub(crate) fn into_images(self) -> Vec<String> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|shot| non_empty(shot.image))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_summary_name_falls_back_to_title() {
        let raw: RawGame = parse(json!({"id": 3, "title": "Alt Title"}));
        let summary = GameSummary::from(raw);

        assert_eq!(summary.id, 3);
        assert_eq!(summary.name.as_deref(), Some("Alt Title"));
        assert_eq!(summary.rating, None);
        assert_eq!(summary.released, None);
        assert_eq!(summary.background_image, None);
    }

    #[test]
    fn test_summary_keeps_zero_rating_and_drops_empty_strings() {
        let raw: RawGame = parse(json!({
            "id": 9,
            "name": "",
            "title": "Fallback",
            "rating": 0.0,
            "released": "",
            "background_image": ""
        }));
        let summary = GameSummary::from(raw);

        assert_eq!(summary.name.as_deref(), Some("Fallback"));
        assert_eq!(summary.rating, Some(0.0));
        assert_eq!(summary.released, None);
        assert_eq!(summary.background_image, None);
    }

    #[test]
    fn test_summary_ignores_unknown_fields() {
        let raw: RawGame = parse(json!({
            "id": 1,
            "name": "Doom",
            "rating": 4.4,
            "released": "1993-12-10",
            "background_image": "https://img/doom.jpg",
            "metacritic": 95,
            "tags": [{"name": "fps"}]
        }));
        let summary = GameSummary::from(raw);

        assert_eq!(summary.name.as_deref(), Some("Doom"));
        assert_eq!(summary.rating, Some(4.4));
        assert_eq!(summary.released.as_deref(), Some("1993-12-10"));
    }

    #[test]
    fn test_page_normalization() {
        let raw: RawSearchResponse = parse(json!({
            "count": 2,
            "next": "https://api/games?page=2",
            "previous": null,
            "results": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]
        }));
        let page = SearchResultPage::from(raw);

        assert_eq!(page.count, 2);
        assert!(page.has_next());
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn test_page_missing_fields() {
        let raw: RawSearchResponse = parse(json!({
            "results": [{"id": 1}, {"id": 2}, {"id": 3}]
        }));
        let page = SearchResultPage::from(raw);

        // Count falls back to the number of results
        assert_eq!(page.count, 3);
        assert!(!page.has_next());

        let empty: RawSearchResponse = parse(json!({"results": null}));
        assert!(SearchResultPage::from(empty).results.is_empty());
    }

    #[test]
    fn test_detail_normalization() {
        let raw: RawGameDetail = parse(json!({
            "id": 42,
            "name": "Portal",
            "rating": 4.5,
            "released": "2007-10-09",
            "description": "",
            "description_raw": "Plain text",
            "genres": [{"id": 1, "name": "Puzzle"}, {"id": 2}],
            "website": "",
            "developers": [{"name": "Valve"}],
            "publishers": null
        }));
        let detail = GameDetail::from(raw);

        assert_eq!(detail.summary.id, 42);
        assert_eq!(detail.summary.name.as_deref(), Some("Portal"));
        assert_eq!(detail.description.as_deref(), Some("Plain text"));
        assert_eq!(detail.genres, vec!["Puzzle".to_string()]);
        assert_eq!(detail.website, None);
        assert_eq!(detail.developers, vec!["Valve".to_string()]);
        assert!(detail.publishers.is_empty());
    }

    #[test]
    fn test_detail_prefers_rich_description() {
        let raw: RawGameDetail = parse(json!({
            "id": 1,
            "description": "<p>Rich</p>",
            "description_raw": "Rich"
        }));
        assert_eq!(
            GameDetail::from(raw).description.as_deref(),
            Some("<p>Rich</p>")
        );
    }

    #[test]
    fn test_detail_serializes_flat() {
        let raw: RawGameDetail = parse(json!({"id": 5, "name": "Flat"}));
        let value = serde_json::to_value(GameDetail::from(raw)).unwrap();

        assert_eq!(value["id"], 5);
        assert_eq!(value["name"], "Flat");
        assert!(value["genres"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_screenshots_drop_missing_images() {
        let raw: RawScreenshots = parse(json!({
            "results": [
                {"id": 1, "image": "https://img/1.jpg"},
                {"id": 2, "image": null},
                {"id": 3},
                {"id": 4, "image": ""},
                {"id": 5, "image": "https://img/5.jpg"}
            ]
        }));

        assert_eq!(
            raw.into_images(),
            vec!["https://img/1.jpg".to_string(), "https://img/5.jpg".to_string()]
        );
    }
}
