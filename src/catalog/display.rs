//! Display helpers for result cards and filter options.

use chrono::NaiveDate;
use serde::Serialize;

/// Shown when a game has no cover image.
pub const FALLBACK_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

// == Platforms ==
/// A platform the filter offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub id: u32,
    pub name: &'static str,
    pub label: &'static str,
}

pub const KNOWN_PLATFORMS: [Platform; 3] = [
    Platform {
        id: 4,
        name: "PC",
        label: "PC (Windows)",
    },
    Platform {
        id: 187,
        name: "PlayStation",
        label: "PlayStation",
    },
    Platform {
        id: 1,
        name: "Xbox",
        label: "Xbox",
    },
];

/// Rating rounded to one decimal; a missing or zero rating reads "Not rated".
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value != 0.0 => format!("{value:.1}"),
        _ => "Not rated".to_string(),
    }
}

/// `2023-10-31` becomes `Oct 31, 2023`. Unparseable dates are shown as given.
pub fn format_release_date(released: Option<&str>) -> String {
    match released {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => "Release date TBA".to_string(),
    }
}

pub fn cover_image(background_image: Option<&str>) -> &str {
    background_image.unwrap_or(FALLBACK_IMAGE)
}
