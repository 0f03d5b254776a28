use serde::{Deserialize, Serialize};

/// Placeholder shown when the provider has no rating for a title
pub const RATING_SENTINEL: &str = "N/A";

/// Kind of content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Series,
}

impl TitleKind {
    /// Maps the provider's `Type` field; anything that is not a series is shown as a movie
    pub fn from_provider(value: &str) -> Self {
        if value.eq_ignore_ascii_case("series") {
            TitleKind::Series
        } else {
            TitleKind::Movie
        }
    }

    /// Human readable label used on the detail page
    pub fn label(&self) -> &'static str {
        match self {
            TitleKind::Movie => "Movie",
            TitleKind::Series => "TV Show",
        }
    }
}

/// A movie or TV show as displayed to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleRecord {
    /// Opaque provider identifier (an IMDb id for OMDb)
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub plot: String,
    #[serde(rename = "type")]
    pub kind: TitleKind,
    pub release_date: String,
    pub runtime: String,
    /// Comma-joined genre list, e.g. "Action, Drama"
    pub genres: String,
    /// Provider rating, or [`RATING_SENTINEL`] when absent
    pub rating: String,
}

impl TitleRecord {
    /// Returns the provider rating, falling back to the sentinel when missing or blank
    pub fn normalize_rating(rating: Option<&str>) -> String {
        match rating.map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => RATING_SENTINEL.to_string(),
        }
    }

    /// Genres as individual entries
    pub fn genre_list(&self) -> Vec<&str> {
        self.genres
            .split(", ")
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// First sentence of the plot, terminated with a period
    pub fn tagline(&self) -> String {
        let first = self.plot.split('.').next().unwrap_or_default().trim();
        format!("{}.", first)
    }
}
