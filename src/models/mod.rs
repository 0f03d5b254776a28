use serde::Deserialize;

mod suggestion;
mod tab;
mod title;

pub use suggestion::{Suggestion, SuggestionKind};
pub use tab::Tab;
pub use title::{TitleKind, TitleRecord, RATING_SENTINEL};

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw API response from OMDb for a `t=` or `i=` lookup
///
/// OMDb answers HTTP 200 even when nothing matched; in that case `Response`
/// is `"False"` and `Error` carries the reason.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbTitle {
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Type", default)]
    pub title_type: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
}

impl OmdbTitle {
    /// Whether OMDb reported a match
    pub fn is_match(&self) -> bool {
        !matches!(self.response.as_deref(), Some(r) if r.eq_ignore_ascii_case("false"))
    }

    /// Provider identifier, if the response carries a non-empty one
    pub fn identifier(&self) -> Option<&str> {
        self.imdb_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

impl From<OmdbTitle> for TitleRecord {
    fn from(raw: OmdbTitle) -> Self {
        let rating = TitleRecord::normalize_rating(raw.imdb_rating.as_deref());
        let kind = TitleKind::from_provider(raw.title_type.as_deref().unwrap_or_default());

        TitleRecord {
            id: raw.imdb_id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            year: raw.year.unwrap_or_default(),
            poster_url: raw.poster.unwrap_or_default(),
            plot: raw.plot.unwrap_or_default(),
            kind,
            release_date: raw.released.unwrap_or_default(),
            runtime: raw.runtime.unwrap_or_default(),
            genres: raw.genre.unwrap_or_default(),
            rating,
        }
    }
}
