use serde::{Deserialize, Serialize};

use super::{TitleKind, TitleRecord};

/// Filter selection on the list view, mirrored in the `tab` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "movies")]
    Movies,
    #[serde(rename = "tv shows")]
    TvShows,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::All, Tab::Movies, Tab::TvShows];

    /// Reads the tab from its query value; unknown or missing values select `All`
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("movies") => Tab::Movies,
            Some("tv shows") => Tab::TvShows,
            _ => Tab::All,
        }
    }

    /// Canonical query value, the inverse of [`Tab::from_query`]
    pub fn as_query(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Movies => "movies",
            Tab::TvShows => "tv shows",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Movies => "Movies",
            Tab::TvShows => "TV Shows",
        }
    }

    /// Link that selects this tab on the list view
    pub fn href(&self) -> String {
        format!("/?tab={}", urlencoding::encode(self.as_query()))
    }

    fn accepts(&self, kind: TitleKind) -> bool {
        match self {
            Tab::All => true,
            Tab::Movies => kind == TitleKind::Movie,
            Tab::TvShows => kind == TitleKind::Series,
        }
    }

    /// The subset of `items` shown under this tab, in their original order
    pub fn filter<'a>(&self, items: &'a [TitleRecord]) -> Vec<&'a TitleRecord> {
        items.iter().filter(|item| self.accepts(item.kind)).collect()
    }
}
