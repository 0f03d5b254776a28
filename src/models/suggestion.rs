use serde::{Deserialize, Serialize};

/// Kind selected on the suggestion form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SuggestionKind {
    #[default]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
    Series,
}

impl SuggestionKind {
    pub const ALL: [SuggestionKind; 3] = [
        SuggestionKind::Movie,
        SuggestionKind::TvShow,
        SuggestionKind::Series,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Movie => "Movie",
            SuggestionKind::TvShow => "TV Show",
            SuggestionKind::Series => "Series",
        }
    }
}

/// A title suggested by a visitor. Suggestions are logged, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Suggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub kind: SuggestionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_movie() {
        let s = Suggestion::default();
        assert!(s.name.is_empty());
        assert!(s.genre.is_empty());
        assert_eq!(s.kind, SuggestionKind::Movie);
    }

    #[test]
    fn test_kind_deserialization() {
        let s: Suggestion =
            serde_json::from_str(r#"{"name":"Dark","genre":"Sci-Fi","kind":"TV Show"}"#).unwrap();
        assert_eq!(s.kind, SuggestionKind::TvShow);
        assert_eq!(s.kind.as_str(), "TV Show");
    }
}
