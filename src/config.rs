use serde::Deserialize;

/// How the catalog batch treats individual lookup failures
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Any failed lookup empties the whole catalog
    #[default]
    AllOrNothing,
    /// Failed lookups are dropped, successes are kept in order
    Isolate,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Curated movie titles, comma separated
    #[serde(default = "default_movie_titles")]
    pub movie_titles: Vec<String>,

    /// Curated TV show titles, comma separated
    #[serde(default = "default_show_titles")]
    pub show_titles: Vec<String>,

    /// Failure handling for the catalog batch
    #[serde(default)]
    pub catalog_failure_policy: FailurePolicy,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// The part of the configuration the catalog service needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub movie_titles: Vec<String>,
    pub show_titles: Vec<String>,
    pub failure_policy: FailurePolicy,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_movie_titles() -> Vec<String> {
    [
        "Avengers Infinity War",
        "Oblivion",
        "Mission Impossible",
        "The Conjuring",
        "Salaar",
        "The Social Network",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_show_titles() -> Vec<String> {
    [
        "Farzi",
        "Loki",
        "Breaking Bad",
        "Young Sheldon",
        "Mr. Robot",
        "Better Call Saul",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        // Tolerate "A, B" as well as "A,B"
        for list in [&mut config.movie_titles, &mut config.show_titles] {
            *list = list
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }

        Ok(config)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            movie_titles: self.movie_titles.clone(),
            show_titles: self.show_titles.clone(),
            failure_policy: self.catalog_failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(vars(&[("OMDB_API_KEY", "secret")])).unwrap();

        assert_eq!(config.omdb_api_key, "secret");
        assert_eq!(config.omdb_api_url, "https://www.omdbapi.com/");
        assert_eq!(config.movie_titles.len(), 6);
        assert_eq!(config.movie_titles[0], "Avengers Infinity War");
        assert_eq!(config.show_titles[5], "Better Call Saul");
        assert_eq!(config.catalog_failure_policy, FailurePolicy::AllOrNothing);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        assert!(Config::from_vars(vars(&[("PORT", "8080")])).is_err());
    }

    #[test]
    fn test_title_lists_and_policy_from_env() {
        let config = Config::from_vars(vars(&[
            ("OMDB_API_KEY", "secret"),
            ("MOVIE_TITLES", "Heat, Ronin"),
            ("SHOW_TITLES", "Dark"),
            ("CATALOG_FAILURE_POLICY", "isolate"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        let catalog = config.catalog();
        assert_eq!(catalog.movie_titles, vec!["Heat", "Ronin"]);
        assert_eq!(catalog.show_titles, vec!["Dark"]);
        assert_eq!(catalog.failure_policy, FailurePolicy::Isolate);
        assert_eq!(config.port, 8080);
    }
}
