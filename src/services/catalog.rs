use std::sync::Arc;

use crate::{
    config::{CatalogConfig, FailurePolicy},
    error::{AppError, AppResult},
    models::TitleRecord,
    services::providers::MetadataProvider,
};

/// Result of resolving a free-text search to a provider identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; no lookup was made
    Empty,
    Found(String),
    /// The provider had no match for the name
    NotFound,
    /// The lookup itself failed
    Failed,
}

/// Fetch/aggregate layer between the views and the metadata provider
///
/// Nothing is cached: every call goes to the provider again. Failures are
/// logged here and surface to callers only as empty/absent results.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn MetadataProvider>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(provider: Arc<dyn MetadataProvider>, config: CatalogConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Fetches the curated catalog: movie titles first, then shows, each in configured order
    pub async fn fetch_catalog(&self) -> Vec<TitleRecord> {
        tracing::info!(
            movies = self.config.movie_titles.len(),
            shows = self.config.show_titles.len(),
            provider = self.provider.name(),
            "Fetching catalog"
        );

        let (movies, shows) = tokio::join!(
            self.lookup_batch(&self.config.movie_titles),
            self.lookup_batch(&self.config.show_titles)
        );

        let results = movies.into_iter().chain(shows).collect();
        let catalog = assemble(results, self.config.failure_policy);

        tracing::info!(fetched = catalog.len(), "Catalog fetched");
        catalog
    }

    /// Looks up every title in parallel, returning results in input order
    async fn lookup_batch(&self, titles: &[String]) -> Vec<(String, AppResult<TitleRecord>)> {
        let mut tasks = Vec::with_capacity(titles.len());

        for title in titles {
            let provider = Arc::clone(&self.provider);
            let query = title.clone();
            let task = tokio::spawn(async move { provider.lookup_by_title(&query).await });
            tasks.push((title.clone(), task));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for (title, task) in tasks {
            let result = match task.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(error = %e, "Task join error");
                    Err(AppError::Internal(e.to_string()))
                }
            };
            results.push((title, result));
        }

        results
    }

    /// Fetches one title by identifier; any failure yields `None`
    pub async fn fetch_by_id(&self, id: &str) -> Option<TitleRecord> {
        match self.provider.lookup_by_id(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error fetching title details");
                None
            }
        }
    }

    /// Resolves a free-text name to a provider identifier
    pub async fn search(&self, name: &str) -> SearchOutcome {
        let name = name.trim();
        if name.is_empty() {
            return SearchOutcome::Empty;
        }

        match self.provider.lookup_by_title(name).await {
            Ok(record) if !record.id.is_empty() => SearchOutcome::Found(record.id),
            Ok(_) | Err(AppError::NotFound(_)) => {
                tracing::info!(query = %name, "No title matched search");
                SearchOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(query = %name, error = %e, "Error searching title");
                SearchOutcome::Failed
            }
        }
    }

    /// Identifier for a free-text name, or `None` on no match or failure
    pub async fn fetch_by_name(&self, name: &str) -> Option<String> {
        match self.search(name).await {
            SearchOutcome::Found(id) => Some(id),
            _ => None,
        }
    }
}

/// Applies the failure policy to per-title results, keeping their order
pub fn assemble(
    results: Vec<(String, AppResult<TitleRecord>)>,
    policy: FailurePolicy,
) -> Vec<TitleRecord> {
    let mut records = Vec::with_capacity(results.len());
    let mut failures = 0usize;

    for (title, result) in results {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::error!(title = %title, error = %e, "Catalog lookup failed");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        return records;
    }

    match policy {
        FailurePolicy::AllOrNothing => {
            tracing::error!(
                success_count = records.len(),
                error_count = failures,
                "Catalog lookup failed, discarding whole batch"
            );
            Vec::new()
        }
        FailurePolicy::Isolate => {
            tracing::warn!(
                success_count = records.len(),
                error_count = failures,
                "Partial catalog fetch failure"
            );
            records
        }
    }
}
