/// Title metadata provider abstraction
///
/// The catalog service only talks to providers through [`MetadataProvider`],
/// so the remote API (OMDb today) can be replaced or stubbed in tests.
use crate::{error::AppResult, models::TitleRecord};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for title metadata providers
///
/// Implementations return normalized [`TitleRecord`]s and report a lookup with
/// no match as [`AppError::NotFound`](crate::error::AppError::NotFound), so callers
/// can tell "nothing matched" apart from transport or provider failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up a single title by its free-text name
    async fn lookup_by_title(&self, title: &str) -> AppResult<TitleRecord>;

    /// Look up a single title by provider identifier, with the full plot
    async fn lookup_by_id(&self, id: &str) -> AppResult<TitleRecord>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
