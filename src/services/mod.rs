pub mod catalog;
pub mod providers;

pub use catalog::{CatalogService, SearchOutcome};
pub use providers::{MetadataProvider, OmdbProvider};
