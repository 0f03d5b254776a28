use std::sync::Arc;

use crate::services::CatalogService;

/// Shared application state
///
/// Read-only after startup: every request fetches fresh data through the catalog.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
