use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{Tab, TitleRecord},
    services::SearchOutcome,
    views::list::CATALOG_ERROR,
};

use super::{
    handlers::{ListQuery, SearchQuery},
    AppState,
};

/// Catalog as JSON, filtered by `tab`
pub async fn list_titles(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<TitleRecord>>> {
    let catalog = state.catalog.fetch_catalog().await;
    if catalog.is_empty() {
        return Err(AppError::ExternalApi(CATALOG_ERROR.to_string()));
    }

    let tab = Tab::from_query(params.tab.as_deref());
    let titles = tab.filter(&catalog).into_iter().cloned().collect();
    Ok(Json(titles))
}

/// One title by identifier
pub async fn get_title(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TitleRecord>> {
    state
        .catalog
        .fetch_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No title with id {}", id)))
}

/// Resolves a name to an identifier
pub async fn search_title(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    match state.catalog.search(&params.q).await {
        SearchOutcome::Found(id) => Ok(Json(json!({ "id": id }))),
        SearchOutcome::Empty => Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        )),
        SearchOutcome::NotFound => Err(AppError::NotFound(format!(
            "No title matches {}",
            params.q.trim()
        ))),
        SearchOutcome::Failed => Err(AppError::ExternalApi(
            "Title search failed".to_string(),
        )),
    }
}
