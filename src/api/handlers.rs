use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form, Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::middleware::request_id::RequestId;
use crate::models::{Suggestion, Tab};
use crate::services::SearchOutcome;
use crate::views::{self, detail, list, list::Notice};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub tab: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List view, filtered by the `tab` query parameter
pub async fn list_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ListQuery>,
) -> (StatusCode, Html<String>) {
    let tab = Tab::from_query(params.tab.as_deref());
    tracing::info!(request_id = %request_id, tab = tab.as_query(), "Rendering list view");

    render_list(&state, tab, None).await
}

async fn render_list(
    state: &AppState,
    tab: Tab,
    notice: Option<Notice>,
) -> (StatusCode, Html<String>) {
    let view = list::load(state.catalog.fetch_catalog().await);
    let status = if view.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    (status, Html(list::render(&view, tab, notice)))
}

/// Search-to-navigate: a match redirects to its detail page, anything else stays on the list
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let tab = Tab::from_query(params.tab.as_deref());
    let outcome = state.catalog.search(&params.q).await;

    tracing::info!(
        request_id = %request_id,
        query = %params.q.trim(),
        outcome = ?outcome,
        "Search submitted"
    );

    match outcome {
        SearchOutcome::Found(id) => Redirect::to(&views::detail_href(&id)).into_response(),
        SearchOutcome::Empty => Redirect::to(&tab.href()).into_response(),
        SearchOutcome::NotFound | SearchOutcome::Failed => {
            render_list(&state, tab, Notice::for_outcome(&outcome))
                .await
                .into_response()
        }
    }
}

/// Detail view for one title
pub async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let view = detail::load(state.catalog.fetch_by_id(&id).await);
    let status = if view.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Html(detail::render(&view)))
}

/// Empty suggestion form
pub async fn suggestion_page() -> Html<String> {
    Html(views::suggestion::render(&Suggestion::default()))
}

/// Logs a suggestion and hands back a reset form. Nothing is persisted.
pub async fn submit_suggestion(
    Extension(request_id): Extension<RequestId>,
    Form(suggestion): Form<Suggestion>,
) -> Html<String> {
    tracing::info!(
        request_id = %request_id,
        name = %suggestion.name,
        genre = %suggestion.genre,
        kind = suggestion.kind.as_str(),
        submitted_at = %Utc::now().to_rfc3339(),
        "Suggestion submitted"
    );

    Html(views::suggestion::render(&Suggestion::default()))
}
