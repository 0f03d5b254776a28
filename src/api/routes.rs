use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::{handlers, json, AppState};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Screens
        .route("/", get(handlers::list_page))
        .route("/search", get(handlers::search))
        .route("/movie/:id", get(handlers::detail_page))
        .route(
            "/suggest-me",
            get(handlers::suggestion_page).post(handlers::submit_suggestion),
        )
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// JSON routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/titles", get(json::list_titles))
        .route("/titles/:id", get(json::get_title))
        .route("/search", get(json::search_title))
        .layer(CorsLayer::permissive())
}
