use std::sync::Arc;

use smdb::{
    api::{create_router, AppState},
    config::Config,
    services::{CatalogService, OmdbProvider},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smdb=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let provider = OmdbProvider::new(config.omdb_api_key.clone(), config.omdb_api_url.clone());
    let catalog = CatalogService::new(Arc::new(provider), config.catalog());

    tracing::info!(
        provider = catalog.provider_name(),
        movies = config.movie_titles.len(),
        shows = config.show_titles.len(),
        policy = ?config.catalog_failure_policy,
        "Catalog configured"
    );

    let app = create_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
