/// OMDb API provider
///
/// API Flow:
/// 1. Title lookup: `?apikey=..&t=<name>` → best match for a name
/// 2. Identifier lookup: `?apikey=..&i=<imdb id>&plot=full` → full record
///
/// OMDb signals "no match" with HTTP 200 and `"Response": "False"`.
use crate::{
    error::{AppError, AppResult},
    models::{OmdbTitle, TitleRecord},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;

const PROVIDER_NAME: &str = "omdb";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Issues one OMDb request and decodes the raw title
    async fn get(&self, params: &[(&str, &str)]) -> AppResult<OmdbTitle> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw OMDb API response");

        let raw: OmdbTitle = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize OMDb response"
            );
            AppError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
        })?;

        if !raw.is_match() || raw.identifier().is_none() {
            return Err(AppError::NotFound(
                raw.error.unwrap_or_else(|| "No matching title".to_string()),
            ));
        }

        Ok(raw)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup_by_title(&self, title: &str) -> AppResult<TitleRecord> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
        }

        let raw = self.get(&[("t", title)]).await?;
        let record = TitleRecord::from(raw);

        tracing::info!(
            title = %title,
            id = %record.id,
            provider = PROVIDER_NAME,
            "Title lookup completed"
        );

        Ok(record)
    }

    async fn lookup_by_id(&self, id: &str) -> AppResult<TitleRecord> {
        if id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Identifier cannot be empty".to_string(),
            ));
        }

        let raw = self.get(&[("i", id), ("plot", "full")]).await?;
        let record = TitleRecord::from(raw);

        tracing::info!(
            id = %id,
            title = %record.title,
            provider = PROVIDER_NAME,
            "Identifier lookup completed"
        );

        Ok(record)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TitleKind, RATING_SENTINEL};
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(server: &MockServer) -> OmdbProvider {
        OmdbProvider::new("test_key".to_string(), server.uri())
    }

    #[tokio::test]
    async fn test_lookup_by_title_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("apikey", "test_key"))
            .and(query_param("t", "Breaking Bad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Breaking Bad",
                "Year": "2008–2013",
                "Type": "series",
                "imdbID": "tt0903747",
                "imdbRating": "9.5",
                "Response": "True"
            })))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server);
        let record = provider.lookup_by_title("Breaking Bad").await.unwrap();

        assert_eq!(record.id, "tt0903747");
        assert_eq!(record.kind, TitleKind::Series);
        assert_eq!(record.rating, "9.5");
    }

    #[tokio::test]
    async fn test_lookup_by_id_requests_full_plot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("i", "tt1483013"))
            .and(query_param("plot", "full"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Oblivion",
                "Type": "movie",
                "imdbID": "tt1483013",
                "Plot": "A veteran assigned to extract Earth's remaining resources begins to question his mission.",
                "Response": "True"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = create_test_provider(&server);
        let record = provider.lookup_by_id("tt1483013").await.unwrap();

        assert_eq!(record.id, "tt1483013");
        assert_eq!(record.kind, TitleKind::Movie);
        assert_eq!(record.rating, RATING_SENTINEL);
    }

    #[tokio::test]
    async fn test_response_false_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": "False",
                "Error": "Movie not found!"
            })))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server);
        let result = provider.lookup_by_title("Nonexistent Title 123").await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Movie not found!"));
    }

    #[tokio::test]
    async fn test_error_status_is_external_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key!"))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server);
        let result = provider.lookup_by_id("tt0903747").await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_external_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server);
        let result = provider.lookup_by_title("Loki").await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let provider = create_test_provider(&server);
        let result = provider.lookup_by_title("   ").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
