//! Remote catalogue client
//!
//! One-shot reads against the motorcycles endpoint. No caching, no retry;
//! transport failures and non-2xx statuses surface as errors for the caller
//! to log and degrade on.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Motorcycle;

/// Default public endpoint (API Ninjas)
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";

/// HTTP client for the remote motorcycle catalogue
#[derive(Clone)]
pub struct CatalogueClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for CatalogueClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CatalogueClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl CatalogueClient {
    /// Create a client against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom endpoint (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidInput(
                "API key must not be empty".to_string(),
            ));
        }
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Fetch the catalogue page (the server caps it at ~30 entries)
    pub async fn fetch_all(&self) -> Result<Vec<Motorcycle>> {
        self.fetch(&[]).await
    }

    /// Fetch entries whose model name matches the query text
    pub async fn fetch_by_text(&self, query: &str) -> Result<Vec<Motorcycle>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput(
                "Search query must not be empty".to_string(),
            ));
        }
        self.fetch(&[("model", query)]).await
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<Vec<Motorcycle>> {
        let url = format!("{}/v1/motorcycles", self.base_url);
        tracing::debug!(%url, ?params, "fetching remote catalogue");

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: parse_api_error(status, &body),
            });
        }

        let motos = response.json::<Vec<Motorcycle>>().await?;
        tracing::debug!(entries = motos.len(), "remote catalogue fetched");
        Ok(motos)
    }
}

/// Extract a human-readable message from an error body, falling back to the
/// status line when the body is not the expected JSON shape
fn parse_api_error(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.error.or(parsed.message) {
            return message;
        }
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(CatalogueClient::new("  ").is_err());
        assert!(CatalogueClient::new("real-key").is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogueClient::with_base_url("http://localhost:9999/", "key").unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = CatalogueClient::new("super-secret").unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_parse_api_error_json_body() {
        let message = parse_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Missing API Key."}"#,
        );
        assert_eq!(message, "Missing API Key.");
    }

    #[test]
    fn test_parse_api_error_plain_body() {
        let message = parse_api_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(message, "Bad Gateway");
    }
}
