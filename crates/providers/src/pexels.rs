//! Pexels stock-photo client.

use async_trait::async_trait;
use pagewright_core::error::PhotoError;
use pagewright_core::photos::{Photo, PhotoQuery, PhotoSource};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::openai_compat::http_client;

pub const DEFAULT_PEXELS_URL: &str = "https://api.pexels.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Searches the Pexels photo library.
///
/// Pexels authenticates with the raw key in `Authorization` (no `Bearer`).
pub struct PexelsPhotoSource {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl PexelsPhotoSource {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_PEXELS_URL.into(),
            api_key: api_key.into(),
            client: http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_params(query: &PhotoQuery) -> [(&'static str, String); 3] {
        [
            ("query", query.query.clone()),
            ("orientation", query.orientation.as_str().to_string()),
            ("per_page", query.per_page.to_string()),
        ]
    }
}

#[async_trait]
impl PhotoSource for PexelsPhotoSource {
    fn name(&self) -> &str {
        "pexels"
    }

    async fn search(&self, query: &PhotoQuery) -> std::result::Result<Vec<Photo>, PhotoError> {
        if self.api_key.is_empty() {
            return Err(PhotoError::NotConfigured("PEXELS_API_KEY is not set".into()));
        }

        let url = format!("{}/search", self.base_url);
        debug!(query = %query.query, orientation = query.orientation.as_str(), "Searching photos");

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .query(&Self::query_params(query))
            .send()
            .await
            .map_err(|e| PhotoError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return Err(PhotoError::AuthenticationFailed(
                "Invalid Pexels API key".into(),
            ));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Photo API returned error");
            return Err(PhotoError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| PhotoError::InvalidResponse(e.to_string()))?;

        Ok(body.photos)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_core::photos::Orientation;

    #[test]
    fn defaults_to_public_endpoint() {
        let source = PexelsPhotoSource::new("key");
        assert_eq!(source.name(), "pexels");
        assert_eq!(source.base_url(), DEFAULT_PEXELS_URL);

        let custom = PexelsPhotoSource::new("key").with_base_url("http://localhost:9000/v1/");
        assert_eq!(custom.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn query_params_carry_orientation_and_page_size() {
        let params = PexelsPhotoSource::query_params(&PhotoQuery::new(
            "bakery interior",
            Orientation::Portrait,
            5,
        ));
        assert_eq!(params[0], ("query", "bakery interior".to_string()));
        assert_eq!(params[1], ("orientation", "portrait".to_string()));
        assert_eq!(params[2], ("per_page", "5".to_string()));
    }

    #[test]
    fn parses_search_payload() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "page": 1,
                "photos": [
                    {"id": 1, "alt": "Team meeting", "photographer": "A", "src": {"large": "https://p/1-l.jpg", "medium": "https://p/1-m.jpg"}},
                    {"id": 2, "src": {"large": "https://p/2-l.jpg"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(body.photos.len(), 2);
        assert_eq!(body.photos[0].src.medium, "https://p/1-m.jpg");
        assert!(body.photos[1].alt.is_empty());

        let empty: SearchResponse = serde_json::from_str(r#"{"total_results": 0}"#).unwrap();
        assert!(empty.photos.is_empty());
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let source = PexelsPhotoSource::new("");
        let err = source
            .search(&PhotoQuery::new("office", Orientation::Landscape, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, PhotoError::NotConfigured(_)));
    }
}
