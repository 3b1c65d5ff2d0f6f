//! Picsum API client for image listing.
//!
//! This module provides the client for the public picsum.photos listing
//! endpoint, behind the [`HttpClient`] trait so tests can inject a mock.

use std::sync::Arc;

use crate::models::PicsumImage;
use crate::traits::{Headers, HttpClient, HttpError};

pub const PICSUM_BASE_URL: &str = "https://picsum.photos";

/// Error type for Picsum client operations
#[derive(Debug, thiserror::Error)]
pub enum PicsumError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

/// Client for the picsum.photos listing API.
///
/// Holds the base URL and an injected HTTP client. No authentication is
/// required by the API.
pub struct PicsumClient {
    /// Base URL for the API
    pub base_url: String,
    /// Injected HTTP client
    http: Arc<dyn HttpClient>,
}

impl PicsumClient {
    /// Create a new PicsumClient with the default base URL.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: PICSUM_BASE_URL.to_string(),
            http,
        }
    }

    /// Create a new PicsumClient with a custom base URL.
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: String) -> Self {
        Self { base_url, http }
    }

    /// Build the listing URL for a page.
    ///
    /// This is also what the `api_error` analytics event records as the
    /// failing URL.
    pub fn list_url(&self, page: u32, limit: u32) -> String {
        format!("{}/v2/list?page={}&limit={}", self.base_url, page, limit)
    }

    /// Fetch one page of image metadata.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `limit` - items per page
    ///
    /// # Returns
    /// The ordered image list for the page, or an error
    pub async fn list_images(&self, page: u32, limit: u32) -> Result<Vec<PicsumImage>, PicsumError> {
        let url = self.list_url(page, limit);

        let response = self.http.get(&url, &Headers::new()).await?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PicsumError::ServerError {
                status: response.status,
                message,
            });
        }

        let images: Vec<PicsumImage> = response.json()?;
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;

    fn sample_body() -> Bytes {
        Bytes::from(
            r#"[{"id":"0","author":"Alejandro Escamilla","width":5000,"height":3333,
                "download_url":"https://picsum.photos/id/0/5000/3333"}]"#,
        )
    }

    #[test]
    fn test_picsum_client_new() {
        let client = PicsumClient::new(Arc::new(MockHttpClient::new()));
        assert_eq!(client.base_url, PICSUM_BASE_URL);
    }

    #[test]
    fn test_picsum_client_with_base_url() {
        let client = PicsumClient::with_base_url(
            Arc::new(MockHttpClient::new()),
            "http://localhost:8080".to_string(),
        );
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_list_url() {
        let client = PicsumClient::new(Arc::new(MockHttpClient::new()));
        assert_eq!(
            client.list_url(3, 12),
            "https://picsum.photos/v2/list?page=3&limit=12"
        );
    }

    #[tokio::test]
    async fn test_list_images_success() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "https://picsum.photos/v2/list?page=1&limit=12",
            MockResponse::Success(Response::new(200, sample_body())),
        );

        let client = PicsumClient::new(http.clone());
        let images = client.list_images(1, 12).await.unwrap();

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "0");
        assert_eq!(images[0].author, "Alejandro Escamilla");

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://picsum.photos/v2/list?page=1&limit=12"
        );
    }

    #[tokio::test]
    async fn test_list_images_server_error() {
        let http = Arc::new(MockHttpClient::new());
        http.set_default_response(MockResponse::Success(Response::new(
            503,
            Bytes::from("Service Unavailable"),
        )));

        let client = PicsumClient::new(http);
        let err = client.list_images(1, 12).await.unwrap_err();

        match err {
            PicsumError::ServerError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_images_transport_error() {
        let http = Arc::new(MockHttpClient::new());
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "connection refused".to_string(),
        )));

        let client = PicsumClient::new(http);
        let err = client.list_images(2, 12).await.unwrap_err();
        assert!(matches!(err, PicsumError::Http(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_list_images_malformed_body() {
        let http = Arc::new(MockHttpClient::new());
        http.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("not json"),
        )));

        let client = PicsumClient::new(http);
        let err = client.list_images(1, 12).await.unwrap_err();
        assert!(matches!(err, PicsumError::Json(_)));
    }
}
