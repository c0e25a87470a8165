//! Mock API clients for testing
//!
//! Provide in-memory implementations of [`TravelApi`] and [`LogoApi`] so
//! handlers can be exercised without real upstream calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{LogoApi, TravelApi};
use super::models::RawFlightOffer;
use crate::error::{ApiError, Result};
use crate::models::SearchRequest;

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub search_offers: usize,
    pub lookup_places: usize,
    pub fetch_logo: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.search_offers + self.lookup_places + self.fetch_logo
    }
}

/// Mock travel API client.
///
/// Configure expected responses via builder methods, then use in tests.
#[derive(Default)]
pub struct MockTravelClient {
    /// Offers returned from search_offers
    offers: Arc<Mutex<Vec<RawFlightOffer>>>,
    /// Document returned from lookup_places
    places: Arc<Mutex<serde_json::Value>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Search requests received
    captured_searches: Arc<Mutex<Vec<SearchRequest>>>,
    /// Keywords received
    captured_keywords: Arc<Mutex<Vec<String>>>,
}

impl MockTravelClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure offers to return from search_offers.
    pub async fn with_offers(self, offers: Vec<RawFlightOffer>) -> Self {
        *self.offers.lock().await = offers;
        self
    }

    /// Configure the document returned from lookup_places.
    pub async fn with_places(self, places: serde_json::Value) -> Self {
        *self.places.lock().await = places;
        self
    }

    /// Configure an error for the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get call counts for verification.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Search requests received, in order.
    pub async fn captured_searches(&self) -> Vec<SearchRequest> {
        self.captured_searches.lock().await.clone()
    }

    /// Keywords received, in order.
    pub async fn captured_keywords(&self) -> Vec<String> {
        self.captured_keywords.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TravelApi for MockTravelClient {
    async fn search_offers(&self, request: &SearchRequest) -> Result<Vec<RawFlightOffer>> {
        self.call_count.lock().await.search_offers += 1;
        self.captured_searches.lock().await.push(request.clone());
        self.take_error().await?;
        Ok(self.offers.lock().await.clone())
    }

    async fn lookup_places(&self, keyword: &str) -> Result<serde_json::Value> {
        self.call_count.lock().await.lookup_places += 1;
        self.captured_keywords.lock().await.push(keyword.to_string());
        self.take_error().await?;
        Ok(self.places.lock().await.clone())
    }
}

/// Mock logo client returning fixed bytes or failing
#[derive(Default)]
pub struct MockLogoClient {
    image: Arc<Mutex<Option<Vec<u8>>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

impl MockLogoClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the image returned for every domain.
    pub async fn with_image(self, image: Vec<u8>) -> Self {
        *self.image.lock().await = Some(image);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }
}

#[async_trait]
impl LogoApi for MockLogoClient {
    async fn fetch_logo(&self, domain: &str) -> Result<Vec<u8>> {
        self.call_count.lock().await.fetch_logo += 1;
        match self.image.lock().await.clone() {
            Some(bytes) => Ok(bytes),
            None => Err(ApiError::Upstream {
                status: 404,
                body: format!("no logo for {}", domain),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockTravelClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.lookup_places("PA").await.is_err());
        assert!(mock.lookup_places("PA").await.is_ok());

        let counts = mock.call_counts().await;
        assert_eq!(counts.lookup_places, 2);
        assert_eq!(counts.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_captures_requests() {
        let mock = MockTravelClient::new();
        let request = SearchRequest {
            origin: "GRU".to_string(),
            ..Default::default()
        };

        mock.search_offers(&request).await.unwrap();

        assert_eq!(mock.captured_searches().await, vec![request]);
    }

    #[tokio::test]
    async fn test_mock_logo_without_image_fails() {
        let mock = MockLogoClient::new();
        assert!(mock.fetch_logo("delta.com").await.is_err());
        assert_eq!(mock.call_counts().await.fetch_logo, 1);
    }
}
