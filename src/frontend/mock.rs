//! Mock proxy backend for controller tests

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::backend::SearchBackend;
use crate::error::{ApiError, Result};
use crate::models::{SearchRequest, SearchResponse};

/// In-memory [`SearchBackend`] with call tracking
#[derive(Default, Clone)]
pub struct MockBackend {
    response: Arc<Mutex<SearchResponse>>,
    places: Arc<Mutex<serde_json::Value>>,
    /// Consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    searches: Arc<Mutex<Vec<SearchRequest>>>,
    keywords: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_response(self, response: SearchResponse) -> Self {
        *self.response.lock().await = response;
        self
    }

    pub async fn with_places(self, places: serde_json::Value) -> Self {
        *self.places.lock().await = places;
        self
    }

    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().await.clone()
    }

    pub async fn keywords(&self) -> Vec<String> {
        self.keywords.lock().await.clone()
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.searches.lock().await.push(request.clone());
        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }
        Ok(self.response.lock().await.clone())
    }

    async fn autocomplete(&self, keyword: &str) -> Result<serde_json::Value> {
        self.keywords.lock().await.push(keyword.to_string());
        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }
        Ok(self.places.lock().await.clone())
    }
}
