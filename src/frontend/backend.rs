//! Proxy access for the client controllers
//!
//! [`SearchBackend`] is the seam between the controllers and the network;
//! [`ProxyBackend`] talks to a running proxy over HTTP.

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::client::amadeus::http_client;
use crate::error::{ApiError, Result};
use crate::models::{SearchRequest, SearchResponse};

/// Default proxy address used by the CLI
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000";

/// Endpoints the client controllers call
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// `POST /search-flights`
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// `GET /autocomplete?keyword=`
    async fn autocomplete(&self, keyword: &str) -> Result<serde_json::Value>;
}

/// HTTP client for a running proxy
pub struct ProxyBackend {
    http: HttpClient,
    base_url: String,
}

impl ProxyBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchBackend for ProxyBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/search-flights", self.base_url);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::from)?;

        // Failures still carry an `{error}` body worth showing
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("search returned {}: {}", status, e)).into()
        })
    }

    async fn autocomplete(&self, keyword: &str) -> Result<serde_json::Value> {
        let url = format!("{}/autocomplete", self.base_url);
        log::debug!("GET {}?keyword={}", url, keyword);

        let response = self
            .http
            .get(&url)
            .query(&[("keyword", keyword)])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::from(e).into())
    }
}
