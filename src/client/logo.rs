//! Logo lookup client
//!
//! The API key stays on the server; browsers only ever see `/logo/{domain}`.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;

use super::amadeus::http_client;
use super::api::LogoApi;
use crate::config::DEFAULT_LOGO_HOST;
use crate::error::{ApiError, Result};

/// Client for the logo.dev domain lookup API
pub struct LogoDevClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl LogoDevClient {
    /// Create a client; without a key every lookup fails with [`ApiError::LogoKeyMissing`]
    pub fn new(api_key: Option<String>, host: Option<String>) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: host
                .unwrap_or_else(|| DEFAULT_LOGO_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Domains are plain host names; anything else never reaches the upstream API
pub fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain.len() <= 253
        && domain.contains('.')
        && !domain.starts_with('.')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

#[async_trait]
impl LogoApi for LogoDevClient {
    async fn fetch_logo(&self, domain: &str) -> Result<Vec<u8>> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::LogoKeyMissing)?;

        if !is_valid_domain(domain) {
            return Err(ApiError::InvalidResponse(format!("Invalid domain: {}", domain)).into());
        }

        let url = format!("{}/domains/{}", self.base_url, domain);
        let response = self
            .http
            .get(&url)
            .bearer_auth(api_key)
            .header(ACCEPT, "image/png")
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

        let bytes = response.bytes().await.map_err(ApiError::from)?;
        Ok(bytes.to_vec())
    }
}
