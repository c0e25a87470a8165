//! API trait definitions split by responsibility
//!
//! - [`CredentialExchange`] - obtaining a bearer credential
//! - [`TravelApi`] - flight offers and place lookups
//! - [`LogoApi`] - airline logo images

use async_trait::async_trait;

use super::models::RawFlightOffer;
use super::token::Credential;
use crate::error::Result;
use crate::models::SearchRequest;

/// Exchanges long-lived client credentials for a short-lived bearer credential
#[async_trait]
pub trait CredentialExchange: Send + Sync {
    async fn exchange(&self) -> Result<Credential>;
}

/// Authenticated travel-data operations
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// Search priced flight offers for the given criteria
    async fn search_offers(&self, request: &SearchRequest) -> Result<Vec<RawFlightOffer>>;

    /// Look up airports and cities matching a partial name.
    ///
    /// The upstream document is returned untouched.
    async fn lookup_places(&self, keyword: &str) -> Result<serde_json::Value>;
}

/// Image lookup by company domain
#[async_trait]
pub trait LogoApi: Send + Sync {
    /// Fetch a PNG logo for `domain`
    async fn fetch_logo(&self, domain: &str) -> Result<Vec<u8>>;
}
