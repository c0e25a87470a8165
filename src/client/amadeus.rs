//! Amadeus travel API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{CredentialExchange, TravelApi};
use super::models::{FlightOffersResponse, RawFlightOffer, TokenResponse};
use super::token::{Credential, TokenCache};
use crate::config::{ClientCredentials, DEFAULT_AMADEUS_HOST};
use crate::error::{ApiError, Result};
use crate::models::SearchRequest;

/// Token endpoint for the client-credentials grant
const TOKEN_PATH: &str = "/v1/security/oauth2/token";

/// Flight offers search endpoint
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Airport and city search endpoint
const LOCATIONS_PATH: &str = "/v1/reference-data/locations";

/// Location subtypes offered as suggestions
const LOCATION_SUBTYPES: &str = "AIRPORT,CITY";

/// Suggestions returned per lookup
const LOCATION_PAGE_LIMIT: u32 = 10;

/// Request timeout applied to every upstream call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used for upstream calls
pub(crate) fn http_client() -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()).into())
}

/// OAuth2 client-credentials grant against the Amadeus token endpoint
pub struct ClientCredentialsGrant {
    http: HttpClient,
    token_url: String,
    credentials: ClientCredentials,
}

#[async_trait]
impl CredentialExchange for ClientCredentialsGrant {
    async fn exchange(&self) -> Result<Credential> {
        log::info!("Requesting new Amadeus access token");

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Authentication(format!("{}: {}", status, body)).into());
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse token response: {}", e))
        })?;

        log::info!("Amadeus access token acquired");
        Ok(Credential::from_lifetime(
            token.access_token,
            token.expires_in,
            Utc::now(),
        )?)
    }
}

/// Amadeus API client
pub struct AmadeusClient {
    http: HttpClient,
    base_url: String,
    tokens: TokenCache<ClientCredentialsGrant>,
}

impl AmadeusClient {
    /// Create a client against the default (test environment) host
    pub fn new(credentials: ClientCredentials) -> Result<Self> {
        Self::with_host(credentials, None)
    }

    /// Create a client against a custom host
    pub fn with_host(credentials: ClientCredentials, host: Option<String>) -> Result<Self> {
        let http = http_client()?;
        let base_url = host
            .unwrap_or_else(|| DEFAULT_AMADEUS_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        let grant = ClientCredentialsGrant {
            http: http.clone(),
            token_url: format!("{}{}", base_url, TOKEN_PATH),
            credentials,
        };

        Ok(Self {
            http,
            base_url,
            tokens: TokenCache::new(grant),
        })
    }

    /// The credential cache backing this client
    pub fn tokens(&self) -> &TokenCache<ClientCredentialsGrant> {
        &self.tokens
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let token = self.tokens.token().await?;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        match response.status() {
            StatusCode::OK => response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
            }),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Unexpected status code: {}", status));
                Err(ApiError::Upstream {
                    status: status.as_u16(),
                    body,
                }
                .into())
            }
        }
    }
}

#[async_trait]
impl TravelApi for AmadeusClient {
    async fn search_offers(&self, request: &SearchRequest) -> Result<Vec<RawFlightOffer>> {
        let params: Vec<(&str, String)> = request.upstream_params();
        let response: FlightOffersResponse = self.get_json(FLIGHT_OFFERS_PATH, &params).await?;
        Ok(response.data)
    }

    async fn lookup_places(&self, keyword: &str) -> Result<serde_json::Value> {
        let params = [
            ("subType", LOCATION_SUBTYPES.to_string()),
            ("keyword", keyword.to_string()),
            ("page[limit]", LOCATION_PAGE_LIMIT.to_string()),
        ];
        self.get_json(LOCATIONS_PATH, &params).await
    }
}
