//! Raw travel API payloads
//!
//! Only the fields the proxy reads are modelled; everything else in the
//! upstream documents is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Response of the client-credentials token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token
    pub access_token: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Envelope of `GET /v2/shopping/flight-offers`
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffersResponse {
    /// Required; an envelope without it is not a result set
    pub data: Vec<RawFlightOffer>,
}

/// One priced offer as returned upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFlightOffer {
    pub price: RawPrice,

    #[serde(default)]
    pub itineraries: Vec<RawItinerary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPrice {
    /// Decimal string, e.g. "812.40"
    pub total: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItinerary {
    /// ISO-8601 duration of the whole itinerary
    pub duration: String,

    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    pub carrier_code: String,
    pub number: String,
    pub departure: RawEndpoint,
    pub arrival: RawEndpoint,
    pub duration: String,
}

/// Departure or arrival point of a segment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEndpoint {
    pub iata_code: String,

    /// Local timestamp without offset, e.g. "2025-03-10T22:15:00"
    pub at: String,
}
