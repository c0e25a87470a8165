//! Simplified flight offers served to the frontend
//!
//! The proxy reshapes raw upstream offers into [`Offer`] values: only the
//! first itinerary is kept and the stop count is derived from its segments.

use serde::{Deserialize, Serialize};

use crate::client::models::{RawFlightOffer, RawSegment};
use crate::error::ApiError;

/// One priced itinerary option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Decimal price string as quoted upstream
    pub price: String,

    pub currency: String,

    /// ISO-8601 duration of the itinerary
    pub duration: String,

    /// Always `flights.len() - 1`
    pub stops: usize,

    pub flights: Vec<Segment>,
}

/// One flown leg within an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Marketing carrier code
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_time: String,
    pub arrival_airport: String,
    pub arrival_time: String,
    pub duration: String,
}

/// Wire shape of `POST /search-flights`.
///
/// Exactly one of the two fields is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<Offer>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn offers(offers: Vec<Offer>) -> Self {
        Self {
            offers: Some(offers),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            offers: None,
            error: Some(message.into()),
        }
    }
}

impl From<&RawSegment> for Segment {
    fn from(segment: &RawSegment) -> Self {
        Self {
            airline: segment.carrier_code.clone(),
            flight_number: segment.number.clone(),
            departure_airport: segment.departure.iata_code.clone(),
            departure_time: segment.departure.at.clone(),
            arrival_airport: segment.arrival.iata_code.clone(),
            arrival_time: segment.arrival.at.clone(),
            duration: segment.duration.clone(),
        }
    }
}

impl TryFrom<RawFlightOffer> for Offer {
    type Error = ApiError;

    fn try_from(raw: RawFlightOffer) -> Result<Self, Self::Error> {
        let itinerary = raw
            .itineraries
            .first()
            .ok_or_else(|| ApiError::InvalidResponse("Offer has no itineraries".to_string()))?;

        if itinerary.segments.is_empty() {
            return Err(ApiError::InvalidResponse(
                "Itinerary has no segments".to_string(),
            ));
        }

        let flights: Vec<Segment> = itinerary.segments.iter().map(Segment::from).collect();

        Ok(Self {
            price: raw.price.total,
            currency: raw.price.currency,
            duration: itinerary.duration.clone(),
            stops: flights.len() - 1,
            flights,
        })
    }
}

/// Reshape a full upstream result list. Fails as a whole if any offer is malformed.
pub fn reshape_offers(raw: Vec<RawFlightOffer>) -> Result<Vec<Offer>, ApiError> {
    raw.into_iter().map(Offer::try_from).collect()
}
