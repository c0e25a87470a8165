//! Flight search request and the upstream query it expands to

use serde::{Deserialize, Deserializer, Serialize};

/// Results requested from the travel API per search
pub const MAX_RESULTS: u32 = 10;

/// Every search is priced in this currency
pub const CURRENCY_CODE: &str = "USD";

/// Every search is for a single adult traveller
pub const ADULTS: u32 = 1;

/// Search form payload accepted by `POST /search-flights`.
///
/// Fields are not validated; missing values default to empty strings and
/// are rejected by the travel API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Origin IATA code
    pub origin: String,

    /// Destination IATA code
    pub destination: String,

    /// Outbound date (YYYY-MM-DD)
    pub departure_date: String,

    /// Return date, ignored for one-way trips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,

    /// One-way trip flag; `null` counts as a round trip
    #[serde(deserialize_with = "null_as_false")]
    pub one_way: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl SearchRequest {
    /// Return date actually sent upstream.
    ///
    /// One-way searches never carry one, and an empty form field counts as absent.
    pub fn effective_return_date(&self) -> Option<&str> {
        if self.one_way {
            return None;
        }
        self.return_date.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Query parameters for the flight-offers endpoint
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("originLocationCode", self.origin.clone()),
            ("destinationLocationCode", self.destination.clone()),
            ("departureDate", self.departure_date.clone()),
        ];

        if let Some(return_date) = self.effective_return_date() {
            params.push(("returnDate", return_date.to_string()));
        }

        params.push(("adults", ADULTS.to_string()));
        params.push(("max", MAX_RESULTS.to_string()));
        params.push(("currencyCode", CURRENCY_CODE.to_string()));
        params
    }
}
