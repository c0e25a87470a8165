//! Search page controller
//!
//! Drives one search form: posts it to the proxy, rebuilds the results view
//! from the response and owns the [`LastOffers`] the selection controller
//! reads. Every search is issued a ticket and only the response carrying
//! the latest ticket is applied.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::backend::SearchBackend;
use super::html::escape_html;
use super::state::{LastOffers, Selection};
use crate::airlines::AirlineDirectory;
use crate::error::Result;
use crate::models::{Offer, SearchRequest, SearchResponse, Segment};
use crate::output::formatters::{format_clock_time, format_iso_duration};

/// Shown when no offers come back
pub const NO_FLIGHTS: &str = "No flights found.";

/// Shown when the proxy could not be reached or answered garbage
pub const TRANSPORT_FAILED: &str = "Error fetching flights.";

/// Autocomplete stays silent below this many characters
pub const MIN_SUGGEST_CHARS: usize = 2;

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub one_way: bool,
}

impl SearchForm {
    pub fn to_request(&self) -> SearchRequest {
        let return_date = self.return_date.trim();
        SearchRequest {
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            departure_date: self.departure_date.trim().to_string(),
            return_date: (!return_date.is_empty()).then(|| return_date.to_string()),
            one_way: self.one_way,
        }
    }
}

/// One rendered segment line of an offer card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentLine {
    pub airline_code: String,
    pub airline_name: String,
    /// Proxy logo path, when the carrier's domain is known
    pub logo_url: Option<String>,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_clock: String,
    pub arrival_airport: String,
    pub arrival_clock: String,
    pub duration: String,
}

/// One rendered offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCard {
    /// Position in LastOffers, used as the checkbox value
    pub index: usize,
    pub generation: u64,
    pub price: String,
    pub currency: String,
    pub duration: String,
    pub stops: usize,
    pub segments: Vec<SegmentLine>,
}

impl OfferCard {
    fn build(index: usize, generation: u64, offer: &Offer, airlines: &AirlineDirectory) -> Self {
        Self {
            index,
            generation,
            price: offer.price.clone(),
            currency: offer.currency.clone(),
            duration: format_iso_duration(&offer.duration),
            stops: offer.stops,
            segments: offer
                .flights
                .iter()
                .map(|segment| SegmentLine::build(segment, airlines))
                .collect(),
        }
    }

    /// 1-based label shown on the card
    pub fn option_number(&self) -> usize {
        self.index + 1
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<div class="flight-card">
  <div class="flight-header">
    <input type="checkbox" class="offer-select" value="{index}" data-generation="{generation}">
    <h3>OPTION {number}</h3>
  </div>
  <p><strong>Price:</strong> {currency} {price}</p>
  <p><strong>Duration:</strong> {duration}</p>
  <p><strong>Stops:</strong> {stops}</p>
"#,
            index = self.index,
            generation = self.generation,
            number = self.option_number(),
            currency = escape_html(&self.currency),
            price = escape_html(&self.price),
            duration = escape_html(&self.duration),
            stops = self.stops,
        );

        for segment in &self.segments {
            html.push_str(&segment.to_html());
        }
        html.push_str("</div>\n");
        html
    }
}

impl SegmentLine {
    fn build(segment: &Segment, airlines: &AirlineDirectory) -> Self {
        Self {
            airline_code: segment.airline.clone(),
            airline_name: airlines.name_for(&segment.airline).to_string(),
            logo_url: airlines.logo_path(&segment.airline),
            flight_number: segment.flight_number.clone(),
            departure_airport: segment.departure_airport.clone(),
            departure_clock: format_clock_time(&segment.departure_time),
            arrival_airport: segment.arrival_airport.clone(),
            arrival_clock: format_clock_time(&segment.arrival_time),
            duration: format_iso_duration(&segment.duration),
        }
    }

    /// `GRU → LIS`
    pub fn route(&self) -> String {
        format!("{} → {}", self.departure_airport, self.arrival_airport)
    }

    fn to_html(&self) -> String {
        let logo = self
            .logo_url
            .as_ref()
            .map(|url| {
                format!(
                    r#"<img src="{}" alt="{} logo" class="airline-logo" onerror="this.style.display='none';">"#,
                    escape_html(url),
                    escape_html(&self.airline_code)
                )
            })
            .unwrap_or_default();

        format!(
            r#"  <div class="flight-segment">
    {logo}
    <p><strong>{name} {number}</strong></p>
    <p>{from} {departs} → {to} {arrives}</p>
    <p><strong>Segment Duration:</strong> {duration}</p>
  </div>
"#,
            name = escape_html(&self.airline_name),
            number = escape_html(&self.flight_number),
            from = escape_html(&self.departure_airport),
            departs = escape_html(&self.departure_clock),
            to = escape_html(&self.arrival_airport),
            arrives = escape_html(&self.arrival_clock),
            duration = escape_html(&self.duration),
        )
    }
}

/// What the results area currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsView {
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty,
    Offers(Vec<OfferCard>),
}

impl ResultsView {
    pub fn to_html(&self) -> String {
        match self {
            ResultsView::Idle => String::new(),
            ResultsView::Loading => r#"<div class="loader"></div>"#.to_string(),
            ResultsView::Error(message) => {
                format!(r#"<p class="error">Error: {}</p>"#, escape_html(message))
            }
            ResultsView::Empty => format!("<p>{}</p>", NO_FLIGHTS),
            ResultsView::Offers(cards) => cards.iter().map(OfferCard::to_html).collect(),
        }
    }
}

/// An issued search waiting for its response
#[derive(Debug, Clone)]
pub struct PendingSearch {
    ticket: u64,
    request: SearchRequest,
}

impl PendingSearch {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

/// Autocomplete entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub name: String,
    pub iata_code: String,
}

impl Suggestion {
    /// `LISBON (LIS)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.iata_code)
    }
}

/// Search page state machine
pub struct SearchController<B> {
    backend: B,
    airlines: Arc<AirlineDirectory>,
    view: ResultsView,
    last_offers: LastOffers,
    latest_ticket: u64,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B, airlines: Arc<AirlineDirectory>) -> Self {
        Self {
            backend,
            airlines,
            view: ResultsView::Idle,
            last_offers: LastOffers::new(),
            latest_ticket: 0,
        }
    }

    /// Issue a ticket for a new search and show the loading indicator
    pub fn begin(&mut self, form: &SearchForm) -> PendingSearch {
        self.latest_ticket += 1;
        self.view = ResultsView::Loading;
        PendingSearch {
            ticket: self.latest_ticket,
            request: form.to_request(),
        }
    }

    /// Apply a search outcome.
    ///
    /// Returns `false` when a newer search was issued in the meantime, in
    /// which case nothing changes.
    pub fn finish(&mut self, pending: PendingSearch, outcome: Result<SearchResponse>) -> bool {
        if pending.ticket != self.latest_ticket {
            log::debug!(
                "Discarding stale search response (ticket {} < {})",
                pending.ticket,
                self.latest_ticket
            );
            return false;
        }

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                log::error!("Fetch error: {}", e);
                SearchResponse::error(TRANSPORT_FAILED)
            }
        };

        self.view = match response {
            SearchResponse {
                error: Some(message),
                ..
            } => {
                self.last_offers.clear();
                ResultsView::Error(message)
            }
            SearchResponse {
                offers: Some(offers),
                ..
            } if !offers.is_empty() => {
                self.last_offers.replace(offers);
                let generation = self.last_offers.generation();
                ResultsView::Offers(
                    self.last_offers
                        .offers()
                        .iter()
                        .enumerate()
                        .map(|(i, offer)| OfferCard::build(i, generation, offer, &self.airlines))
                        .collect(),
                )
            }
            _ => {
                self.last_offers.clear();
                ResultsView::Empty
            }
        };
        true
    }

    /// Run a search to completion
    pub async fn submit(&mut self, form: &SearchForm) -> bool {
        let pending = self.begin(form);
        let outcome = self.backend.search(pending.request()).await;
        self.finish(pending, outcome)
    }

    /// Airport/city suggestions for partially typed input
    pub async fn suggest(&self, keyword: &str) -> Result<Vec<Suggestion>> {
        let keyword = keyword.trim();
        if keyword.chars().count() < MIN_SUGGEST_CHARS {
            return Ok(Vec::new());
        }

        let body = self.backend.autocomplete(keyword).await?;
        let entries = match body.get("data") {
            Some(serde_json::Value::Array(entries)) => entries.as_slice(),
            _ => &[],
        };
        Ok(entries
            .iter()
            .filter_map(|entry| Suggestion::deserialize(entry).ok())
            .collect())
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    /// The "show selected" button is only offered next to actual offers
    pub fn show_selection_trigger(&self) -> bool {
        matches!(self.view, ResultsView::Offers(_))
    }

    pub fn results_html(&self) -> String {
        self.view.to_html()
    }

    pub fn last_offers(&self) -> &LastOffers {
        &self.last_offers
    }

    /// Check the given option indices against the current offers
    pub fn select(&self, indices: impl IntoIterator<Item = usize>) -> Selection {
        self.last_offers.select(indices)
    }

    pub fn airlines(&self) -> &Arc<AirlineDirectory> {
        &self.airlines
    }
}
