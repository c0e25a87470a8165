//! Proxy endpoint handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::error::ProxyError;
use super::state::AppState;
use crate::airlines::AirlineDirectory;
use crate::models::{SearchRequest, SearchResponse, reshape_offers};

pub const SEARCH_FAILED: &str = "Failed to fetch flight offers";
pub const AUTOCOMPLETE_FAILED: &str = "Failed to fetch airport suggestions";
pub const MISSING_KEYWORD: &str = "Missing keyword";
pub const LOGO_UNAVAILABLE: &str = "Logo not available";

/// `POST /search-flights`
pub async fn search_flights(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ProxyError> {
    let Json(request) = payload.map_err(|e| ProxyError::BadRequest(e.body_text()))?;

    log::info!(
        "Flight search request: {} -> {} on {} (one way: {})",
        request.origin,
        request.destination,
        request.departure_date,
        request.one_way
    );

    let raw = state
        .travel
        .search_offers(&request)
        .await
        .map_err(|e| ProxyError::upstream(SEARCH_FAILED, e))?;
    let offers = reshape_offers(raw).map_err(|e| ProxyError::upstream(SEARCH_FAILED, e))?;

    log::info!("Returning {} offers", offers.len());
    Ok(Json(SearchResponse::offers(offers)))
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    keyword: Option<String>,
}

/// `GET /autocomplete?keyword=`
///
/// There is no minimum length here; the two-character floor lives in the client.
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let keyword = query
        .keyword
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ProxyError::BadRequest(MISSING_KEYWORD.to_string()))?;

    let body = state
        .travel
        .lookup_places(&keyword)
        .await
        .map_err(|e| ProxyError::upstream(AUTOCOMPLETE_FAILED, e))?;

    Ok(Json(body))
}

/// `GET /logo/{domain}`: image relay, 404 on any failure
pub async fn logo(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    match state.logos.fetch_logo(&domain).await {
        Ok(bytes) => ([(CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            log::error!("Error fetching logo for {}: {}", domain, e);
            (
                StatusCode::NOT_FOUND,
                [(CONTENT_TYPE, "text/plain; charset=utf-8")],
                LOGO_UNAVAILABLE,
            )
                .into_response()
        }
    }
}

/// `GET /airlines.json`
pub async fn airlines(State(state): State<AppState>) -> Json<AirlineDirectory> {
    Json(state.airlines.as_ref().clone())
}
