use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use yyz_core::search::HOME_AIRPORT;
use yyz_core::{SearchError, SearchQueryBuilder, TripRequest};
use yyz_partner::FlightOption;

use crate::{error::ApiError, response::ApiResponse, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights/search", post(search_flights))
        .route("/api/flights/search/link", post(search_link))
}

/// Outbound handoff target. The caller opens `search_url` in a new browsing
/// context; nothing here navigates or fetches it.
#[derive(Debug, Serialize)]
pub struct SearchLink {
    pub search_url: String,
    /// Derived from return-date presence, never stored on the request
    pub trip_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FlightSearchResult {
    pub flights: Vec<FlightOption>,
    pub total_results: usize,
    pub currency: String,
    pub search_completed: bool,
}

pub(crate) fn link_for(request: &TripRequest, base: &str) -> Result<SearchLink, SearchError> {
    let query = SearchQueryBuilder::build(request)?;
    Ok(SearchLink {
        search_url: query.outbound_url(base),
        trip_type: if request.return_date.is_some() {
            "round-trip"
        } else {
            "one-way"
        },
    })
}

/// Browseable fare options for a route, from the partner fare feed. The same
/// validation gates this as the handoff link; an invalid request yields no
/// results at all.
async fn search_flights(
    Json(request): Json<TripRequest>,
) -> Result<Json<ApiResponse<FlightSearchResult>>, ApiError> {
    let query = SearchQueryBuilder::build(&request)?;
    let departure = request
        .departure_date
        .ok_or(SearchError::MissingDepartureDate)?;

    let flights = yyz_partner::flight_options(
        query.get("origin_iata").unwrap_or(HOME_AIRPORT),
        query.get("destination_iata").unwrap_or_default(),
        departure,
    );
    let message = format!("Found {} flight options", flights.len());
    let result = FlightSearchResult {
        total_results: flights.len(),
        currency: "CAD".to_string(),
        search_completed: true,
        flights,
    };
    Ok(ApiResponse::ok(result, message))
}

async fn search_link(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<ApiResponse<SearchLink>>, ApiError> {
    let link = link_for(&request, &state.search_base_url)?;
    Ok(ApiResponse::ok(link, "Redirecting to flight search"))
}
