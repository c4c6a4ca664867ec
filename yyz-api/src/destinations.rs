use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use yyz_core::search::HOME_AIRPORT;
use yyz_core::{Destination, TripRequest};

use crate::{error::ApiError, response::ApiResponse, search::SearchLink, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights/destinations/popular", get(popular))
        .route("/api/flights/destinations/{iata}/link", get(shortcut_link))
}

#[derive(Debug, Deserialize)]
struct PopularParams {
    #[serde(default = "default_origin")]
    origin: String,
}

fn default_origin() -> String {
    HOME_AIRPORT.to_string()
}

async fn popular(Query(params): Query<PopularParams>) -> Json<ApiResponse<Vec<Destination>>> {
    let destinations = yyz_partner::popular_destinations(&params.origin);
    let message = format!("Retrieved {} popular destinations", destinations.len());
    ApiResponse::ok(destinations, message)
}

/// One-click search for a popular-destination card: thirty days out, one
/// adult, one-way. Same validation and serialization as a manual search.
async fn shortcut_link(
    State(state): State<AppState>,
    Path(iata): Path<String>,
) -> Result<Json<ApiResponse<SearchLink>>, ApiError> {
    let card = yyz_partner::popular_destinations(HOME_AIRPORT)
        .into_iter()
        .find(|card| card.destination.eq_ignore_ascii_case(&iata))
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No popular destination {}",
                iata.to_ascii_uppercase()
            ))
        })?;

    let request = TripRequest::from_destination(&card);
    let link = crate::search::link_for(&request, &state.search_base_url)?;
    Ok(ApiResponse::ok(
        link,
        format!("One-way search to {}", card.city_name),
    ))
}
