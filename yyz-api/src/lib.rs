use axum::{http::Method, routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod destinations;
pub mod error;
pub mod response;
pub mod search;
pub mod state;
pub mod status;

pub use state::AppState;

use response::ApiResponse;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/api/", get(banner))
        .route("/api/health", get(health))
        .merge(search::routes())
        .merge(status::routes())
        .merge(destinations::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn banner() -> Json<serde_json::Value> {
    Json(json!({
        "message": "YYZ Flights API - Toronto's Premier Flight Booking Platform"
    }))
}

async fn health() -> Json<ApiResponse<serde_json::Value>> {
    ApiResponse::ok(
        json!({ "status": "healthy", "timestamp": Utc::now().to_rfc3339() }),
        "YYZ Flights API is healthy",
    )
}
