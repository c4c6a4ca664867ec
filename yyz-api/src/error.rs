use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use yyz_core::{SearchError, StatusError};

#[derive(Debug)]
pub enum ApiError {
    Search(SearchError),
    Status(StatusError),
    NotFound(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Search(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Status(StatusError::MissingFlightNumber) => (
                StatusCode::BAD_REQUEST,
                StatusError::MissingFlightNumber.to_string(),
            ),
            ApiError::Status(StatusError::FlightNotFound) => {
                (StatusCode::NOT_FOUND, "Flight not found".to_string())
            }
            ApiError::Status(StatusError::ProviderUnavailable(detail)) => {
                tracing::error!("Status provider unavailable: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "Flight status is temporarily unavailable".to_string(),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "data": null,
            "message": message.clone(),
            "errors": [message],
        }));

        (status, body).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

impl From<StatusError> for ApiError {
    fn from(err: StatusError) -> Self {
        Self::Status(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
