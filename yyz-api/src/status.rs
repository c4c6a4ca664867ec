use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yyz_core::datetime::{short_date, short_time};
use yyz_core::FlightStatus;

use crate::{error::ApiError, response::ApiResponse, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flights/status", get(flight_status))
}

#[derive(Debug, Deserialize)]
struct StatusParams {
    #[serde(default)]
    flight_number: String,
}

/// Normalized status plus the display strings the status card renders,
/// formatted once server-side so every view of the same instant reads the
/// same.
#[derive(Debug, Serialize)]
pub struct FlightStatusView {
    #[serde(flatten)]
    pub status: FlightStatus,
    pub departure_display: LegDisplay,
    pub arrival_display: LegDisplay,
}

#[derive(Debug, Serialize)]
pub struct LegDisplay {
    pub scheduled_time: String,
    pub scheduled_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<String>,
}

impl LegDisplay {
    fn new(scheduled: &DateTime<Utc>, actual: Option<&DateTime<Utc>>) -> Self {
        Self {
            scheduled_time: short_time(scheduled),
            scheduled_date: short_date(scheduled),
            actual_time: actual.map(short_time),
        }
    }
}

impl From<FlightStatus> for FlightStatusView {
    fn from(status: FlightStatus) -> Self {
        let departure_display = LegDisplay::new(
            &status.departure.scheduled,
            status.departure.actual.as_ref(),
        );
        let arrival_display =
            LegDisplay::new(&status.arrival.scheduled, status.arrival.actual.as_ref());
        Self {
            status,
            departure_display,
            arrival_display,
        }
    }
}

async fn flight_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<ApiResponse<FlightStatusView>>, ApiError> {
    let status = state.resolver.resolve(&params.flight_number).await?;
    let message = format!("Flight status for {}", status.flight_number);
    Ok(ApiResponse::ok(FlightStatusView::from(status), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use yyz_core::status::{ArrivalLeg, DepartureLeg, FlightStatusKind};

    fn sample_status(actual_departure: Option<DateTime<Utc>>) -> FlightStatus {
        FlightStatus {
            flight_number: "AC123".to_string(),
            airline: "Air Canada".to_string(),
            status: FlightStatusKind::OnTime,
            departure: DepartureLeg {
                airport: "YYZ".to_string(),
                scheduled: Utc.with_ymd_and_hms(2025, 3, 10, 13, 30, 0).unwrap(),
                actual: actual_departure,
                terminal: None,
                gate: None,
            },
            arrival: ArrivalLeg {
                airport: "LAX".to_string(),
                scheduled: Utc.with_ymd_and_hms(2025, 3, 10, 16, 45, 0).unwrap(),
                actual: None,
            },
        }
    }

    #[test]
    fn test_view_formats_scheduled_instants() {
        let view = FlightStatusView::from(sample_status(None));
        assert_eq!(view.departure_display.scheduled_time, "13:30");
        assert_eq!(view.departure_display.scheduled_date, "Mon Mar 10");
        assert_eq!(view.arrival_display.scheduled_time, "16:45");
        assert!(view.departure_display.actual_time.is_none());
        assert!(view.arrival_display.actual_time.is_none());
    }

    #[test]
    fn test_view_formats_actuals_only_when_present() {
        let actual = Utc.with_ymd_and_hms(2025, 3, 10, 13, 52, 0).unwrap();
        let view = FlightStatusView::from(sample_status(Some(actual)));
        assert_eq!(view.departure_display.actual_time.as_deref(), Some("13:52"));
        assert!(view.arrival_display.actual_time.is_none());
    }
}
