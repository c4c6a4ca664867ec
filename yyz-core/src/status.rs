use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("A flight number is required")]
    MissingFlightNumber,
    #[error("Flight not found")]
    FlightNotFound,
    #[error("Status provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Discrete flight status as reported upstream. Never null: literals the
/// provider uses today map to the named variants, anything else is carried
/// verbatim as `Unrecognized`. Severity/color mapping is a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightStatusKind {
    OnTime,
    Delayed,
    Cancelled,
    Unrecognized(String),
}

impl FlightStatusKind {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("On Time") {
            FlightStatusKind::OnTime
        } else if raw.eq_ignore_ascii_case("Delayed") {
            FlightStatusKind::Delayed
        } else if raw.eq_ignore_ascii_case("Cancelled") {
            FlightStatusKind::Cancelled
        } else {
            FlightStatusKind::Unrecognized(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FlightStatusKind::OnTime => "On Time",
            FlightStatusKind::Delayed => "Delayed",
            FlightStatusKind::Cancelled => "Cancelled",
            FlightStatusKind::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for FlightStatusKind {
    fn from(raw: String) -> Self {
        FlightStatusKind::parse(&raw)
    }
}

impl From<FlightStatusKind> for String {
    fn from(kind: FlightStatusKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Status payload as the upstream provider reports it, after any transport
/// envelope has been unwrapped. Optional fields deserialize to `None` when
/// the provider omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamFlightStatus {
    pub flight_number: String,
    pub airline: String,
    pub status: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub scheduled_departure: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
    #[serde(default)]
    pub actual_departure: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_arrival: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gate: Option<String>,
    #[serde(default)]
    pub terminal: Option<String>,
}

/// Departure side of a normalized status: scheduled instant always present,
/// actual instant and terminal/gate only when the provider supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureLeg {
    pub airport: String,
    pub scheduled: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivalLeg {
    pub airport: String,
    pub scheduled: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<DateTime<Utc>>,
}

/// Normalized result of one status lookup. Constructed fresh per lookup and
/// never cached; required fields are mapped verbatim, optional fields pass
/// through only when present upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightStatus {
    pub flight_number: String,
    pub airline: String,
    pub status: FlightStatusKind,
    pub departure: DepartureLeg,
    pub arrival: ArrivalLeg,
}

impl From<UpstreamFlightStatus> for FlightStatus {
    fn from(raw: UpstreamFlightStatus) -> Self {
        FlightStatus {
            flight_number: raw.flight_number,
            airline: raw.airline,
            status: FlightStatusKind::parse(&raw.status),
            departure: DepartureLeg {
                airport: raw.departure_airport,
                scheduled: raw.scheduled_departure,
                actual: raw.actual_departure,
                terminal: raw.terminal,
                gate: raw.gate,
            },
            arrival: ArrivalLeg {
                airport: raw.arrival_airport,
                scheduled: raw.scheduled_arrival,
                actual: raw.actual_arrival,
            },
        }
    }
}

/// One lookup against the upstream status source. `Ok(None)` means the
/// provider has no record of the flight; `Err` means the lookup itself
/// failed.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    async fn fetch_status(
        &self,
        flight_number: &str,
    ) -> Result<Option<UpstreamFlightStatus>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Validates a flight-number input, performs exactly one upstream lookup,
/// and normalizes the response. Stateless across calls; no retry, no
/// caching. Cancellation is dropping the in-flight future.
#[derive(Clone)]
pub struct FlightStatusResolver {
    provider: Arc<dyn StatusProvider>,
}

impl FlightStatusResolver {
    pub fn new(provider: Arc<dyn StatusProvider>) -> Self {
        Self { provider }
    }

    /// Trim surrounding blanks and uppercase. Empty input never reaches the
    /// provider.
    pub fn normalize_flight_number(raw: &str) -> Result<String, StatusError> {
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(StatusError::MissingFlightNumber);
        }
        Ok(normalized)
    }

    pub async fn resolve(&self, flight_number: &str) -> Result<FlightStatus, StatusError> {
        let flight_number = Self::normalize_flight_number(flight_number)?;
        tracing::debug!(%flight_number, "resolving flight status");

        match self.provider.fetch_status(&flight_number).await {
            Ok(Some(raw)) => Ok(FlightStatus::from(raw)),
            Ok(None) => Err(StatusError::FlightNotFound),
            Err(source) => Err(StatusError::ProviderUnavailable(source.to_string())),
        }
    }
}
