use chrono::{Duration, Local, NaiveDate};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::destination::Destination;

/// Home airport for all outbound searches. The site only sells departures
/// from Toronto Pearson today.
pub const HOME_AIRPORT: &str = "YYZ";

/// Attribution token the booking partner uses to credit referred traffic.
pub const PARTNER_MARKER: &str = "yyzflights";

/// Partner white-label search the serialized query is appended to.
pub const SEARCH_BASE_URL: &str = "https://search.yyzflights.com/";

/// All outbound searches are economy.
pub const TRIP_CLASS_ECONOMY: &str = "Y";

/// Departure offset applied when a search is seeded from a destination card.
pub const SHORTCUT_DEPARTURE_OFFSET_DAYS: i64 = 30;

/// RFC 3986 unreserved characters stay literal in query values.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("A destination airport is required")]
    MissingDestination,
    #[error("Destination must differ from the origin airport")]
    DestinationSameAsOrigin,
    #[error("A departure date is required")]
    MissingDepartureDate,
    #[error("Departure date cannot be in the past")]
    DepartureDateInPast,
    #[error("Return date cannot be before the departure date")]
    ReturnBeforeDeparture,
    #[error("Adults must be between 1 and 9 and children between 0 and 8")]
    PassengerCountOutOfRange,
}

/// One traveler-entered trip. Immutable once built: the builder either
/// rejects it or yields exactly one canonical query. Round-trip vs one-way is
/// derived from `return_date` presence, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(default = "default_origin")]
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_adults")]
    pub adults: u8,
    #[serde(default)]
    pub children: u8,
}

fn default_origin() -> String {
    HOME_AIRPORT.to_string()
}

fn default_adults() -> u8 {
    1
}

impl TripRequest {
    /// Seed a one-click search from a popular-destination card: one adult,
    /// one-way, departing thirty days out. Runs through the same validation
    /// and serialization as a manually entered request.
    pub fn from_destination(destination: &Destination) -> Self {
        Self::from_destination_as_of(destination, Local::now().date_naive())
    }

    pub fn from_destination_as_of(destination: &Destination, today: NaiveDate) -> Self {
        TripRequest {
            origin: HOME_AIRPORT.to_string(),
            destination: destination.destination.clone(),
            departure_date: Some(today + Duration::days(SHORTCUT_DEPARTURE_OFFSET_DAYS)),
            return_date: None,
            adults: 1,
            children: 0,
        }
    }
}

/// Canonical outbound search query: ordered key/value pairs with a fixed key
/// order. Identical requests serialize byte-identically, which the partner
/// relies on for attribution and we rely on for caching and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundSearchQuery {
    pairs: Vec<(String, String)>,
}

impl OutboundSearchQuery {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value for a key, if the query carries it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Percent-encoded query string, pairs in their fixed order.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_ENCODE_SET),
                    utf8_percent_encode(value, QUERY_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full outbound URL against a partner base address. The caller owns
    /// dispatch (opening a browsing context); the query itself has no side
    /// effect.
    pub fn outbound_url(&self, base: &str) -> String {
        format!("{}?{}", base.trim_end_matches('?'), self.to_query_string())
    }
}

/// Validates a [`TripRequest`] and serializes it into the canonical outbound
/// query. Stateless; safe to call concurrently.
pub struct SearchQueryBuilder;

impl SearchQueryBuilder {
    /// Validate against the current local calendar date and serialize.
    pub fn build(request: &TripRequest) -> Result<OutboundSearchQuery, SearchError> {
        Self::build_as_of(request, Local::now().date_naive())
    }

    /// Validation stops at the first violation; no partial query is ever
    /// produced. `today` is the local calendar date of the selection, not a
    /// timezone-shifted instant.
    pub fn build_as_of(
        request: &TripRequest,
        today: NaiveDate,
    ) -> Result<OutboundSearchQuery, SearchError> {
        let destination = request.destination.trim().to_ascii_uppercase();
        if destination.is_empty() {
            return Err(SearchError::MissingDestination);
        }
        let origin = request.origin.trim().to_ascii_uppercase();
        if destination == origin {
            return Err(SearchError::DestinationSameAsOrigin);
        }
        let departure = request
            .departure_date
            .ok_or(SearchError::MissingDepartureDate)?;
        if departure < today {
            return Err(SearchError::DepartureDateInPast);
        }
        if let Some(return_date) = request.return_date {
            if return_date < departure {
                return Err(SearchError::ReturnBeforeDeparture);
            }
        }
        if !(1..=9).contains(&request.adults) || request.children > 8 {
            return Err(SearchError::PassengerCountOutOfRange);
        }

        let mut pairs = vec![
            ("origin_iata".to_string(), origin),
            ("destination_iata".to_string(), destination),
            (
                "departure_at".to_string(),
                departure.format("%Y-%m-%d").to_string(),
            ),
        ];
        // return_at sits directly after departure_at, and only for round trips
        if let Some(return_date) = request.return_date {
            pairs.push((
                "return_at".to_string(),
                return_date.format("%Y-%m-%d").to_string(),
            ));
        }
        pairs.push(("adults".to_string(), request.adults.to_string()));
        pairs.push(("children".to_string(), request.children.to_string()));
        pairs.push(("infants".to_string(), "0".to_string()));
        pairs.push(("trip_class".to_string(), TRIP_CLASS_ECONOMY.to_string()));
        pairs.push(("marker".to_string(), PARTNER_MARKER.to_string()));

        Ok(OutboundSearchQuery { pairs })
    }
}
