pub mod datetime;
pub mod destination;
pub mod search;
pub mod status;

pub use destination::Destination;
pub use search::{OutboundSearchQuery, SearchError, SearchQueryBuilder, TripRequest};
pub use status::{FlightStatus, FlightStatusKind, FlightStatusResolver, StatusError, StatusProvider};
