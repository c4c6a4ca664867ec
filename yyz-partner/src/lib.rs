pub mod destinations;
pub mod feed;
pub mod flights;

pub use destinations::popular_destinations;
pub use feed::PartnerStatusFeed;
pub use flights::{flight_options, FlightOption, FlightSegment};
