use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use yyz_core::search::PARTNER_MARKER;

use crate::feed::AIRLINES;

const AIRCRAFT: &[&str] = &["Boeing 737", "Airbus A320", "Boeing 777", "Airbus A350"];

/// Cities the mock fare engine knows, with the country driving the
/// domestic/international price split.
const CITIES: &[(&str, &str, &str)] = &[
    ("YYZ", "Toronto", "Canada"),
    ("YVR", "Vancouver", "Canada"),
    ("YUL", "Montreal", "Canada"),
    ("LAX", "Los Angeles", "United States"),
    ("JFK", "New York", "United States"),
    ("LHR", "London", "United Kingdom"),
    ("CDG", "Paris", "France"),
    ("FCO", "Rome", "Italy"),
    ("NRT", "Tokyo", "Japan"),
    ("SYD", "Sydney", "Australia"),
    ("MIA", "Miami", "United States"),
    ("DXB", "Dubai", "United Arab Emirates"),
];

#[derive(Debug, Clone, Serialize)]
pub struct FlightSegment {
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub arrival_at: DateTime<Utc>,
    pub airline: String,
    pub flight_number: String,
    pub aircraft: Option<String>,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightOption {
    pub price: f64,
    pub currency: String,
    pub segments: Vec<FlightSegment>,
    pub total_duration_minutes: i64,
    pub stops: u32,
    pub booking_url: String,
    pub airline_name: Option<String>,
}

fn country_of(iata: &str) -> Option<&'static str> {
    CITIES
        .iter()
        .find(|(code, _, _)| *code == iata)
        .map(|(_, _, country)| *country)
}

/// Development stand-in for the partner fare service: 3-8 direct options for
/// a validated route, cheapest first. Prices are CAD; routes within Canada
/// price as domestic, everything else as international.
pub fn flight_options(
    origin: &str,
    destination: &str,
    departure_date: NaiveDate,
) -> Vec<FlightOption> {
    let mut rng = rand::thread_rng();

    let domestic =
        country_of(origin) == Some("Canada") && country_of(destination) == Some("Canada");
    let (price_range, duration_range) = if domestic {
        (200.0..800.0, 90..=360)
    } else {
        (600.0..2500.0, 360..=900)
    };

    let booking_url = format!(
        "https://www.aviasales.com/search/{}{}{}?marker={}",
        origin,
        destination,
        departure_date.format("%d%m%y"),
        PARTNER_MARKER
    );

    let mut flights: Vec<FlightOption> = (0..rng.gen_range(3..=8))
        .map(|_| {
            let (airline_code, airline_name) = AIRLINES[rng.gen_range(0..AIRLINES.len())];
            let hour: u32 = rng.gen_range(6..=22);
            let minute: u32 = rng.gen_range(0..=59);
            let departure_at = departure_date
                .and_hms_opt(hour, minute, 0)
                .expect("hour and minute are in range")
                .and_utc();
            let duration_minutes: i64 = rng.gen_range(duration_range.clone());
            let arrival_at = departure_at + Duration::minutes(duration_minutes);

            let base_price: f64 = rng.gen_range(price_range.clone());
            let price = (base_price * (1.0 + rng.gen_range(-0.2..0.3)) * 100.0).round() / 100.0;

            FlightOption {
                price,
                currency: "CAD".to_string(),
                segments: vec![FlightSegment {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    departure_at,
                    arrival_at,
                    airline: airline_code.to_string(),
                    flight_number: format!("{}{}", airline_code, rng.gen_range(100..=9999)),
                    aircraft: Some(AIRCRAFT[rng.gen_range(0..AIRCRAFT.len())].to_string()),
                    duration_minutes,
                }],
                total_duration_minutes: duration_minutes,
                stops: 0,
                booking_url: booking_url.clone(),
                airline_name: Some(airline_name.to_string()),
            }
        })
        .collect();

    flights.sort_by(|a, b| a.price.total_cmp(&b.price));
    flights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_options_are_sorted_cheapest_first() {
        let flights = flight_options("YYZ", "LHR", date());
        assert!((3..=8).contains(&flights.len()));
        assert!(flights.windows(2).all(|pair| pair[0].price <= pair[1].price));
    }

    #[test]
    fn test_domestic_route_prices_and_durations() {
        for flight in flight_options("YYZ", "YVR", date()) {
            assert!((90..=360).contains(&flight.total_duration_minutes));
            assert!(flight.price >= 150.0 && flight.price <= 1040.0);
        }
    }

    #[test]
    fn test_international_route_durations() {
        for flight in flight_options("YYZ", "LHR", date()) {
            assert!(flight.total_duration_minutes >= 360);
        }
    }

    #[test]
    fn test_booking_url_carries_the_marker() {
        let flights = flight_options("YYZ", "LHR", date());
        for flight in &flights {
            assert_eq!(
                flight.booking_url,
                "https://www.aviasales.com/search/YYZLHR010625?marker=yyzflights"
            );
        }
    }

    #[test]
    fn test_segments_depart_on_the_requested_date() {
        for flight in flight_options("YYZ", "JFK", date()) {
            let segment = &flight.segments[0];
            assert_eq!(segment.departure_at.date_naive(), date());
            assert!(segment.arrival_at > segment.departure_at);
            assert_eq!(flight.stops, 0);
        }
    }
}
