use yyz_core::Destination;

/// Curated popular destinations out of the home airport, with headline
/// fares. Read-only seed data for the landing page and one-click searches.
pub fn popular_destinations(origin: &str) -> Vec<Destination> {
    tracing::debug!(%origin, "serving curated destination list");

    [
        ("LHR", "London", "United Kingdom", 850.00, "photo-1513635269975-59663e0ac1ad"),
        ("CDG", "Paris", "France", 920.00, "photo-1502602898536-47ad22581b52"),
        ("LAX", "Los Angeles", "United States", 450.00, "photo-1581833971358-2c8b550f87b3"),
        ("NRT", "Tokyo", "Japan", 1200.00, "photo-1540959733332-eab4deabeeaf"),
        ("YVR", "Vancouver", "Canada", 280.00, "photo-1549940344-ca0ace547de5"),
        ("JFK", "New York", "United States", 380.00, "photo-1496442226666-8d4d0e62e6e9"),
    ]
    .iter()
    .map(|(iata, city, country, price, image)| Destination {
        destination: iata.to_string(),
        city_name: city.to_string(),
        country: country.to_string(),
        price: *price,
        currency: "CAD".to_string(),
        airline: "AC".to_string(),
        image_url: Some(format!("https://images.unsplash.com/{}", image)),
    })
    .collect()
}
