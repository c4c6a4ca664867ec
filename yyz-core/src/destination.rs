use serde::{Deserialize, Serialize};

/// A partner-curated popular destination card. Read-only seed data: the core
/// trusts its shape and only uses it to pre-fill a one-click search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// IATA code of the destination airport
    pub destination: String,
    pub city_name: String,
    pub country: String,
    pub price: f64,
    pub currency: String,
    /// Carrier code of the headline fare
    pub airline: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
