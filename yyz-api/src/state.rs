use yyz_core::FlightStatusResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: FlightStatusResolver,
    /// Base address of the partner white-label search.
    pub search_base_url: String,
}
