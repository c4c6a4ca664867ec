use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yyz_api::{app, AppState};
use yyz_core::FlightStatusResolver;
use yyz_partner::PartnerStatusFeed;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yyz_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = yyz_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting YYZ Flights API on port {}", config.server.port);

    let state = AppState {
        resolver: FlightStatusResolver::new(Arc::new(PartnerStatusFeed::new())),
        search_base_url: config.partner.search_base_url.clone(),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
