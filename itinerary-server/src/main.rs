use std::net::SocketAddr;
use std::path::Path;

use itinerary_server::cache::{CacheConfig, ViewCache};
use itinerary_server::loader::{ItinerarySource, Loader};
use itinerary_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Where the documents live; all overridable from the environment
    let source = std::env::var("ITINERARY_SOURCE")
        .unwrap_or_else(|_| "assets/itinerary_spec.json".to_string());
    let source = ItinerarySource::parse(&source);
    let config_dir =
        std::env::var("ITINERARY_CONFIG_DIR").unwrap_or_else(|_| "assets/config".to_string());
    let static_dir =
        std::env::var("ITINERARY_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let durations_path = Path::new(&config_dir).join("defaults.json");
    let icons_path = Path::new(&config_dir).join("icons_map.json");

    // Load and validate everything up front (fail fast on a broken document)
    let loader = Loader::new().expect("Failed to create document loader");
    let (doc, durations, icons) = loader
        .load_all(&source, &durations_path, &icons_path)
        .await
        .expect("Failed to load itinerary documents");
    let itinerary = doc.validate().expect("Invalid itinerary document");
    println!("Loaded itinerary with {} days", itinerary.days.len());

    // Build app state
    let cache = ViewCache::new(&CacheConfig::default());
    let state = AppState::new(itinerary, durations, icons, cache);

    // Create router
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Itinerary map server listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the map view.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health            - Health check");
    println!("  GET  /api/itinerary     - Computed itinerary (landing_date/landing_time query)");
    println!("  GET  /api/config/icons  - Stop-type icon map");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
