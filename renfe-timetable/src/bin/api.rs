use std::net::SocketAddr;
use std::time::Duration;

use renfe_timetable::scrape::{BrowserKind, ScrapeConfig};
use renfe_timetable::stations::{StationClient, StationClientConfig, StationDirectory};
use renfe_timetable::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// How often to refresh the station directory (24 hours).
const STATION_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fetch the station directory (fail fast if the list is unavailable)
    println!("Fetching station directory...");
    let station_client = StationClient::new(StationClientConfig::default())
        .expect("Failed to create station client");
    let directory = StationDirectory::fetch(station_client)
        .await
        .expect("Failed to fetch station directory");
    println!("Loaded {} stations", directory.len().await);

    // Spawn background task to refresh the directory daily
    let directory_refresh = directory.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATION_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match directory_refresh.refresh().await {
                Ok(count) => println!("Refreshed station directory: {} stations", count),
                Err(e) => eprintln!("Failed to refresh station directory: {}", e),
            }
        }
    });

    // Browser settings from the environment
    let browser = match std::env::var("RENFE_BROWSER").as_deref() {
        Ok("chrome") => BrowserKind::Chrome,
        _ => BrowserKind::Firefox,
    };
    let mut scrape = ScrapeConfig::new(browser);
    if let Ok(url) = std::env::var("RENFE_WEBDRIVER_URL") {
        scrape = scrape.with_webdriver_url(url);
    }

    // Build app state
    let state = AppState::new(directory, scrape);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    println!("Renfe timetable API listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /is-alive         - Health check");
    println!("  GET /stations         - Full station directory");
    println!("  GET /stations/:name   - Search stations by name");
    println!("  GET /trains           - Timetable search (origin, destination, date)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
