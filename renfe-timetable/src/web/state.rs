//! Application state for the web layer.

use std::sync::Arc;

use crate::scrape::ScrapeConfig;
use crate::stations::StationDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station directory, fetched once at startup
    pub directory: Arc<StationDirectory>,

    /// Browser settings applied to every timetable search
    pub scrape: Arc<ScrapeConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: StationDirectory, scrape: ScrapeConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            scrape: Arc::new(scrape),
        }
    }
}
