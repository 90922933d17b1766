//! End-to-end timetable retrieval.

use tracing::info;

use crate::domain::TimetableEntry;
use crate::extract::extract_timetable;
use crate::scrape::{ScrapeConfig, ScrapeError, SearchRequest, capture_search_page};

/// Run one search and extract its timetable.
///
/// An empty result is not an error: it is what the results page showed
/// (no more trains that day, or the settle timeout was too short for the
/// page to render).
pub async fn fetch_timetable(
    config: &ScrapeConfig,
    request: &SearchRequest,
) -> Result<Vec<TimetableEntry>, ScrapeError> {
    let html = capture_search_page(config, request).await?;
    let entries = extract_timetable(&html);
    info!(entries = entries.len(), "extracted timetable");
    Ok(entries)
}
