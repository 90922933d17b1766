//! Scrape pipeline error types.

use thirtyfour::error::WebDriverError;

/// Errors that can occur while driving the booking site.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// An element the search sequence depends on is no longer where the
    /// selector expects it; the page layout has changed.
    #[error("renfe site structure changed: {element} not found (selector {selector})")]
    SiteStructureChanged {
        element: &'static str,
        selector: &'static str,
    },

    /// The browser session itself failed (driver unreachable, session
    /// dropped, navigation error).
    #[error("browser automation failed: {0}")]
    Automation(#[from] WebDriverError),
}
