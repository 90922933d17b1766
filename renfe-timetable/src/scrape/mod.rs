//! Headless-browser capture of the booking site's search results.
//!
//! The search form is a client-rendered single page with no stable API
//! behind it, so a real browser walks through it: autocomplete the two
//! stations, advance the date, submit, wait a fixed settle, and hand the
//! rendered page source to the extractor.

mod browser;
mod error;
mod search;

pub use browser::{BrowserKind, ScrapeConfig};
pub use error::ScrapeError;
pub use search::{SearchRequest, capture_search_page};
