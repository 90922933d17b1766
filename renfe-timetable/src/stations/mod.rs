//! Renfe station directory: remote list fetch and in-memory lookup.
//!
//! The station list is static data renfe serves as a JavaScript file; it is
//! fetched once per process and held in a [`StationDirectory`] for id
//! validation, name resolution, and substring search.

mod client;
mod directory;
mod error;

pub use client::{StationClient, StationClientConfig};
pub use directory::StationDirectory;
pub use error::StationError;
