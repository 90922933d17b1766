//! Station directory error types.

/// Errors that can occur when fetching or querying the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The station list endpoint answered, but not with a usable list
    #[error("station list unavailable: {reason}")]
    RemoteUnavailable { reason: String },

    /// No station carries the requested id
    #[error("station id {id} not found")]
    NotFound { id: String },
}
