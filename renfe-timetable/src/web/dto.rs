//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /trains`.
#[derive(Debug, Deserialize)]
pub struct TrainsQuery {
    /// Origin station id
    pub origin: String,

    /// Destination station id
    pub destination: String,

    /// Travel date, `YYYY-MM-DD`
    pub date: String,

    /// Seconds to let the results page render (defaults to 3)
    pub search_timeout: Option<u64>,
}

/// Body of `GET /is-alive`.
#[derive(Debug, Serialize)]
pub struct AliveResponse {
    pub status: &'static str,
}

/// Error body; `detail` carries the human-readable reason.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_uses_detail_field() {
        let body = serde_json::to_string(&ErrorResponse {
            detail: "Invalid origin station!".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"detail":"Invalid origin station!"}"#);
    }

    #[test]
    fn trains_query_timeout_is_optional() {
        let query: TrainsQuery = serde_json::from_str(
            r#"{"origin":"60000","destination":"71801","date":"2024-06-01"}"#,
        )
        .unwrap();
        assert_eq!(query.search_timeout, None);

        let query: TrainsQuery = serde_json::from_str(
            r#"{"origin":"60000","destination":"71801","date":"2024-06-01","search_timeout":8}"#,
        )
        .unwrap();
        assert_eq!(query.search_timeout, Some(8));
    }
}
