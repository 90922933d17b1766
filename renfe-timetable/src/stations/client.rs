//! Client for renfe's static station list.

use serde::Deserialize;

use crate::domain::Station;

use super::error::StationError;

/// Default URL of the station list.
///
/// The document is not JSON but a JavaScript assignment,
/// `var estacionesEstaticas = [...];`, so fetching and decoding are split
/// accordingly below.
const DEFAULT_STATIONS_URL: &str =
    "https://www.renfe.com/content/dam/renfe/es/General/buscadores/javascript/estacionesEstaticas.js";

/// Raw station record as it appears inside the JavaScript payload.
///
/// Only the two fields the directory needs; the payload carries more.
#[derive(Debug, Deserialize)]
struct StationRecord {
    #[serde(rename = "desgEstacion")]
    name: String,
    #[serde(rename = "cdgoEstacion")]
    id: String,
}

/// Configuration for the station list client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL the station list is fetched from
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a config pointing at the live station list.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_STATIONS_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the station list.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new station list client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and decode the full station list.
    pub async fn fetch_all(&self) -> Result<Vec<Station>, StationError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StationError::RemoteUnavailable {
                reason: format!("station list returned status {status}"),
            });
        }

        let body = response.text().await?;
        parse_station_js(&body)
    }
}

/// Decode the `var estacionesEstaticas = [...];` payload.
///
/// Takes the text after the first `=`, strips the trailing `;`, and parses
/// the rest as a JSON array.
fn parse_station_js(body: &str) -> Result<Vec<Station>, StationError> {
    if body.trim().is_empty() {
        return Err(StationError::RemoteUnavailable {
            reason: "station list body is empty".to_string(),
        });
    }

    let (_, payload) = body
        .split_once('=')
        .ok_or_else(|| StationError::RemoteUnavailable {
            reason: "station list is not a JavaScript assignment".to_string(),
        })?;
    let payload = payload.trim().trim_end_matches(';').trim_end();

    let records: Vec<StationRecord> =
        serde_json::from_str(payload).map_err(|e| StationError::RemoteUnavailable {
            reason: format!("station list payload did not decode: {e}"),
        })?;

    Ok(records
        .into_iter()
        .map(|r| Station {
            name: r.name,
            id: r.id,
        })
        .collect())
}
