//! Station directory lookup.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Station;

use super::client::StationClient;
use super::error::StationError;

/// Thread-safe station directory.
///
/// Holds the static station list in memory for the life of the process.
/// Constructed explicitly and passed to whatever needs lookups; `refresh`
/// re-fetches on demand.
#[derive(Clone)]
pub struct StationDirectory {
    inner: Arc<RwLock<Vec<Station>>>,
    client: StationClient,
}

impl StationDirectory {
    /// Create a new StationDirectory by fetching the remote list.
    ///
    /// This will fail if the station list is unreachable or undecodable.
    pub async fn fetch(client: StationClient) -> Result<Self, StationError> {
        let stations = client.fetch_all().await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(stations)),
            client,
        })
    }

    /// Create a directory from an already-known list (tests, offline use).
    pub fn from_stations(client: StationClient, stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(stations)),
            client,
        }
    }

    /// The full station list, in directory order.
    pub async fn all(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Stations whose name contains `query`, case-insensitively.
    ///
    /// An empty result is a valid answer; an empty query matches everything.
    pub async fn search(&self, query: &str) -> Vec<Station> {
        let needle = query.to_lowercase();
        let guard = self.inner.read().await;
        guard
            .iter()
            .filter(|station| station.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Resolve a station id to its display name.
    pub async fn name_for_id(&self, id: &str) -> Result<String, StationError> {
        let guard = self.inner.read().await;
        guard
            .iter()
            .find(|station| station.id == id)
            .map(|station| station.name.clone())
            .ok_or_else(|| StationError::NotFound { id: id.to_string() })
    }

    /// Whether any station carries the given id.
    pub async fn exists(&self, id: &str) -> bool {
        let guard = self.inner.read().await;
        guard.iter().any(|station| station.id == id)
    }

    /// Get the number of stations in the directory.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the directory is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Refresh the station list from the remote.
    ///
    /// On success, replaces the current list. On failure, the existing list
    /// is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, StationError> {
        let stations = self.client.fetch_all().await?;
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = stations;

        Ok(count)
    }
}
