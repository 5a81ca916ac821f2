use reqwest::Client;

use crate::models::{CanvasResponse, Cell, PaintRequest, SnapshotResponse, SnapshotSummary};
use crate::sync::fetch::{GridFetch, SyncFetchError};

/// HTTP client against a remote canvas service.
///
/// This is what a native client session runs its reconciler over: the grid
/// poll maps to `GET /api/v1/canvas`, paints to the cell paint route. The
/// request timeout bounds a reconciliation tick; a timed-out poll surfaces
/// as a transient fetch failure, never as anything fatal.
#[derive(Debug, Clone)]
pub struct CanvasClient {
    client: Client,
    base_url: String,
}

impl CanvasClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_canvas(&self) -> Result<CanvasResponse, reqwest::Error> {
        let url = format!("{}/api/v1/canvas", self.base_url);
        self.client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn paint(&self, cell_id: u32, request: &PaintRequest) -> Result<Cell, reqwest::Error> {
        let url = format!("{}/api/v1/canvas/cells/{}", self.base_url, cell_id);
        self.client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn list_snapshots(&self) -> Result<Vec<SnapshotSummary>, reqwest::Error> {
        let url = format!("{}/api/v1/snapshots", self.base_url);
        self.client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn get_snapshot(&self, index: usize) -> Result<SnapshotResponse, reqwest::Error> {
        let url = format!("{}/api/v1/snapshots/{}", self.base_url, index);
        self.client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

impl GridFetch for CanvasClient {
    async fn fetch_grid(&self) -> Result<Vec<Cell>, SyncFetchError> {
        let response = self
            .fetch_canvas()
            .await
            .map_err(|e| SyncFetchError::Transport(e.to_string()))?;
        Ok(response.cells)
    }
}
