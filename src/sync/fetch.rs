use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::models::Cell;
use crate::services::CanvasService;

/// A reconciliation fetch that did not complete. Always transient: the
/// local view stays as it was and the next tick retries.
#[derive(Debug, Error)]
pub enum SyncFetchError {
    #[error("canvas fetch failed: {0}")]
    Transport(String),
}

/// The boundary a reconciliation tick pulls canonical state through. For a
/// remote client this crosses the network; embedded in the server process
/// it is a direct read of the store.
pub trait GridFetch: Send + Sync {
    fn fetch_grid(&self) -> impl Future<Output = Result<Vec<Cell>, SyncFetchError>> + Send;
}

/// In-process fetch against the engine itself, for embedded use and tests.
#[derive(Clone)]
pub struct InProcessFetch {
    canvas: Arc<CanvasService>,
}

impl InProcessFetch {
    pub fn new(canvas: Arc<CanvasService>) -> Self {
        Self { canvas }
    }
}

impl GridFetch for InProcessFetch {
    async fn fetch_grid(&self) -> Result<Vec<Cell>, SyncFetchError> {
        Ok(self.canvas.get_grid())
    }
}
