use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::services::canvas_service::CanvasService;

/// Spawn the background snapshot capture loop.
///
/// Captures run on their own interval, fully decoupled from individual
/// commits and from the reconciliation cadence. The first tick of
/// `tokio::time::interval` fires immediately, so every epoch starts with a
/// baseline snapshot of the blank canvas.
pub fn spawn_snapshot_task(canvas: Arc<CanvasService>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let snapshot = canvas.capture_snapshot();
            info!(
                "Captured snapshot {} ({} cells) at {}",
                snapshot.index,
                snapshot.cells.len(),
                snapshot.captured_at.to_rfc3339()
            );
        }
    })
}
