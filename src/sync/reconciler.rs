use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::sync::fetch::{GridFetch, SyncFetchError};
use crate::sync::local_view::LocalView;

/// Periodic pull of canonical state into a [`LocalView`].
///
/// One reconciler runs per connected client, on that client's own interval;
/// there is no cross-client coordination. The view handle is shared so the
/// render layer reads it and the paint path echoes into it while the loop
/// runs. A client that disconnects simply aborts the loop task; no tick
/// holds anything across a suspension point.
pub struct SyncReconciler<F: GridFetch> {
    fetch: F,
    view: Arc<Mutex<LocalView>>,
    interval: Duration,
}

impl<F: GridFetch> SyncReconciler<F> {
    pub fn new(fetch: F, interval: Duration) -> Self {
        Self {
            fetch,
            view: Arc::new(Mutex::new(LocalView::new())),
            interval,
        }
    }

    /// Shared handle to the view this reconciler maintains.
    pub fn view(&self) -> Arc<Mutex<LocalView>> {
        self.view.clone()
    }

    /// One reconciliation pass. On success the canonical cells are merged
    /// and the stale flag cleared; on failure the view is left untouched
    /// apart from the stale flag, and the next tick retries.
    pub async fn tick(&self) -> Result<usize, SyncFetchError> {
        match self.fetch.fetch_grid().await {
            Ok(cells) => {
                let fetched = cells.len();
                let mut view = self.view.lock();
                view.apply_canonical(cells);
                view.clear_stale();
                debug!("Reconciled {} canonical cells", fetched);
                Ok(fetched)
            }
            Err(e) => {
                self.view.lock().mark_stale();
                warn!("Reconciliation fetch failed, keeping local view: {}", e);
                Err(e)
            }
        }
    }

    /// Run ticks forever on the configured interval. Callers spawn this and
    /// abort the task when the client goes away.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            // Failures are transient and already logged; keep ticking.
            let _ = self.tick().await;
        }
    }
}
