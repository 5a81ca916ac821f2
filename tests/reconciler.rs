use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pixelwar_canvas::models::Cell;
use pixelwar_canvas::services::CanvasService;
use pixelwar_canvas::sync::{GridFetch, InProcessFetch, SyncFetchError, SyncReconciler};

struct FailingFetch;

impl GridFetch for FailingFetch {
    async fn fetch_grid(&self) -> Result<Vec<Cell>, SyncFetchError> {
        Err(SyncFetchError::Transport(
            "connection timed out".to_string(),
        ))
    }
}

/// Fails the first fetch, then behaves like the in-process boundary.
struct FlakyFetch {
    canvas: Arc<CanvasService>,
    failed_once: AtomicBool,
}

impl GridFetch for FlakyFetch {
    async fn fetch_grid(&self) -> Result<Vec<Cell>, SyncFetchError> {
        if !self.failed_once.swap(true, Ordering::SeqCst) {
            return Err(SyncFetchError::Transport(
                "connection timed out".to_string(),
            ));
        }
        Ok(self.canvas.get_grid())
    }
}

#[tokio::test]
async fn remote_writes_become_visible_after_a_tick() {
    let canvas = Arc::new(CanvasService::new(4, 1, "#FFFFFF", Duration::ZERO));
    let reconciler = SyncReconciler::new(
        InProcessFetch::new(canvas.clone()),
        Duration::from_millis(10),
    );
    let view = reconciler.view();

    reconciler.tick().await.unwrap();
    assert_eq!(view.lock().len(), 4);

    canvas.paint_at("remote", 1, "#0000FF", 1_000).unwrap();
    reconciler.tick().await.unwrap();

    let cell = view.lock().cell(1).cloned().unwrap();
    assert_eq!(cell.color, "#0000FF");
    assert_eq!(cell.last_writer_id.as_deref(), Some("remote"));

    // render order follows cell identifiers
    let rendered = view.lock().cells();
    let ids: Vec<u32> = rendered.iter().map(|c| c.cell_id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn own_write_does_not_flicker_back() {
    let canvas = Arc::new(CanvasService::new(4, 1, "#FFFFFF", Duration::ZERO));
    let reconciler = SyncReconciler::new(
        InProcessFetch::new(canvas.clone()),
        Duration::from_millis(10),
    );
    let view = reconciler.view();
    reconciler.tick().await.unwrap();

    // a canonical poll taken before the paint, delivered after it
    let stale = canvas.get_grid();
    let committed = canvas.paint_at("me", 2, "#FF0000", 1_000).unwrap();
    view.lock().record_local_paint(committed);
    view.lock().apply_canonical(stale);

    // the local echo survives the stale delivery
    let cell = view.lock().cell(2).cloned().unwrap();
    assert_eq!(cell.color, "#FF0000");
    assert!(view.lock().has_pending(2));

    // a fresh fetch confirms the write and clears the marker
    reconciler.tick().await.unwrap();
    assert!(!view.lock().has_pending(2));
    assert_eq!(view.lock().cell(2).unwrap().color, "#FF0000");
}

#[tokio::test]
async fn later_canonical_write_overrides_pending_echo() {
    let canvas = Arc::new(CanvasService::new(4, 1, "#FFFFFF", Duration::ZERO));
    let reconciler = SyncReconciler::new(
        InProcessFetch::new(canvas.clone()),
        Duration::from_millis(10),
    );
    let view = reconciler.view();

    let mine = canvas.paint_at("me", 0, "#FF0000", 1_000).unwrap();
    view.lock().record_local_paint(mine);

    // someone else overwrites the same cell with a later stamp
    canvas.paint_at("rival", 0, "#0000FF", 2_000).unwrap();
    reconciler.tick().await.unwrap();

    let cell = view.lock().cell(0).cloned().unwrap();
    assert_eq!(cell.color, "#0000FF");
    assert_eq!(cell.last_writer_id.as_deref(), Some("rival"));
    assert!(!view.lock().has_pending(0));
}

#[tokio::test]
async fn failed_fetch_leaves_view_unchanged_and_stale() {
    let reconciler = SyncReconciler::new(FailingFetch, Duration::from_millis(10));
    let view = reconciler.view();

    assert!(reconciler.tick().await.is_err());
    assert!(view.lock().is_stale());
    assert!(view.lock().is_empty());
}

#[tokio::test]
async fn view_recovers_after_transient_failure() {
    let canvas = Arc::new(CanvasService::new(2, 1, "#FFFFFF", Duration::ZERO));
    canvas.paint_at("remote", 0, "#00FF00", 1_000).unwrap();

    let reconciler = SyncReconciler::new(
        FlakyFetch {
            canvas: canvas.clone(),
            failed_once: AtomicBool::new(false),
        },
        Duration::from_millis(10),
    );
    let view = reconciler.view();

    assert!(reconciler.tick().await.is_err());
    assert!(view.lock().is_stale());

    reconciler.tick().await.unwrap();
    assert!(!view.lock().is_stale());
    assert_eq!(view.lock().cell(0).unwrap().color, "#00FF00");
}

#[tokio::test]
async fn run_loop_ticks_until_aborted() {
    let canvas = Arc::new(CanvasService::new(2, 1, "#FFFFFF", Duration::ZERO));
    canvas.paint_at("remote", 1, "#123456", 1_000).unwrap();

    let reconciler = SyncReconciler::new(
        InProcessFetch::new(canvas.clone()),
        Duration::from_millis(5),
    );
    let view = reconciler.view();
    let handle = tokio::spawn(reconciler.run());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(view.lock().cell(1).unwrap().color, "#123456");

    // disconnecting a client is just this: stop issuing ticks
    handle.abort();
}
