use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::canvas::{
    normalize_color, Admission, CanvasError, CooldownGate, GridStore, PresenceTracker, Snapshot,
    SnapshotTimeline,
};
use crate::models::{CanvasResponse, Cell, SnapshotSummary};

/// The engine behind every external operation: owns the canonical store,
/// the cooldown gate, the presence counter and the snapshot timeline, and
/// wires them together in the order the contract requires (admission is the
/// only gatekeeper before a commit; snapshots are captured independently of
/// individual writes).
pub struct CanvasService {
    store: GridStore,
    gate: CooldownGate,
    presence: PresenceTracker,
    timeline: SnapshotTimeline,
}

impl CanvasService {
    pub fn new(width: u32, height: u32, default_color: &str, cooldown: Duration) -> Self {
        info!(
            "Canvas initialized: {}x{} cells, default color {}, cooldown {}s",
            width,
            height,
            default_color,
            cooldown.as_secs_f64()
        );
        Self {
            store: GridStore::new(width, height, default_color),
            gate: CooldownGate::new(cooldown),
            presence: PresenceTracker::new(),
            timeline: SnapshotTimeline::new(),
        }
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn timeline(&self) -> &SnapshotTimeline {
        &self.timeline
    }

    /// Paint one cell, stamped with the current wall clock.
    pub fn paint(&self, client_id: &str, cell_id: u32, color: &str) -> Result<Cell, CanvasError> {
        self.paint_at(client_id, cell_id, color, Utc::now().timestamp_millis())
    }

    /// Paint one cell with a caller-supplied arrival stamp (epoch
    /// milliseconds), for transports that timestamp requests on receipt.
    ///
    /// Order matters: the color and bounds are validated before admission so
    /// a doomed request never consumes the client's cooldown, and the gate
    /// is consulted before the store so a cooling client never mutates
    /// anything.
    pub fn paint_at(
        &self,
        client_id: &str,
        cell_id: u32,
        color: &str,
        request_time: i64,
    ) -> Result<Cell, CanvasError> {
        let color = normalize_color(color)?;
        if cell_id >= self.store.cell_count() {
            return Err(CanvasError::NotFound { cell_id });
        }
        match self.gate.try_admit(client_id, request_time) {
            Admission::Admitted => {
                let cell = self.store.commit(cell_id, &color, client_id, request_time)?;
                debug!(
                    "Committed cell {} -> {} by '{}' at {}",
                    cell_id, cell.color, client_id, cell.updated_at
                );
                Ok(cell)
            }
            Admission::Rejected { remaining } => Err(CanvasError::CooldownActive { remaining }),
        }
    }

    /// Ordered full grid, for the initial load and every reconciliation
    /// tick.
    pub fn get_grid(&self) -> Vec<Cell> {
        self.store.list_all()
    }

    pub fn canvas_response(&self) -> CanvasResponse {
        CanvasResponse {
            width: self.store.width(),
            height: self.store.height(),
            cells: self.store.list_all(),
        }
    }

    pub fn connect(&self) -> u32 {
        self.presence.on_connect()
    }

    pub fn disconnect(&self) -> u32 {
        self.presence.on_disconnect()
    }

    pub fn presence_count(&self) -> u32 {
        self.presence.current()
    }

    /// Capture the current grid into the timeline.
    pub fn capture_snapshot(&self) -> Arc<Snapshot> {
        self.timeline.append(self.store.list_all(), Utc::now())
    }

    pub fn list_snapshots(&self) -> Vec<SnapshotSummary> {
        self.timeline
            .list()
            .into_iter()
            .map(|(index, captured_at)| SnapshotSummary { index, captured_at })
            .collect()
    }

    pub fn get_snapshot(&self, index: usize) -> Result<Arc<Snapshot>, CanvasError> {
        self.timeline.get(index)
    }
}
