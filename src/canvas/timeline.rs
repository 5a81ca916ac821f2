use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::canvas::error::CanvasError;
use crate::models::Cell;

/// Immutable point-in-time copy of the full grid. Once appended to the
/// timeline it is never mutated; explorer consumers render it verbatim.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub index: usize,
    pub captured_at: DateTime<Utc>,
    pub cells: Vec<Cell>,
}

/// Append-only, time-ordered sequence of grid snapshots, indexed 0..N-1 in
/// capture order. Powers historical scrubbing ("explorer mode"); there is
/// no write path against historical snapshots.
#[derive(Debug, Default)]
pub struct SnapshotTimeline {
    snapshots: RwLock<Vec<Arc<Snapshot>>>,
}

impl SnapshotTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a capture, assigning it the next index.
    pub fn append(&self, cells: Vec<Cell>, captured_at: DateTime<Utc>) -> Arc<Snapshot> {
        let mut snapshots = self.snapshots.write();
        let snapshot = Arc::new(Snapshot {
            index: snapshots.len(),
            captured_at,
            cells,
        });
        snapshots.push(snapshot.clone());
        snapshot
    }

    /// Capture times in index order, for summary listings.
    pub fn list(&self) -> Vec<(usize, DateTime<Utc>)> {
        self.snapshots
            .read()
            .iter()
            .map(|s| (s.index, s.captured_at))
            .collect()
    }

    pub fn get(&self, index: usize) -> Result<Arc<Snapshot>, CanvasError> {
        let snapshots = self.snapshots.read();
        snapshots
            .get(index)
            .cloned()
            .ok_or(CanvasError::OutOfRange {
                index,
                len: snapshots.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.snapshots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.read().is_empty()
    }
}
