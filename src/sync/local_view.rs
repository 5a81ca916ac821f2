use std::collections::HashMap;

use crate::models::Cell;

/// A client's best current approximation of the canonical grid, plus the
/// set of its own writes not yet confirmed by a canonical fetch.
///
/// Reconciled, never authoritative. Canonical state wins over a stale local
/// copy, with one exception: a cell carrying a pending optimistic write is
/// never downgraded by canonical data that predates the submission, so a
/// client's own pixel does not visibly revert right after painting it.
#[derive(Debug, Default)]
pub struct LocalView {
    cells: HashMap<u32, Cell>,
    pending: HashMap<u32, i64>,
    stale: bool,
}

impl LocalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, cell_id: u32) -> Option<&Cell> {
        self.cells.get(&cell_id)
    }

    /// Cells in identifier order, for rendering.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.values().cloned().collect();
        cells.sort_by_key(|c| c.cell_id);
        cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn has_pending(&self, cell_id: u32) -> bool {
        self.pending.contains_key(&cell_id)
    }

    /// True after a failed fetch, until the next successful one. The UI may
    /// show a stale-data indicator; nothing else changes.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub(crate) fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub(crate) fn clear_stale(&mut self) {
        self.stale = false;
    }

    /// Echo the client's own committed paint immediately. The committed
    /// cell's server stamp doubles as the pending marker's logical
    /// submission time: any canonical record at or past it confirms the
    /// write.
    pub fn record_local_paint(&mut self, cell: Cell) {
        self.pending.insert(cell.cell_id, cell.updated_at);
        self.cells.insert(cell.cell_id, cell);
    }

    /// Merge one canonical fetch into the view.
    pub fn apply_canonical(&mut self, canonical: Vec<Cell>) {
        for cell in canonical {
            let id = cell.cell_id;
            if let Some(&submitted_at) = self.pending.get(&id) {
                // Canonical data older than the submission would flicker the
                // client's own pixel back; skip it until the write shows up.
                if cell.updated_at >= submitted_at {
                    self.pending.remove(&id);
                    self.cells.insert(id, cell);
                }
                continue;
            }
            match self.cells.get(&id) {
                Some(local) if local.updated_at >= cell.updated_at => {}
                _ => {
                    self.cells.insert(id, cell);
                }
            }
        }
    }
}
