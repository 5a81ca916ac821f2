use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::canvas::error::CanvasError;
use crate::models::Cell;

/// Mutable per-cell state behind the cell's lock. The public [`Cell`] model
/// is assembled on the way out so readers never see a half-written record.
#[derive(Debug)]
struct CellState {
    color: String,
    last_writer_id: Option<String>,
    updated_at: i64,
}

/// Canonical cell store and sole source of truth for the canvas.
///
/// Grid dimensions are fixed at construction. Each cell sits behind its own
/// lock: commits to the same cell serialize, commits to distinct cells run
/// fully in parallel, and reads take one cell lock at a time so a full-grid
/// pass never blocks writers for longer than a single cell copy.
pub struct GridStore {
    width: u32,
    height: u32,
    cells: Vec<RwLock<CellState>>,
    commits: AtomicU64,
}

impl GridStore {
    /// Create a fresh canvas epoch with every cell at `default_color` and no
    /// writer. `updated_at` starts at zero so any real commit outranks it.
    pub fn new(width: u32, height: u32, default_color: &str) -> Self {
        let count = (width as usize) * (height as usize);
        let cells = (0..count)
            .map(|_| {
                RwLock::new(CellState {
                    color: default_color.to_string(),
                    last_writer_id: None,
                    updated_at: 0,
                })
            })
            .collect();
        Self {
            width,
            height,
            cells,
            commits: AtomicU64::new(0),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> u32 {
        self.width * self.height
    }

    /// Total commits accepted since this epoch started.
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::Relaxed)
    }

    fn coordinates(&self, cell_id: u32) -> (u32, u32) {
        (cell_id % self.width, cell_id / self.width)
    }

    fn state(&self, cell_id: u32) -> Result<&RwLock<CellState>, CanvasError> {
        self.cells
            .get(cell_id as usize)
            .ok_or(CanvasError::NotFound { cell_id })
    }

    fn to_cell(&self, cell_id: u32, state: &CellState) -> Cell {
        let (x, y) = self.coordinates(cell_id);
        Cell {
            cell_id,
            x,
            y,
            color: state.color.clone(),
            last_writer_id: state.last_writer_id.clone(),
            updated_at: state.updated_at,
        }
    }

    /// Read a single cell.
    pub fn get(&self, cell_id: u32) -> Result<Cell, CanvasError> {
        let lock = self.state(cell_id)?;
        let state = lock.read();
        Ok(self.to_cell(cell_id, &state))
    }

    /// All cells in cell-identifier order. Used for live rendering, the
    /// reconciliation poll and snapshot capture.
    pub fn list_all(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .map(|(id, lock)| {
                let state = lock.read();
                self.to_cell(id as u32, &state)
            })
            .collect()
    }

    /// The only mutation entry point. `color` must already be normalized and
    /// the caller must already hold an admission from the cooldown gate.
    ///
    /// The committed `updated_at` is `max(previous + 1, request_time)`,
    /// computed under the cell's write lock, so stamps per cell are strictly
    /// monotonic even when requests arrive concurrently or with equal
    /// `request_time`.
    pub fn commit(
        &self,
        cell_id: u32,
        color: &str,
        writer_id: &str,
        request_time: i64,
    ) -> Result<Cell, CanvasError> {
        let lock = self.state(cell_id)?;
        let mut state = lock.write();
        state.updated_at = request_time.max(state.updated_at + 1);
        state.color = color.to_string();
        state.last_writer_id = Some(writer_id.to_string());
        let cell = self.to_cell(cell_id, &state);
        drop(state);
        self.commits.fetch_add(1, Ordering::Relaxed);
        Ok(cell)
    }
}
