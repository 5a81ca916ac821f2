use std::time::Duration;
use thiserror::Error;

/// Errors produced by the canvas engine. All of them are recoverable by the
/// caller: reject-and-retry or reject-and-inform, never a process restart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// The cell identifier lies outside the grid bounds.
    #[error("cell {cell_id} does not exist on this canvas")]
    NotFound { cell_id: u32 },

    /// The client is still cooling down from its previous paint.
    #[error("cooldown active, retry in {:.1}s", remaining.as_secs_f64())]
    CooldownActive { remaining: Duration },

    /// The snapshot index is not in `[0, len)`.
    #[error("snapshot index {index} out of range (have {len})")]
    OutOfRange { index: usize, len: usize },

    /// The submitted color does not normalize to `#RRGGBB`.
    #[error("invalid color '{value}'")]
    InvalidColor { value: String },
}
