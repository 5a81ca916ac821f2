use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One addressable grid position and its current color/writer/timestamp.
///
/// `cell_id = y * grid_width + x`; the binding between id and coordinates is
/// fixed for the lifetime of a canvas. `updated_at` is a server-assigned
/// millisecond timestamp that is strictly monotonic per cell.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub cell_id: u32,
    pub x: u32,
    pub y: u32,
    pub color: String,
    pub last_writer_id: Option<String>,
    pub updated_at: i64,
}

/// Full canvas state as served to clients: grid dimensions plus every cell
/// in cell-identifier order.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CanvasResponse {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Cell>,
}
