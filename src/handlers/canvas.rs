use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::canvas::CanvasError;
use crate::models::{CanvasResponse, Cell, ErrorResponse, PaintRequest};
use crate::state::AppState;

/// Full canvas state
///
/// Serves both the initial page load and every reconciliation poll, so it
/// stays a plain lock-per-cell read with no side effects.
#[utoipa::path(
    get,
    path = "/api/v1/canvas",
    responses(
        (status = 200, description = "All cells in identifier order", body = CanvasResponse)
    )
)]
pub async fn get_canvas(State(state): State<Arc<AppState>>) -> Json<CanvasResponse> {
    Json(state.canvas.canvas_response())
}

/// Paint one cell
#[utoipa::path(
    post,
    path = "/api/v1/canvas/cells/{cell_id}",
    request_body = PaintRequest,
    params(
        ("cell_id" = u32, Path, description = "Cell identifier (y * width + x)")
    ),
    responses(
        (status = 200, description = "The committed cell", body = Cell),
        (status = 400, description = "Color does not normalize to #RRGGBB", body = ErrorResponse),
        (status = 404, description = "Cell identifier outside grid bounds", body = ErrorResponse),
        (status = 429, description = "Cooldown active, retryAfterSeconds set", body = ErrorResponse)
    )
)]
pub async fn paint_cell(
    State(state): State<Arc<AppState>>,
    Path(cell_id): Path<u32>,
    Json(payload): Json<PaintRequest>,
) -> Result<(StatusCode, Json<Cell>), (StatusCode, Json<ErrorResponse>)> {
    match state.canvas.paint(&payload.client_id, cell_id, &payload.color) {
        Ok(cell) => {
            debug!(
                "Cell {} painted {} by '{}'",
                cell.cell_id, cell.color, payload.client_id
            );
            Ok((StatusCode::OK, Json(cell)))
        }
        Err(e @ CanvasError::CooldownActive { remaining }) => {
            let status = StatusCode::TOO_MANY_REQUESTS;
            Err((status, Json(ErrorResponse {
                code: status.as_u16(),
                status: status.to_string(),
                error: e.to_string(),
                retry_after_seconds: Some(remaining.as_secs_f64()),
            })))
        }
        Err(e @ CanvasError::NotFound { .. }) => {
            let status = StatusCode::NOT_FOUND;
            Err((status, Json(ErrorResponse {
                code: status.as_u16(),
                status: status.to_string(),
                error: e.to_string(),
                retry_after_seconds: None,
            })))
        }
        Err(e @ CanvasError::InvalidColor { .. }) => {
            let status = StatusCode::BAD_REQUEST;
            Err((status, Json(ErrorResponse {
                code: status.as_u16(),
                status: status.to_string(),
                error: e.to_string(),
                retry_after_seconds: None,
            })))
        }
        Err(e) => {
            // The paint path cannot produce the remaining variants; treat an
            // escape as a server bug rather than blaming the request.
            warn!("Unexpected paint error for cell {}: {}", cell_id, e);
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            Err((status, Json(ErrorResponse {
                code: status.as_u16(),
                status: status.to_string(),
                error: e.to_string(),
                retry_after_seconds: None,
            })))
        }
    }
}
