use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::models::{ErrorResponse, SnapshotResponse, SnapshotSummary};
use crate::state::AppState;

/// List the snapshot timeline
#[utoipa::path(
    get,
    path = "/api/v1/snapshots",
    responses(
        (status = 200, description = "Snapshot summaries in capture order", body = [SnapshotSummary])
    )
)]
pub async fn list_snapshots(State(state): State<Arc<AppState>>) -> Json<Vec<SnapshotSummary>> {
    let summaries = state.canvas.list_snapshots();
    debug!("Listing {} snapshots", summaries.len());
    Json(summaries)
}

/// Fetch one historical snapshot
#[utoipa::path(
    get,
    path = "/api/v1/snapshots/{index}",
    params(
        ("index" = usize, Path, description = "0-based snapshot index in capture order")
    ),
    responses(
        (status = 200, description = "The snapshot's cells, verbatim", body = SnapshotResponse),
        (status = 404, description = "Index out of range", body = ErrorResponse)
    )
)]
pub async fn get_snapshot(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<(StatusCode, Json<SnapshotResponse>), (StatusCode, Json<ErrorResponse>)> {
    match state.canvas.get_snapshot(index) {
        Ok(snapshot) => Ok((
            StatusCode::OK,
            Json(SnapshotResponse {
                index: snapshot.index,
                captured_at: snapshot.captured_at,
                cells: snapshot.cells.clone(),
            }),
        )),
        Err(e) => {
            let status = StatusCode::NOT_FOUND;
            Err((status, Json(ErrorResponse {
                code: status.as_u16(),
                status: status.to_string(),
                error: e.to_string(),
                retry_after_seconds: None,
            })))
        }
    }
}
