use utoipa::OpenApi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::health::ready_check,
        handlers::canvas::get_canvas,
        handlers::canvas::paint_cell,
        handlers::snapshots::list_snapshots,
        handlers::snapshots::get_snapshot,
        handlers::diagnostics::diagnostics,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            Cell,
            CanvasResponse,
            PaintRequest,
            SnapshotSummary,
            SnapshotResponse,
            DiagnosticsResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "api", description = "Canvas API endpoints")
    )
)]
pub struct ApiDoc;
