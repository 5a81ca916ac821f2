use std::sync::{Arc, Mutex, OnceLock};

use axum::{extract::State, http::StatusCode, Json};
use sysinfo::System;
use tracing::info;

use crate::models::DiagnosticsResponse;
use crate::state::AppState;

static SYSTEM_MONITOR: OnceLock<Mutex<System>> = OnceLock::new();

/// Service diagnostics
#[utoipa::path(
    get,
    path = "/api/v1/diagnostics",
    responses(
        (status = 200, description = "Live canvas and host statistics", body = DiagnosticsResponse)
    )
)]
pub async fn diagnostics(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<DiagnosticsResponse>) {
    // Aggregate canvas statistics
    let n_clients = state.canvas.presence_count();
    let n_snapshots = state.canvas.timeline().len() as u32;
    let n_commits = state.canvas.store().commit_count();
    let grid_width = state.canvas.store().width();
    let grid_height = state.canvas.store().height();

    // System stats
    let (cpu_usage, memory_alloc, memory_free, memory_total) = {
        let sys_lock = SYSTEM_MONITOR.get_or_init(|| Mutex::new(System::new_all()));
        match sys_lock.lock() {
            Ok(mut sys) => {
                sys.refresh_cpu();
                sys.refresh_memory();
                (
                    sys.global_cpu_info().cpu_usage(),
                    sys.used_memory(),
                    sys.free_memory(),
                    sys.total_memory(),
                )
            }
            Err(_) => (0.0, 0, 0, 0),
        }
    };

    info!(
        "Diagnostics: CPU: {:.2}%, Mem: {}/{} MB (Free: {} MB), Clients: {}, Commits: {}, Snapshots: {}",
        cpu_usage,
        memory_alloc / 1024 / 1024,
        memory_total / 1024 / 1024,
        memory_free / 1024 / 1024,
        n_clients,
        n_commits,
        n_snapshots
    );

    (
        StatusCode::OK,
        Json(DiagnosticsResponse {
            n_clients,
            n_snapshots,
            n_commits,
            grid_width,
            grid_height,
            cpu_usage,
            memory_alloc,
            memory_total,
            memory_free,
        }),
    )
}
