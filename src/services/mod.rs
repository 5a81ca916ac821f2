pub mod canvas_service;
pub mod snapshot_service;

pub use canvas_service::CanvasService;
pub use snapshot_service::spawn_snapshot_task;
