use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::Config;
use crate::models::SendMessage;
use crate::services::CanvasService;

/// Shared application state handed to every route.
pub struct AppState {
    pub config: Config,
    pub canvas: Arc<CanvasService>,
    /// Fan-out channel for live-session pushes (presence counts). Every
    /// connected socket holds a subscription.
    pub live_tx: broadcast::Sender<SendMessage>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let canvas = Arc::new(CanvasService::new(
            config.grid_width,
            config.grid_height,
            &config.default_color,
            config.cooldown(),
        ));
        let (live_tx, _rx) = broadcast::channel::<SendMessage>(100);
        Self {
            config,
            canvas,
            live_tx,
        }
    }
}
