use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{ClientsMessage, PongMessage, ReceivedMessage, SendMessage};
use crate::state::AppState;

/// Live WebSocket handler
///
/// The socket's lifecycle is what drives the presence count: opening it is
/// the `connect` operation, the task winding down (for any reason) is the
/// `disconnect`. Every count change is pushed to all live sessions.
pub async fn live_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    info!("New live connection attempt");
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Decrements presence and pushes the new count when the connection task
/// winds down, no matter which path it exits through.
struct PresenceGuard {
    state: Arc<AppState>,
}

impl Drop for PresenceGuard {
    fn drop(&mut self) {
        let count = self.state.canvas.disconnect();
        info!("Live connection closed, {} clients connected", count);
        let _ = self
            .state
            .live_tx
            .send(SendMessage::Clients(ClientsMessage { count }));
    }
}

/// Handle a live connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Identify this connection for logging
    let connection_id = Uuid::new_v4().to_string();

    // Split the socket into sender and receiver
    let (sender, mut receiver) = socket.split();

    // The sender is shared between the ping task and the push task
    let sender1 = Arc::new(tokio::sync::Mutex::new(sender));
    let sender2 = sender1.clone();

    // Subscribe before announcing the connect so this session also sees its
    // own count update.
    let mut rbc = state.live_tx.subscribe();

    let count = state.canvas.connect();
    info!(
        "Live connection {} established, {} clients connected",
        connection_id, count
    );
    let _ = state
        .live_tx
        .send(SendMessage::Clients(ClientsMessage { count }));

    let _guard = PresenceGuard {
        state: state.clone(),
    };

    // Listen to the websocket for incoming messages as a separate task
    let recv_connection_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(Message::Text(msg))) = receiver.next().await {
            // Parse the incoming message as JSON
            let parsed: ReceivedMessage = match serde_json::from_str(&msg) {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!(
                        "Failed to parse message on connection {}: {}",
                        recv_connection_id, e
                    );
                    continue;
                }
            };

            match parsed {
                ReceivedMessage::Ping(ping) => {
                    info!(
                        "Ping from connection {} (client {:?})",
                        recv_connection_id, ping.client_id
                    );
                    let pong = SendMessage::Pong(PongMessage {
                        date: Utc::now().to_rfc3339(),
                    });
                    let pong_msg = serde_json::to_string(&pong).unwrap();
                    if sender1.lock().await.send(Message::Text(pong_msg)).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Forward presence pushes from the broadcast channel to this client
    let mut send_task = tokio::spawn(async move {
        while let Ok(push) = rbc.recv().await {
            let text = serde_json::to_string(&push).unwrap();
            if sender2.lock().await.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Wait for either task to finish (and finish the other)
    tokio::select! {
        _ = (&mut recv_task) => send_task.abort(),
        _ = (&mut send_task) => recv_task.abort(),
    };
    // PresenceGuard drops here: decrement + push the new count
}
