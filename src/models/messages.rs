use serde::{Deserialize, Serialize};

/// Keepalive probe from a live session. The client identifier is optional
/// and only used for logging.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PingMessage {
    pub client_id: Option<String>,
}

/// Presence count push, sent to every live session whenever a client
/// connects or disconnects.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClientsMessage {
    pub count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PongMessage {
    pub date: String,
}

/// Messages accepted on the live socket.
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum ReceivedMessage {
    #[serde(rename = "ping")]
    Ping(PingMessage),
}

/// Messages the server sends on the live socket.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum SendMessage {
    #[serde(rename = "clients")]
    Clients(ClientsMessage),
    #[serde(rename = "pong")]
    Pong(PongMessage),
}
