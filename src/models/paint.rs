use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a paint request against one cell.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaintRequest {
    /// Opaque client identifier; cooldown state is keyed by it.
    pub client_id: String,
    /// Requested color, normalized server-side to `#RRGGBB`.
    pub color: String,
}
