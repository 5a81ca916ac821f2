use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Cell;

/// One entry of the snapshot timeline listing: the scrub control maps a
/// linear index onto these.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub index: usize,
    pub captured_at: DateTime<Utc>,
}

/// A full historical snapshot as served to explorer consumers.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub index: usize,
    pub captured_at: DateTime<Utc>,
    pub cells: Vec<Cell>,
}
