use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncDomain {
    Trip,
    Fuel,
    Outstation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Create,
    Update,
}

/// One not-yet-transmitted domain mutation, held in the pending-sync queue.
/// The payload is a point-in-time JSON snapshot of the record as it looked
/// when the event was enqueued.
#[derive(Debug, Clone, Serialize)]
pub struct PendingSyncEvent {
    pub domain: SyncDomain,
    pub action: SyncAction,
    pub payload: Value,
    pub timestamp: DateTime<Utc>,
}
