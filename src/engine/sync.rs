//! Pending-sync queue: append-only FIFO of domain events awaiting
//! transmission, drained as a single batch.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::LogisticsEngine;
use crate::models::{PendingSyncEvent, SyncAction, SyncDomain};

impl LogisticsEngine {
    /// Snapshots a record into the queue. Infallible and unbounded; the
    /// hosting application drains periodically.
    pub(crate) fn enqueue_event<T: Serialize>(
        &mut self,
        domain: SyncDomain,
        action: SyncAction,
        record: &T,
    ) {
        let payload = serde_json::to_value(record).unwrap_or(Value::Null);
        self.pending.push_back(PendingSyncEvent {
            domain,
            action,
            payload,
            timestamp: Utc::now(),
        });
    }

    /// Drains the queue and marks every stored trip, fuel entry and
    /// outstation trigger as synced. Models an all-or-nothing "everything in
    /// memory is now persisted" sync; there is no per-event acknowledgment or
    /// retry.
    pub fn drain_and_sync(&mut self) {
        let drained = self.pending.len();
        self.pending.clear();

        if let Some(trip) = self.active.as_mut() {
            trip.synced = true;
        }
        for trip in &mut self.history {
            trip.synced = true;
        }
        for entry in &mut self.fuel_entries {
            entry.mark_synced();
        }
        for trigger in &mut self.triggers {
            trigger.synced = true;
        }

        info!("Sync complete: drained {} pending events", drained);
    }
}
