use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Marker value carried by every outstation trigger record.
pub const OUTSTATION_MARKER: &str = "OUTSTATION";

/// Records that a vehicle left all monitored geofence zones, justifying an
/// outstation allowance. At most one exists per vehicle per calendar day;
/// immutable once created apart from the sync flag.
#[derive(Debug, Clone, Serialize)]
pub struct OutstationTrigger {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub marker: &'static str,
    pub timestamp: DateTime<Utc>,
    pub distance_from_center_km: f64,
    pub synced: bool,
}

impl OutstationTrigger {
    pub fn new(vehicle_id: Uuid, timestamp: DateTime<Utc>, distance_from_center_km: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            marker: OUTSTATION_MARKER,
            timestamp,
            distance_from_center_km,
            synced: false,
        }
    }
}
