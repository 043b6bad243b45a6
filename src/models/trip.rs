use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sample::GpsSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Completed,
}

/// One continuous vehicle movement session bounded by start/end GPS events.
///
/// Tracking points are append-only; the first element is the start sample and,
/// once completed, the last element is the end sample. `distance_km` is
/// derived from the sampled track at completion (sum of consecutive-pair
/// great-circle distances), never from the odometer readings, which are
/// operator-entered and kept for display and audit only.
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub tracking_points: Vec<GpsSample>,
    pub end_time: Option<DateTime<Utc>>,
    pub odometer_start: Option<f64>,
    pub odometer_end: Option<f64>,
    pub distance_km: Option<f64>,
    pub status: TripStatus,
    pub synced: bool,
}

impl Trip {
    pub fn start_sample(&self) -> &GpsSample {
        // Tracking points are created non-empty and only appended to.
        &self.tracking_points[0]
    }

    pub fn end_sample(&self) -> Option<&GpsSample> {
        match self.status {
            TripStatus::Completed => self.tracking_points.last(),
            TripStatus::Active => None,
        }
    }
}
