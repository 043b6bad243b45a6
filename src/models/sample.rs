use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time GPS reading. Never mutated after creation; the device
/// layer resolves coordinates and timestamps before handing them over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsSample {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

impl GpsSample {
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }
}
