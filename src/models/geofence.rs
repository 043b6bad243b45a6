use serde::Serialize;
use uuid::Uuid;

/// A circular area (center + radius) separating "in city" from "outstation"
/// vehicle position. Operator-created, toggled active/inactive, never
/// auto-deleted.
#[derive(Debug, Clone, Serialize)]
pub struct GeofenceZone {
    pub id: Uuid,
    pub name: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub radius_km: f64,
    pub active: bool,
}
