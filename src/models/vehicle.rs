use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropulsionType {
    Diesel,
    Petrol,
    Cng,
    Electric,
}

/// Fleet reference data. Registered once, never mutated by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub registration_number: String,
    pub propulsion: PropulsionType,
    pub expected_efficiency_km_per_l: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub license_number: String,
}
