use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A fuel purchase record, written once at creation and never edited or
/// deleted afterwards. All fields are private with read accessors so the
/// audit-trail guarantee holds at the type level rather than by omission of
/// update operations; only the engine constructs entries and only the sync
/// drain flips the `synced` flag.
#[derive(Debug, Clone, Serialize)]
pub struct FuelEntry {
    id: Uuid,
    trip_id: Option<Uuid>,
    vehicle_id: Uuid,
    cost: f64,
    volume_liters: f64,
    evidence_ref: String,
    efficiency_km_per_l: Option<f64>,
    flagged_as_fraud: bool,
    fraud_reason: Option<String>,
    created_at: DateTime<Utc>,
    created_by: Uuid,
    synced: bool,
    immutable: bool,
}

impl FuelEntry {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        trip_id: Option<Uuid>,
        vehicle_id: Uuid,
        cost: f64,
        volume_liters: f64,
        evidence_ref: String,
        efficiency_km_per_l: Option<f64>,
        flagged_as_fraud: bool,
        fraud_reason: Option<String>,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            trip_id,
            vehicle_id,
            cost,
            volume_liters,
            evidence_ref,
            efficiency_km_per_l,
            flagged_as_fraud,
            fraud_reason,
            created_at: Utc::now(),
            created_by,
            synced: false,
            immutable: true,
        }
    }

    pub(crate) fn mark_synced(&mut self) {
        self.synced = true;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn trip_id(&self) -> Option<Uuid> {
        self.trip_id
    }

    pub fn vehicle_id(&self) -> Uuid {
        self.vehicle_id
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn volume_liters(&self) -> f64 {
        self.volume_liters
    }

    pub fn evidence_ref(&self) -> &str {
        &self.evidence_ref
    }

    pub fn efficiency_km_per_l(&self) -> Option<f64> {
        self.efficiency_km_per_l
    }

    pub fn flagged_as_fraud(&self) -> bool {
        self.flagged_as_fraud
    }

    pub fn fraud_reason(&self) -> Option<&str> {
        self.fraud_reason.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_by(&self) -> Uuid {
        self.created_by
    }

    pub fn synced(&self) -> bool {
        self.synced
    }

    pub fn immutable(&self) -> bool {
        self.immutable
    }
}
