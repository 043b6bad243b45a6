//! Fuel entry recording, efficiency derivation and fraud flagging.

use tracing::{info, warn};
use uuid::Uuid;

use super::LogisticsEngine;
use crate::error::EngineError;
use crate::geo;
use crate::models::{FuelEntry, SyncAction, SyncDomain};

/// Business default for the fraud plausibility floor: a computed efficiency
/// below 2 km/L suggests volume/cost manipulation or an unrelated trip
/// pairing.
pub const DEFAULT_FRAUD_EFFICIENCY_THRESHOLD_KM_PER_L: f64 = 2.0;

impl LogisticsEngine {
    /// Records a fuel purchase against a vehicle. The reference trip is the
    /// explicitly given one, or else the vehicle's most recently completed
    /// trip; efficiency is derived only when that trip has a distance. The
    /// entry is an immutable audit record from the moment it is stored.
    pub fn record_fuel_entry(
        &mut self,
        vehicle_id: Uuid,
        cost: f64,
        volume_liters: f64,
        evidence_ref: impl Into<String>,
        created_by: Uuid,
        trip_id: Option<Uuid>,
    ) -> Result<FuelEntry, EngineError> {
        if !self.vehicles.contains_key(&vehicle_id) {
            return Err(EngineError::NotFound(format!("vehicle {vehicle_id}")));
        }

        let (reference_trip_id, reference_distance_km) = match trip_id {
            Some(id) => {
                let trip = self
                    .trip_by_id(id)
                    .ok_or_else(|| EngineError::NotFound(format!("trip {id}")))?;
                (Some(trip.id), trip.distance_km)
            }
            None => match self.latest_completed_trip(vehicle_id) {
                Some(trip) => (Some(trip.id), trip.distance_km),
                None => (None, None),
            },
        };

        let efficiency_km_per_l = reference_distance_km.map(|d| geo::round2(d / volume_liters));

        let (flagged_as_fraud, fraud_reason) = match (efficiency_km_per_l, reference_distance_km) {
            (Some(efficiency), Some(distance)) if efficiency < self.fraud_threshold => {
                let reason = format!(
                    "Efficiency {} km/L from {} km traveled on {} L refueled is below the {} km/L plausibility threshold",
                    efficiency, distance, volume_liters, self.fraud_threshold
                );
                warn!("Fuel entry for vehicle {} flagged: {}", vehicle_id, reason);
                (true, Some(reason))
            }
            _ => (false, None),
        };

        let entry = FuelEntry::new(
            reference_trip_id,
            vehicle_id,
            cost,
            volume_liters,
            evidence_ref.into(),
            efficiency_km_per_l,
            flagged_as_fraud,
            fraud_reason,
            created_by,
        );

        info!(
            "Recorded fuel entry {} for vehicle {}: {} L, efficiency {:?}",
            entry.id(),
            vehicle_id,
            volume_liters,
            efficiency_km_per_l
        );

        self.enqueue_event(SyncDomain::Fuel, SyncAction::Create, &entry);
        self.fuel_entries.push(entry.clone());
        Ok(entry)
    }
}
