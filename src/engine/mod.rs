//! The logistics engine: one owned state container per fleet session, with an
//! explicit mutation API. All operations are synchronous in-memory
//! computation; a multi-threaded host serializes access behind a single mutex
//! because trigger dedup and reference-trip selection read then write shared
//! collections.

mod fuel;
mod geofence;
mod sync;
mod trips;

pub use fuel::DEFAULT_FRAUD_EFFICIENCY_THRESHOLD_KM_PER_L;

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    Driver, FuelEntry, GeofenceZone, OutstationTrigger, PendingSyncEvent, PropulsionType, Trip,
    Vehicle,
};

pub struct LogisticsEngine {
    vehicles: HashMap<Uuid, Vehicle>,
    drivers: HashMap<Uuid, Driver>,
    active: Option<Trip>,
    history: Vec<Trip>,
    zones: Vec<GeofenceZone>,
    triggers: Vec<OutstationTrigger>,
    // Dedup index over (vehicle, calendar day); mirrors `triggers` and exists
    // only to make the one-trigger-per-day check O(1).
    trigger_days: HashSet<(Uuid, NaiveDate)>,
    fuel_entries: Vec<FuelEntry>,
    pending: VecDeque<PendingSyncEvent>,
    fraud_threshold: f64,
}

impl LogisticsEngine {
    pub fn new(fraud_threshold: f64) -> Self {
        Self {
            vehicles: HashMap::new(),
            drivers: HashMap::new(),
            active: None,
            history: Vec::new(),
            zones: Vec::new(),
            triggers: Vec::new(),
            trigger_days: HashSet::new(),
            fuel_entries: Vec::new(),
            pending: VecDeque::new(),
            fraud_threshold,
        }
    }

    pub fn register_vehicle(
        &mut self,
        name: impl Into<String>,
        registration_number: impl Into<String>,
        propulsion: PropulsionType,
        expected_efficiency_km_per_l: Option<f64>,
    ) -> Vehicle {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            name: name.into(),
            registration_number: registration_number.into(),
            propulsion,
            expected_efficiency_km_per_l,
        };
        self.vehicles.insert(vehicle.id, vehicle.clone());
        vehicle
    }

    pub fn register_driver(
        &mut self,
        name: impl Into<String>,
        license_number: impl Into<String>,
    ) -> Driver {
        let driver = Driver {
            id: Uuid::new_v4(),
            name: name.into(),
            license_number: license_number.into(),
        };
        self.drivers.insert(driver.id, driver.clone());
        driver
    }

    pub fn vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn driver(&self, id: Uuid) -> Option<&Driver> {
        self.drivers.get(&id)
    }

    pub fn current_trip(&self) -> Option<&Trip> {
        self.active.as_ref()
    }

    pub fn trip_history(&self) -> &[Trip] {
        &self.history
    }

    pub fn fuel_entries(&self) -> &[FuelEntry] {
        &self.fuel_entries
    }

    pub fn geofences(&self) -> &[GeofenceZone] {
        &self.zones
    }

    pub fn outstation_triggers(&self) -> &[OutstationTrigger] {
        &self.triggers
    }

    pub fn pending_sync_len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_sync_events(&self) -> &VecDeque<PendingSyncEvent> {
        &self.pending
    }
}

impl Default for LogisticsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_FRAUD_EFFICIENCY_THRESHOLD_KM_PER_L)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use super::LogisticsEngine;
    use crate::models::{GpsSample, PropulsionType};

    pub fn engine_with_fleet() -> (LogisticsEngine, Uuid, Uuid) {
        let mut engine = LogisticsEngine::default();
        let vehicle = engine.register_vehicle("Tata 407", "MH-04-AB-1234", PropulsionType::Diesel, Some(9.5));
        let driver = engine.register_driver("R. Sharma", "DL-0420110012345");
        (engine, vehicle.id, driver.id)
    }

    pub fn ts(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, min, 0).unwrap()
    }

    pub fn sample(lat: f64, lon: f64, at: DateTime<Utc>) -> GpsSample {
        GpsSample::new(lat, lon, at)
    }
}
