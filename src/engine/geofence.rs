//! Geofence zones and outstation trigger detection.

use tracing::info;
use uuid::Uuid;

use super::LogisticsEngine;
use crate::error::EngineError;
use crate::geo;
use crate::models::{GeofenceZone, GpsSample, OutstationTrigger, SyncAction, SyncDomain};

impl LogisticsEngine {
    /// Registers a new zone, active immediately.
    pub fn add_geofence(
        &mut self,
        name: impl Into<String>,
        center_latitude: f64,
        center_longitude: f64,
        radius_km: f64,
    ) -> GeofenceZone {
        let zone = GeofenceZone {
            id: Uuid::new_v4(),
            name: name.into(),
            center_latitude,
            center_longitude,
            radius_km,
            active: true,
        };
        info!(
            "Added geofence '{}' at ({}, {}) radius {} km",
            zone.name, zone.center_latitude, zone.center_longitude, zone.radius_km
        );
        self.zones.push(zone.clone());
        zone
    }

    /// Flips a zone between active and inactive. Inactive zones are exempt
    /// from evaluation; triggers already created stay untouched.
    pub fn toggle_geofence(&mut self, id: Uuid) -> Result<(), EngineError> {
        let zone = self
            .zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| EngineError::NotFound(format!("geofence zone {id}")))?;
        zone.active = !zone.active;
        info!(
            "Geofence '{}' is now {}",
            zone.name,
            if zone.active { "active" } else { "inactive" }
        );
        Ok(())
    }

    /// Checks one sample against every active zone and raises an outstation
    /// trigger on the first zone the vehicle is outside of. At most one
    /// trigger per vehicle per calendar day, whichever zone was exited and
    /// however many samples land outside; re-entry the same day does not
    /// reset the dedup.
    pub(crate) fn evaluate_geofences(&mut self, vehicle_id: Uuid, sample: &GpsSample) {
        let day = sample.timestamp.date_naive();
        if self.trigger_days.contains(&(vehicle_id, day)) {
            return;
        }

        let exit = self.zones.iter().filter(|z| z.active).find_map(|zone| {
            let distance = geo::haversine_km(
                sample.latitude,
                sample.longitude,
                zone.center_latitude,
                zone.center_longitude,
            );
            (distance > zone.radius_km).then(|| (zone.name.clone(), distance))
        });

        if let Some((zone_name, distance)) = exit {
            let trigger = OutstationTrigger::new(vehicle_id, sample.timestamp, distance);
            info!(
                "Outstation trigger for vehicle {}: {:.2} km outside '{}'",
                vehicle_id, distance, zone_name
            );
            self.enqueue_event(SyncDomain::Outstation, SyncAction::Create, &trigger);
            self.triggers.push(trigger);
            self.trigger_days.insert((vehicle_id, day));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine_with_fleet, sample, ts};
    use crate::models::outstation::OUTSTATION_MARKER;

    const CENTER_LAT: f64 = 19.0760;
    const CENTER_LON: f64 = 72.8777;

    // One degree of latitude is ~111.19 km on a 6371 km sphere.
    const DEG_PER_KM_LAT: f64 = 1.0 / 111.19;

    #[test]
    fn exit_creates_exactly_one_trigger() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        engine.add_geofence("Mumbai", CENTER_LAT, CENTER_LON, 50.0);

        engine
            .start_trip(vehicle, driver, sample(CENTER_LAT, CENTER_LON, ts(8, 0)), None)
            .unwrap();

        // Inside the zone: no trigger.
        engine.append_sample(sample(CENTER_LAT + 10.0 * DEG_PER_KM_LAT, CENTER_LON, ts(8, 10)));
        assert!(engine.outstation_triggers().is_empty());

        // 55 km out: one trigger, at the measured distance.
        engine.append_sample(sample(CENTER_LAT + 55.0 * DEG_PER_KM_LAT, CENTER_LON, ts(9, 0)));
        assert_eq!(engine.outstation_triggers().len(), 1);
        let trigger = &engine.outstation_triggers()[0];
        assert_eq!(trigger.vehicle_id, vehicle);
        assert_eq!(trigger.marker, OUTSTATION_MARKER);
        assert_eq!(trigger.timestamp, ts(9, 0));
        assert!((trigger.distance_from_center_km - 55.0).abs() < 0.5);

        // Still outside, same day: no second trigger.
        engine.append_sample(sample(CENTER_LAT + 60.0 * DEG_PER_KM_LAT, CENTER_LON, ts(9, 30)));
        assert_eq!(engine.outstation_triggers().len(), 1);
    }

    #[test]
    fn reentry_and_second_exit_same_day_stays_deduped() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        engine.add_geofence("Mumbai", CENTER_LAT, CENTER_LON, 50.0);
        engine
            .start_trip(vehicle, driver, sample(CENTER_LAT, CENTER_LON, ts(8, 0)), None)
            .unwrap();

        engine.append_sample(sample(CENTER_LAT + 55.0 * DEG_PER_KM_LAT, CENTER_LON, ts(9, 0)));
        engine.append_sample(sample(CENTER_LAT, CENTER_LON, ts(10, 0)));
        engine.append_sample(sample(CENTER_LAT + 70.0 * DEG_PER_KM_LAT, CENTER_LON, ts(11, 0)));

        assert_eq!(engine.outstation_triggers().len(), 1);
    }

    #[test]
    fn inactive_zone_is_not_evaluated() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        let zone = engine.add_geofence("Mumbai", CENTER_LAT, CENTER_LON, 50.0);
        engine.toggle_geofence(zone.id).unwrap();

        engine
            .start_trip(vehicle, driver, sample(CENTER_LAT, CENTER_LON, ts(8, 0)), None)
            .unwrap();
        engine.append_sample(sample(CENTER_LAT + 55.0 * DEG_PER_KM_LAT, CENTER_LON, ts(9, 0)));

        assert!(engine.outstation_triggers().is_empty());
    }

    #[test]
    fn deactivating_a_zone_keeps_existing_triggers() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        let zone = engine.add_geofence("Mumbai", CENTER_LAT, CENTER_LON, 50.0);
        engine
            .start_trip(vehicle, driver, sample(CENTER_LAT, CENTER_LON, ts(8, 0)), None)
            .unwrap();
        engine.append_sample(sample(CENTER_LAT + 55.0 * DEG_PER_KM_LAT, CENTER_LON, ts(9, 0)));
        assert_eq!(engine.outstation_triggers().len(), 1);

        engine.toggle_geofence(zone.id).unwrap();
        assert_eq!(engine.outstation_triggers().len(), 1);
        assert!(!engine.geofences()[0].active);
    }

    #[test]
    fn toggle_unknown_zone_is_not_found() {
        let (mut engine, _, _) = engine_with_fleet();
        let err = engine.toggle_geofence(uuid::Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, crate::error::EngineError::NotFound(_)));
    }

    #[test]
    fn trigger_enqueues_a_sync_event() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        engine.add_geofence("Mumbai", CENTER_LAT, CENTER_LON, 50.0);
        engine
            .start_trip(vehicle, driver, sample(CENTER_LAT, CENTER_LON, ts(8, 0)), None)
            .unwrap();
        assert_eq!(engine.pending_sync_len(), 0);
        engine.append_sample(sample(CENTER_LAT + 55.0 * DEG_PER_KM_LAT, CENTER_LON, ts(9, 0)));
        assert_eq!(engine.pending_sync_len(), 1);
    }
}
