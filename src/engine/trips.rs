//! Trip lifecycle: Idle -> Active (sampling GPS) -> Idle, with the completed
//! trip moving into history.

use tracing::{info, warn};
use uuid::Uuid;

use super::LogisticsEngine;
use crate::error::EngineError;
use crate::geo;
use crate::models::{GpsSample, SyncAction, SyncDomain, Trip, TripStatus};

/// Travel distance over a sampled track: the sum of great-circle distances
/// between every consecutive pair of points, rounded to two decimals. This is
/// deliberately not the straight-line start-to-end distance, so curved
/// real-world routes are measured along the route.
pub(crate) fn track_distance_km(points: &[GpsSample]) -> f64 {
    let total: f64 = points
        .windows(2)
        .map(|pair| geo::haversine_km(pair[0].latitude, pair[0].longitude, pair[1].latitude, pair[1].longitude))
        .sum();
    geo::round2(total)
}

impl LogisticsEngine {
    /// Opens a new trip for the vehicle/driver pair. Exactly one trip may be
    /// active per session; the odometer reading is operator-entered and kept
    /// for audit only.
    pub fn start_trip(
        &mut self,
        vehicle_id: Uuid,
        driver_id: Uuid,
        initial_sample: GpsSample,
        odometer_start: Option<f64>,
    ) -> Result<Trip, EngineError> {
        if let Some(active) = &self.active {
            return Err(EngineError::InvalidState(format!(
                "trip {} is already active",
                active.id
            )));
        }
        if !self.vehicles.contains_key(&vehicle_id) {
            return Err(EngineError::NotFound(format!("vehicle {vehicle_id}")));
        }
        if !self.drivers.contains_key(&driver_id) {
            return Err(EngineError::NotFound(format!("driver {driver_id}")));
        }

        let trip = Trip {
            id: Uuid::new_v4(),
            vehicle_id,
            driver_id,
            start_time: initial_sample.timestamp,
            tracking_points: vec![initial_sample],
            end_time: None,
            odometer_start,
            odometer_end: None,
            distance_km: None,
            status: TripStatus::Active,
            synced: false,
        };
        info!("Started trip {} for vehicle {}", trip.id, vehicle_id);
        self.active = Some(trip.clone());
        Ok(trip)
    }

    /// Appends a GPS sample to the active trip's track and evaluates it
    /// against the geofence zones. Ignored with a warning when no trip is
    /// active; never errors, so a late timer tick cannot corrupt state.
    pub fn append_sample(&mut self, sample: GpsSample) {
        let vehicle_id = match &mut self.active {
            Some(trip) => {
                trip.tracking_points.push(sample);
                trip.vehicle_id
            }
            None => {
                warn!(
                    "GPS sample at ({}, {}) ignored: no active trip",
                    sample.latitude, sample.longitude
                );
                return;
            }
        };
        self.evaluate_geofences(vehicle_id, &sample);
    }

    /// Finalizes the active trip: appends the final sample, derives the track
    /// distance, moves the trip into history and enqueues it for sync.
    pub fn end_trip(
        &mut self,
        final_sample: GpsSample,
        odometer_end: Option<f64>,
    ) -> Result<Trip, EngineError> {
        let mut trip = self
            .active
            .take()
            .ok_or_else(|| EngineError::InvalidState("no active trip to end".to_string()))?;

        trip.tracking_points.push(final_sample);
        trip.end_time = Some(final_sample.timestamp);
        trip.odometer_end = odometer_end;
        trip.distance_km = Some(track_distance_km(&trip.tracking_points));
        trip.status = TripStatus::Completed;

        info!(
            "Ended trip {} for vehicle {}: {:.2} km over {} points",
            trip.id,
            trip.vehicle_id,
            trip.distance_km.unwrap_or(0.0),
            trip.tracking_points.len()
        );

        self.enqueue_event(SyncDomain::Trip, SyncAction::Create, &trip);
        self.history.push(trip.clone());
        Ok(trip)
    }

    pub(crate) fn trip_by_id(&self, id: Uuid) -> Option<&Trip> {
        self.history
            .iter()
            .find(|t| t.id == id)
            .or(self.active.as_ref().filter(|t| t.id == id))
    }

    pub(crate) fn latest_completed_trip(&self, vehicle_id: Uuid) -> Option<&Trip> {
        self.history
            .iter()
            .filter(|t| t.vehicle_id == vehicle_id && t.status == TripStatus::Completed)
            .max_by_key(|t| t.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine_with_fleet, sample, ts};
    use super::*;
    use crate::error::EngineError;

    const BASE_LAT: f64 = 19.0760;
    const BASE_LON: f64 = 72.8777;

    #[test]
    fn start_trip_while_active_is_invalid_state() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        engine
            .start_trip(vehicle, driver, sample(BASE_LAT, BASE_LON, ts(8, 0)), Some(1200.0))
            .unwrap();
        let err = engine
            .start_trip(vehicle, driver, sample(BASE_LAT, BASE_LON, ts(8, 1)), None)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidState(_)));
    }

    #[test]
    fn end_trip_while_idle_is_invalid_state() {
        let (mut engine, _, _) = engine_with_fleet();
        let err = engine
            .end_trip(sample(BASE_LAT, BASE_LON, ts(9, 0)), None)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidState(_)));
    }

    #[test]
    fn start_trip_with_unknown_vehicle_is_not_found() {
        let (mut engine, _, driver) = engine_with_fleet();
        let err = engine
            .start_trip(Uuid::new_v4(), driver, sample(BASE_LAT, BASE_LON, ts(8, 0)), None)
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn sample_while_idle_is_ignored() {
        let (mut engine, _, _) = engine_with_fleet();
        engine.append_sample(sample(BASE_LAT, BASE_LON, ts(8, 0)));
        assert!(engine.current_trip().is_none());
        assert!(engine.trip_history().is_empty());
    }

    #[test]
    fn distance_is_summed_along_the_track_not_net_displacement() {
        let (mut engine, vehicle, driver) = engine_with_fleet();

        // Dogleg: north, then east, then back south. Net displacement is much
        // shorter than the path traveled.
        let p0 = sample(BASE_LAT, BASE_LON, ts(8, 0));
        let p1 = sample(BASE_LAT + 0.0450, BASE_LON, ts(8, 1));
        let p2 = sample(BASE_LAT + 0.0450, BASE_LON + 0.0450, ts(8, 2));
        let p3 = sample(BASE_LAT, BASE_LON + 0.0450, ts(8, 3));

        engine.start_trip(vehicle, driver, p0, None).unwrap();
        engine.append_sample(p1);
        engine.append_sample(p2);
        let trip = engine.end_trip(p3, None).unwrap();

        let expected = track_distance_km(&[p0, p1, p2, p3]);
        let straight = crate::geo::haversine_km(p0.latitude, p0.longitude, p3.latitude, p3.longitude);

        let distance = trip.distance_km.unwrap();
        assert_eq!(distance, expected);
        assert!(distance > straight + 1.0, "path {distance} vs straight {straight}");
    }

    #[test]
    fn completed_trip_moves_to_history_and_clears_active() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        engine
            .start_trip(vehicle, driver, sample(BASE_LAT, BASE_LON, ts(8, 0)), Some(500.0))
            .unwrap();
        assert!(engine.current_trip().is_some());

        let trip = engine
            .end_trip(sample(BASE_LAT + 0.01, BASE_LON, ts(8, 30)), Some(520.0))
            .unwrap();

        assert!(engine.current_trip().is_none());
        assert_eq!(engine.trip_history().len(), 1);
        assert_eq!(trip.status, TripStatus::Completed);
        assert_eq!(trip.end_time, Some(ts(8, 30)));
        assert_eq!(trip.odometer_end, Some(520.0));
        assert!(trip.distance_km.is_some());
        assert_eq!(engine.pending_sync_len(), 1);
    }

    #[test]
    fn active_trip_has_no_distance_until_completed() {
        let (mut engine, vehicle, driver) = engine_with_fleet();
        engine
            .start_trip(vehicle, driver, sample(BASE_LAT, BASE_LON, ts(8, 0)), None)
            .unwrap();
        engine.append_sample(sample(BASE_LAT + 0.01, BASE_LON, ts(8, 1)));
        let active = engine.current_trip().unwrap();
        assert_eq!(active.status, TripStatus::Active);
        assert!(active.distance_km.is_none());
        assert_eq!(active.tracking_points.len(), 2);
    }
}
