use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::info;

use fleet_trips::config::AppConfig;
use fleet_trips::engine::LogisticsEngine;
use fleet_trips::models::{GpsSample, PropulsionType};
use fleet_trips::tracker::run_tracker;

/// Drives one simulated tracked trip end to end: out of the home geofence,
/// then a fuel entry and a sync drain. Stands in for the presentation layer
/// that normally calls the engine.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!(
        "Starting fleet-trips engine (sample interval {}s, fraud threshold {} km/L)...",
        config.gps_sample_interval_secs, config.fraud_efficiency_threshold
    );

    let engine = Arc::new(Mutex::new(LogisticsEngine::new(
        config.fraud_efficiency_threshold,
    )));

    let (vehicle, driver) = {
        let mut engine = engine.lock().expect("engine mutex poisoned");
        let vehicle =
            engine.register_vehicle("Tata 407", "MH-04-AB-1234", PropulsionType::Diesel, Some(9.5));
        let driver = engine.register_driver("R. Sharma", "DL-0420110012345");
        engine.add_geofence("Mumbai metro area", 19.0760, 72.8777, 50.0);
        engine.start_trip(
            vehicle.id,
            driver.id,
            GpsSample::new(19.0760, 72.8777, Utc::now()),
            Some(41_250.0),
        )?;
        (vehicle, driver)
    };

    let (tx, rx) = mpsc::channel(100);
    let feed = tokio::spawn(run_tracker(engine.clone(), rx));

    // Simulated device readings heading north out of the zone, one per
    // configured interval.
    let route = [
        (19.2000, 72.8800),
        (19.4000, 72.8900),
        (19.6200, 72.9000), // ~60 km out, past the zone boundary
    ];
    let mut ticker = tokio::time::interval(Duration::from_secs(config.gps_sample_interval_secs));
    for (lat, lon) in route {
        ticker.tick().await;
        tx.send(GpsSample::new(lat, lon, Utc::now())).await?;
    }
    drop(tx);
    feed.await??;

    {
        let mut engine = engine.lock().expect("engine mutex poisoned");
        let trip = engine.end_trip(GpsSample::new(19.6500, 72.9000, Utc::now()), Some(41_315.0))?;
        info!(
            "Trip {} completed: {:.2} km, {} outstation trigger(s)",
            trip.id,
            trip.distance_km.unwrap_or(0.0),
            engine.outstation_triggers().len()
        );

        let entry = engine.record_fuel_entry(
            vehicle.id,
            5600.0,
            40.0,
            "receipts/fuel-0001.jpg",
            driver.id,
            None,
        )?;
        info!(
            "Fuel entry {}: efficiency {:?} km/L, fraud flag {}",
            entry.id(),
            entry.efficiency_km_per_l(),
            entry.flagged_as_fraud()
        );

        info!("{} events pending sync", engine.pending_sync_len());
        engine.drain_and_sync();
    }

    Ok(())
}
