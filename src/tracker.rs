//! Periodic GPS feed: consumes device samples from a channel and appends them
//! to the engine until the sender side goes away.
//!
//! The device layer owns the sampling timer (one reading per configured
//! interval) and pushes already-resolved coordinate/timestamp pairs. Dropping
//! the sender cancels tracking; the engine itself is never made aware of the
//! feed, it only sees `append_sample` calls.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::engine::LogisticsEngine;
use crate::models::GpsSample;

pub async fn run_tracker(
    engine: Arc<Mutex<LogisticsEngine>>,
    mut samples: mpsc::Receiver<GpsSample>,
) -> anyhow::Result<()> {
    info!("GPS tracker feed started");

    while let Some(sample) = samples.recv().await {
        match engine.lock() {
            Ok(mut engine) => engine.append_sample(sample),
            Err(poisoned) => {
                warn!("Engine mutex poisoned; dropping sample");
                drop(poisoned);
            }
        }
    }

    info!("GPS tracker feed stopped: sample channel closed");
    Ok(())
}
