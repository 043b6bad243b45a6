//! Transport logistics tracking and fraud-detection engine for a rental
//! vehicle fleet.
//!
//! The engine records vehicle trips from periodic GPS samples, derives travel
//! distance over the sampled track, raises outstation triggers when a vehicle
//! leaves its geofenced home area, computes fuel efficiency against completed
//! trips and flags implausible fuel entries, and buffers every mutation in a
//! pending-sync queue until the hosting application drains it.

pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod models;
pub mod tracker;
