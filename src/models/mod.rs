pub mod fuel;
pub mod geofence;
pub mod outstation;
pub mod sample;
pub mod sync;
pub mod trip;
pub mod vehicle;

pub use fuel::FuelEntry;
pub use geofence::GeofenceZone;
pub use outstation::OutstationTrigger;
pub use sample::GpsSample;
pub use sync::{PendingSyncEvent, SyncAction, SyncDomain};
pub use trip::{Trip, TripStatus};
pub use vehicle::{Driver, PropulsionType, Vehicle};
