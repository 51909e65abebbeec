mod id;
mod maintenance;
mod trip;
mod vehicle;

pub use id::DocId;
pub use maintenance::{Maintenance, MaintenanceStatus};
pub use trip::{Trip, TripPriority, TripStatus};
pub use vehicle::{Vehicle, VehicleStatus};
