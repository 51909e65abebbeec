// Engine module - pure derivations over fleet record snapshots
// Sits between the store collaborator (snapshots in) and presentation
// (filtered/sorted collections and stats out). Holds no state and never
// reads the clock; every function takes an explicit reference instant
// where time matters.

pub mod classify;
pub mod dashboard;
pub mod query;
pub mod stats;

pub use classify::{
    DUE_SOON_WINDOW_DAYS, MaintenanceUrgency, TripTiming, classify_maintenance, classify_trip,
    maintenance_urgency,
};
pub use query::{
    MaintenanceSort, TripSort, VehicleSort, filter_by_search, filter_by_status,
    maintenance_search_fields, sort_maintenance, sort_trips, sort_vehicles, trip_search_fields,
    vehicle_search_fields,
};
pub use stats::{FleetStats, compute_fleet_stats};
