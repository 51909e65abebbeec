use fleetmaster_types::{Maintenance, Trip};

use crate::query::{MaintenanceSort, TripSort, sort_maintenance, sort_trips};

/// How many cards each dashboard panel shows.
pub const PREVIEW_LIMIT: usize = 3;

/// Trips for the dashboard's upcoming panel: still open (not completed or
/// cancelled), soonest start first, at most `limit`.
pub fn upcoming_trips(trips: &[Trip], limit: usize) -> Vec<Trip> {
    let open: Vec<Trip> = trips.iter().filter(|t| t.is_open()).cloned().collect();
    let mut sorted = sort_trips(&open, TripSort::Oldest);
    sorted.truncate(limit);
    sorted
}

/// Maintenance tasks for the dashboard panel: not yet completed, soonest
/// due first, at most `limit`.
pub fn open_maintenance(items: &[Maintenance], limit: usize) -> Vec<Maintenance> {
    let open: Vec<Maintenance> = items
        .iter()
        .filter(|m| !m.is_completed())
        .cloned()
        .collect();
    let mut sorted = sort_maintenance(&open, MaintenanceSort::DueSoon);
    sorted.truncate(limit);
    sorted
}
